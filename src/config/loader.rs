//! Loader for the difficulty RON file at startup.

use bevy::prelude::*;
use ron::Options;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::config::profile::{DifficultyProfile, DifficultyTable};

pub const DIFFICULTY_FILE: &str = "assets/data/difficulty.ron";

/// Error type for config loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// On-disk layout of `difficulty.ron`.
#[derive(Debug, Deserialize)]
struct DifficultyFile {
    easy: DifficultyProfile,
    normal: DifficultyProfile,
    hard: DifficultyProfile,
    nightmare: DifficultyProfile,
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub fn load_difficulty_table(path: &Path) -> Result<DifficultyTable, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    let data: DifficultyFile = ron_options()
        .from_str(&contents)
        .map_err(|e| ConfigLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })?;

    Ok(DifficultyTable {
        easy: data.easy,
        normal: data.normal,
        hard: data.hard,
        nightmare: data.nightmare,
    })
}

/// Resolve the preset table once at startup; parse failures fall back to the
/// built-in presets so a broken data file never blocks the game.
pub(crate) fn setup_difficulty_table(mut commands: Commands) {
    match load_difficulty_table(Path::new(DIFFICULTY_FILE)) {
        Ok(table) => {
            info!("Loaded difficulty presets from {}", DIFFICULTY_FILE);
            commands.insert_resource(table);
        }
        Err(e) => {
            error!("{} - using built-in presets", e);
            commands.insert_resource(DifficultyTable::builtin());
        }
    }
}
