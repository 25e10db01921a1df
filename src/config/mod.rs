//! Config domain: difficulty presets loaded from RON with built-in fallbacks.

mod loader;
mod profile;

#[cfg(test)]
mod tests;

pub use profile::{Difficulty, DifficultyProfile, DifficultyTable, builtin_profile};

use bevy::prelude::*;

use crate::config::loader::setup_difficulty_table;

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DifficultyProfile>()
            .add_systems(PreStartup, setup_difficulty_table);
    }
}
