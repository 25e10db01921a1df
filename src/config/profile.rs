//! Config domain: difficulty presets and the per-session parameter table.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Nightmare,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Nightmare,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Normal => "NORMAL",
            Difficulty::Hard => "HARD",
            Difficulty::Nightmare => "NIGHTMARE",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Difficulty::Easy => Color::srgb(0.2, 1.0, 0.4),
            Difficulty::Normal => Color::srgb(0.0, 0.9, 1.0),
            Difficulty::Hard => Color::srgb(1.0, 0.5, 0.0),
            Difficulty::Nightmare => Color::srgb(1.0, 0.15, 0.15),
        }
    }
}

/// Immutable parameter table for one session. Selected once in the main menu;
/// every other domain reads its tunables from here and never writes back.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct DifficultyProfile {
    pub enemy_count: usize,
    pub enemy_speed: f32,
    pub enemy_chase_radius: f32,
    pub player_max_health: f32,
    pub regen_rate: f32,
    pub regen_cooldown: f32,
    pub enemy_damage_per_second: f32,
    pub spike_cooldown: f32,
    pub max_spikes: usize,
    pub victory_time: f32,
    pub wormhole_relocate_min: f32,
    pub wormhole_relocate_max: f32,
    pub wormholes_per_map_min: usize,
    pub wormholes_per_map_max: usize,
    pub shockwave_cooldown: f32,
    pub dash_cooldown: f32,
    pub bolt_cooldown: f32,
    pub fade_duration: f32,
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        builtin_profile(Difficulty::Normal)
    }
}

/// Built-in preset table, used whenever `assets/data/difficulty.ron` is missing
/// or fails to parse.
pub fn builtin_profile(difficulty: Difficulty) -> DifficultyProfile {
    match difficulty {
        Difficulty::Easy => DifficultyProfile {
            enemy_count: 8,
            enemy_speed: 0.8,
            enemy_chase_radius: 7.0,
            player_max_health: 150.0,
            regen_rate: 8.0,
            regen_cooldown: 1.5,
            enemy_damage_per_second: 20.0,
            spike_cooldown: 2.0,
            max_spikes: 7,
            victory_time: 30.0,
            wormhole_relocate_min: 3.0,
            wormhole_relocate_max: 8.0,
            wormholes_per_map_min: 4,
            wormholes_per_map_max: 6,
            shockwave_cooldown: 4.0,
            dash_cooldown: 3.0,
            bolt_cooldown: 1.5,
            fade_duration: 0.3,
        },
        Difficulty::Normal => DifficultyProfile {
            enemy_count: 16,
            enemy_speed: 3.0,
            enemy_chase_radius: 10.0,
            player_max_health: 100.0,
            regen_rate: 5.0,
            regen_cooldown: 2.0,
            enemy_damage_per_second: 30.0,
            spike_cooldown: 3.0,
            max_spikes: 5,
            victory_time: 45.0,
            wormhole_relocate_min: 5.0,
            wormhole_relocate_max: 15.0,
            wormholes_per_map_min: 2,
            wormholes_per_map_max: 4,
            shockwave_cooldown: 5.0,
            dash_cooldown: 4.0,
            bolt_cooldown: 2.0,
            fade_duration: 0.3,
        },
        Difficulty::Hard => DifficultyProfile {
            enemy_count: 24,
            enemy_speed: 4.0,
            enemy_chase_radius: 14.0,
            player_max_health: 75.0,
            regen_rate: 3.0,
            regen_cooldown: 3.0,
            enemy_damage_per_second: 40.0,
            spike_cooldown: 5.0,
            max_spikes: 3,
            victory_time: 60.0,
            wormhole_relocate_min: 10.0,
            wormhole_relocate_max: 20.0,
            wormholes_per_map_min: 1,
            wormholes_per_map_max: 3,
            shockwave_cooldown: 7.0,
            dash_cooldown: 5.0,
            bolt_cooldown: 3.0,
            fade_duration: 0.3,
        },
        Difficulty::Nightmare => DifficultyProfile {
            enemy_count: 32,
            enemy_speed: 5.0,
            enemy_chase_radius: 18.0,
            player_max_health: 50.0,
            // No regen on Nightmare
            regen_rate: 0.0,
            regen_cooldown: 999.0,
            enemy_damage_per_second: 50.0,
            spike_cooldown: 8.0,
            max_spikes: 2,
            victory_time: 90.0,
            wormhole_relocate_min: 20.0,
            wormhole_relocate_max: 40.0,
            wormholes_per_map_min: 1,
            wormholes_per_map_max: 2,
            shockwave_cooldown: 10.0,
            dash_cooldown: 7.0,
            bolt_cooldown: 4.0,
            fade_duration: 0.3,
        },
    }
}

/// All four presets, resolved once at startup (RON file or built-ins).
#[derive(Resource, Debug, Clone)]
pub struct DifficultyTable {
    pub easy: DifficultyProfile,
    pub normal: DifficultyProfile,
    pub hard: DifficultyProfile,
    pub nightmare: DifficultyProfile,
}

impl DifficultyTable {
    pub fn builtin() -> Self {
        Self {
            easy: builtin_profile(Difficulty::Easy),
            normal: builtin_profile(Difficulty::Normal),
            hard: builtin_profile(Difficulty::Hard),
            nightmare: builtin_profile(Difficulty::Nightmare),
        }
    }

    pub fn profile(&self, difficulty: Difficulty) -> &DifficultyProfile {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Normal => &self.normal,
            Difficulty::Hard => &self.hard,
            Difficulty::Nightmare => &self.nightmare,
        }
    }
}
