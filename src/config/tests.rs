use super::*;

use crate::config::loader::load_difficulty_table;
use std::path::Path;

#[test]
fn builtin_table_covers_all_difficulties() {
    let table = DifficultyTable::builtin();
    for difficulty in Difficulty::ALL {
        let profile = table.profile(difficulty);
        assert!(profile.enemy_count > 0);
        assert!(profile.victory_time > 0.0);
        assert!(profile.max_spikes > 0);
    }
}

#[test]
fn presets_scale_with_difficulty() {
    let easy = builtin_profile(Difficulty::Easy);
    let normal = builtin_profile(Difficulty::Normal);
    let hard = builtin_profile(Difficulty::Hard);
    let nightmare = builtin_profile(Difficulty::Nightmare);

    assert!(easy.enemy_count < normal.enemy_count);
    assert!(normal.enemy_count < hard.enemy_count);
    assert!(hard.enemy_count < nightmare.enemy_count);

    assert!(easy.victory_time < nightmare.victory_time);
    assert!(easy.player_max_health > nightmare.player_max_health);
}

#[test]
fn wormhole_ranges_are_ordered() {
    for difficulty in Difficulty::ALL {
        let profile = builtin_profile(difficulty);
        assert!(profile.wormhole_relocate_min <= profile.wormhole_relocate_max);
        assert!(profile.wormholes_per_map_min <= profile.wormholes_per_map_max);
        assert!(profile.wormholes_per_map_min >= 1);
    }
}

#[test]
fn default_profile_is_normal() {
    let default = DifficultyProfile::default();
    let normal = builtin_profile(Difficulty::Normal);
    assert_eq!(default.enemy_count, normal.enemy_count);
    assert_eq!(default.victory_time, normal.victory_time);
}

#[test]
fn shipped_data_file_matches_builtins() {
    let table = load_difficulty_table(Path::new("assets/data/difficulty.ron"))
        .expect("shipped difficulty.ron should parse");
    for difficulty in Difficulty::ALL {
        let loaded = match difficulty {
            Difficulty::Easy => &table.easy,
            Difficulty::Normal => &table.normal,
            Difficulty::Hard => &table.hard,
            Difficulty::Nightmare => &table.nightmare,
        };
        let builtin = builtin_profile(difficulty);
        assert_eq!(loaded.enemy_count, builtin.enemy_count);
        assert_eq!(loaded.victory_time, builtin.victory_time);
        assert_eq!(loaded.max_spikes, builtin.max_spikes);
    }
}

#[test]
fn missing_file_is_an_error() {
    let result = load_difficulty_table(Path::new("assets/data/does_not_exist.ron"));
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.message.contains("IO error"));
}
