//! UI domain: menu, HUD, fade overlay, and end screens.

mod fade;
mod hud_health;
mod hud_skills;
mod hud_status;
mod menu;
mod screens;

pub use fade::FadeOverlay;
pub use hud_status::{CountdownText, MapCard, MapStatusUI};

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::fade::{cleanup_fade_overlay, spawn_fade_overlay, update_fade_overlay};
use crate::ui::hud_health::{cleanup_health_bar, spawn_health_bar, update_health_bar};
use crate::ui::hud_skills::{cleanup_skill_bar, spawn_skill_bar, update_skill_bar};
use crate::ui::hud_status::{
    cleanup_map_status, spawn_map_status, update_countdown_text, update_map_status,
};
use crate::ui::menu::{
    cleanup_main_menu, handle_menu_input, spawn_main_menu, update_menu_selection,
};
use crate::ui::screens::{
    cleanup_end_screen, handle_end_screen_input, spawn_game_over_screen, spawn_victory_screen,
};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::MainMenu), spawn_main_menu)
            .add_systems(OnExit(GameState::MainMenu), cleanup_main_menu)
            .add_systems(
                Update,
                (handle_menu_input, update_menu_selection)
                    .run_if(in_state(GameState::MainMenu)),
            )
            .add_systems(
                OnEnter(GameState::Playing),
                (spawn_map_status, spawn_health_bar, spawn_skill_bar, spawn_fade_overlay),
            )
            .add_systems(
                OnExit(GameState::Playing),
                (
                    cleanup_map_status,
                    cleanup_health_bar,
                    cleanup_skill_bar,
                    cleanup_fade_overlay,
                ),
            )
            .add_systems(
                Update,
                (
                    update_map_status,
                    update_countdown_text,
                    update_health_bar,
                    update_skill_bar,
                    update_fade_overlay,
                )
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(OnEnter(GameState::Victory), spawn_victory_screen)
            .add_systems(OnExit(GameState::Victory), cleanup_end_screen)
            .add_systems(OnEnter(GameState::GameOver), spawn_game_over_screen)
            .add_systems(OnExit(GameState::GameOver), cleanup_end_screen)
            .add_systems(
                Update,
                handle_end_screen_input
                    .run_if(in_state(GameState::Victory).or(in_state(GameState::GameOver))),
            );
    }
}
