//! Player domain: the persistent ball, health, and contact damage.

mod components;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Health, Player, PLAYER_RADIUS, PLAYER_SPEED};
pub use systems::EnemyContacts;

use bevy::prelude::*;

use crate::core::GameState;
use crate::player::systems::{
    apply_contact_damage, check_player_death, cleanup_player, move_player, regenerate_health,
    spawn_player, track_enemy_contacts,
};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyContacts>()
            .add_systems(
                OnEnter(GameState::Playing),
                spawn_player.after(crate::core::start_session),
            )
            .add_systems(OnExit(GameState::Playing), cleanup_player)
            .add_systems(
                Update,
                (
                    move_player,
                    track_enemy_contacts,
                    apply_contact_damage,
                    regenerate_health,
                    check_player_death,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
