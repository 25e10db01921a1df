//! Enemies domain: session pool, per-map census, relocation, steering.

mod ai;
mod components;
mod events;
mod registry;

#[cfg(test)]
mod tests;

pub use components::{Enemy, Roam};
pub use events::{EnemyPopulationChanged, RelocateEnemy};
pub use registry::{EnemyCensus, ENEMY_RADIUS};
pub(crate) use registry::take_enemy_census;

use bevy::prelude::*;

use crate::core::GameState;
use crate::enemies::ai::drive_enemy_motion;
use crate::enemies::registry::{cleanup_enemies, relocate_enemies, spawn_enemy_pool};

pub struct EnemiesPlugin;

impl Plugin for EnemiesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyCensus>()
            .add_message::<EnemyPopulationChanged>()
            .add_message::<RelocateEnemy>()
            .add_systems(
                OnEnter(GameState::Playing),
                spawn_enemy_pool.after(crate::core::start_session),
            )
            .add_systems(OnExit(GameState::Playing), cleanup_enemies)
            .add_systems(
                Update,
                (relocate_enemies, take_enemy_census)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                drive_enemy_motion.run_if(in_state(GameState::Playing)),
            );
    }
}
