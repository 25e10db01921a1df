//! Maps domain: arena scenes, the active-map record, and travel sequencing.

mod arena;
mod events;
mod identity;
mod presence;
mod transition;

#[cfg(test)]
mod tests;

pub use arena::{MapScene, MapSceneRoot, SpawnPoint, ARENA_HALF_EXTENT};
pub use events::{ActiveMapChanged, TravelRequested};
pub use identity::{ActiveMap, MapAssignment, MapId};
pub use transition::SceneTransition;

use bevy::prelude::*;

use crate::core::GameState;
use crate::maps::arena::{cleanup_maps, spawn_initial_map};
use crate::maps::presence::sync_map_dwellers;
use crate::maps::transition::{handle_travel_requests, run_transition};

pub struct MapsPlugin;

impl Plugin for MapsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveMap>()
            .init_resource::<SceneTransition>()
            .add_message::<TravelRequested>()
            .add_message::<ActiveMapChanged>()
            .add_systems(
                OnEnter(GameState::Playing),
                spawn_initial_map.after(crate::core::start_session),
            )
            .add_systems(OnExit(GameState::Playing), cleanup_maps)
            .add_systems(
                Update,
                (handle_travel_requests, run_transition, sync_map_dwellers)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
