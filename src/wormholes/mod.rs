//! Wormholes domain: wandering portals that move players and enemies around.

mod components;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{candidate_maps, Wormhole};

use bevy::prelude::*;

use crate::core::GameState;
use crate::wormholes::systems::{
    dispatch_wormhole_contacts, grow_wormholes, relocate_wormholes,
};

pub struct WormholesPlugin;

impl Plugin for WormholesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (relocate_wormholes, grow_wormholes, dispatch_wormhole_contacts)
                .run_if(in_state(GameState::Playing)),
        );
    }
}
