//! Victory domain: demanding-plane evaluation and the victory-spike countdown.

mod events;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use events::{DemandingPlaneChanged, SpikeDeactivated, SpikePlanted, VictoryAchieved};
pub use state::{
    demanding_map, evaluate_plane_shift, CountdownStep, DemandingPlane, SpikeDeactivationReason,
    VictorySpike, VictoryState,
};

use bevy::prelude::*;

use crate::core::GameState;
use crate::victory::systems::{
    cleanup_victory, handle_spike_contacts, update_demanding_plane, update_victory_countdown,
};

pub struct VictoryPlugin;

impl Plugin for VictoryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DemandingPlane>()
            .init_resource::<VictoryState>()
            .add_message::<DemandingPlaneChanged>()
            .add_message::<SpikePlanted>()
            .add_message::<SpikeDeactivated>()
            .add_message::<VictoryAchieved>()
            .add_systems(OnExit(GameState::Playing), cleanup_victory)
            .add_systems(
                Update,
                (
                    update_demanding_plane,
                    handle_spike_contacts,
                    update_victory_countdown,
                )
                    .chain()
                    .after(crate::enemies::take_enemy_census)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
