//! Core domain: game states, session lifecycle, camera.

mod session;
mod state;
mod systems;

pub use session::{RunConfig, SessionRng};
pub(crate) use session::start_session;
pub use state::GameState;

use bevy::prelude::*;

use crate::core::session::reroll_seed;
use crate::core::systems::{follow_player, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<RunConfig>()
            .init_resource::<SessionRng>()
            .add_systems(Startup, setup_camera)
            .add_systems(OnEnter(GameState::Playing), start_session)
            .add_systems(OnExit(GameState::Playing), reroll_seed)
            .add_systems(
                Update,
                follow_player.run_if(in_state(GameState::Playing)),
            );
    }
}
