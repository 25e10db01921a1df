//! Core domain: session configuration and the session-scoped RNG.
//!
//! A "session" is one pass through `GameState::Playing`. Every domain registers
//! its own OnEnter setup and OnExit teardown against that state; this module owns
//! the pieces they all share: the run configuration (seed + chosen difficulty)
//! and the seeded RNG every gameplay roll draws from.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::Difficulty;

#[derive(Resource, Debug)]
pub struct RunConfig {
    pub seed: u64,
    pub difficulty: Difficulty,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
            difficulty: Difficulty::Normal,
        }
    }
}

/// Session-scoped RNG. Reseeded from `RunConfig.seed` at session start so a
/// session is reproducible from its seed alone.
#[derive(Resource, Debug)]
pub struct SessionRng(pub ChaCha8Rng);

impl Default for SessionRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(0))
    }
}

pub(crate) fn start_session(run_config: Res<RunConfig>, mut rng: ResMut<SessionRng>) {
    rng.0 = ChaCha8Rng::seed_from_u64(run_config.seed);
    info!(
        "Session started (seed: {}, difficulty: {:?})",
        run_config.seed, run_config.difficulty
    );
}

/// Roll a fresh seed for the next session so restarts don't replay the last one.
pub(crate) fn reroll_seed(mut run_config: ResMut<RunConfig>) {
    run_config.seed = rand::rng().random();
}
