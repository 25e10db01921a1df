//! Wormholes domain: the wormhole itself and travel candidate selection.

use bevy::prelude::*;
use rand::Rng;

use crate::config::DifficultyProfile;
use crate::maps::MapId;

/// A wandering portal. Periodically jumps to a new spot on its map and grows
/// back in from nothing.
#[derive(Component, Debug)]
pub struct Wormhole {
    pub relocate: Timer,
    pub grow: f32,
}

impl Wormhole {
    pub fn new(rng: &mut impl Rng, profile: &DifficultyProfile) -> Self {
        let interval =
            rng.random_range(profile.wormhole_relocate_min..=profile.wormhole_relocate_max);
        Self {
            relocate: Timer::from_seconds(interval, TimerMode::Once),
            grow: 1.0,
        }
    }
}

/// Maps a player travel may lead to. The current map is never a candidate;
/// stepping into a wormhole always goes somewhere else.
pub fn candidate_maps(current: MapId) -> Vec<MapId> {
    MapId::ALL
        .iter()
        .copied()
        .filter(|&map| map != current)
        .collect()
}
