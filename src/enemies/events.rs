//! Enemies domain: messages for census changes and relocation.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::maps::MapId;

/// Fires when the per-map counts change, and after every relocation batch
/// even if an enemy drew its own map back.
#[derive(Debug)]
pub struct EnemyPopulationChanged {
    pub counts: [usize; MapId::COUNT],
}

impl Message for EnemyPopulationChanged {}

/// Asks for one enemy to be reassigned to a random map. The draw covers all
/// maps, so the enemy may land back on the map it already occupies.
#[derive(Debug)]
pub struct RelocateEnemy {
    pub enemy: Entity,
}

impl Message for RelocateEnemy {}
