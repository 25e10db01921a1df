//! Maps domain: messages for travel and activation.

use bevy::ecs::message::Message;

use crate::maps::identity::MapId;

/// Asks for a travel sequence to another map. Dropped, never queued, while a
/// sequence is already in flight.
#[derive(Debug)]
pub struct TravelRequested {
    pub destination: MapId,
}

impl Message for TravelRequested {}

/// Fires once per travel, after the destination scene has been activated and
/// the player repositioned.
#[derive(Debug)]
pub struct ActiveMapChanged {
    pub previous: MapId,
    pub current: MapId,
}

impl Message for ActiveMapChanged {}
