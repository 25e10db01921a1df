//! Victory domain: messages for plane changes and spike lifecycle.

use bevy::ecs::message::Message;

use crate::maps::MapId;
use crate::victory::state::SpikeDeactivationReason;

/// Fires whenever the demanding plane moves, before any preemption that the
/// move causes in the same tick.
#[derive(Debug)]
pub struct DemandingPlaneChanged {
    pub previous: Option<MapId>,
    pub current: Option<MapId>,
}

impl Message for DemandingPlaneChanged {}

#[derive(Debug)]
pub struct SpikePlanted {
    pub map: MapId,
}

impl Message for SpikePlanted {}

#[derive(Debug)]
pub struct SpikeDeactivated {
    pub map: MapId,
    pub reason: SpikeDeactivationReason,
}

impl Message for SpikeDeactivated {}

#[derive(Debug)]
pub struct VictoryAchieved {
    pub map: MapId,
}

impl Message for VictoryAchieved {}
