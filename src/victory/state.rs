//! Victory domain: demanding-plane evaluation and the spike countdown.

use bevy::prelude::*;

use crate::maps::MapId;

/// A planted victory spike. Its countdown lives in [`VictoryState`]; the
/// entity only anchors the world-space marker and its contact collider.
#[derive(Component, Debug)]
pub struct VictorySpike;

/// The map currently holding the largest share of the enemy pool. A first-max
/// scan breaks ties toward the lowest map, so the result is stable while the
/// census is; an empty census resolves to the first map at count zero. `None`
/// only before the first evaluation of a session.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DemandingPlane(pub Option<MapId>);

pub fn demanding_map(counts: [usize; MapId::COUNT]) -> MapId {
    let mut best = MapId::Map1;
    for map in MapId::ALL {
        if counts[map.index()] > counts[best.index()] {
            best = map;
        }
    }
    best
}

/// One evaluation step. `None` while the plane holds still; on a move, the new
/// plane plus the planted map the move strands, if any. The caller announces
/// the change before it applies the preemption.
pub fn evaluate_plane_shift(
    previous: Option<MapId>,
    counts: [usize; MapId::COUNT],
    planted: Option<MapId>,
) -> Option<(MapId, Option<MapId>)> {
    let current = demanding_map(counts);
    if previous == Some(current) {
        return None;
    }
    let preempted = planted.filter(|&map| map != current);
    Some((current, preempted))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpikeDeactivationReason {
    /// The demanding plane moved away from the spike's map.
    Preempted,
    /// An enemy reached the spike.
    EnemyContact,
    /// A newly planted spike replaced it.
    Superseded,
    /// The spike entity was destroyed from outside the countdown.
    Destroyed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CountdownStep {
    Idle,
    Running(f32),
    Completed,
}

/// The one victory attempt a session may have active.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub enum VictoryState {
    #[default]
    Idle,
    Planted {
        map: MapId,
        spike: Entity,
        remaining: f32,
    },
}

impl VictoryState {
    /// Arms the countdown. An already planted spike is superseded; its map and
    /// entity come back so the caller can tear it down.
    pub fn plant(
        &mut self,
        map: MapId,
        spike: Entity,
        victory_time: f32,
    ) -> Option<(MapId, Entity)> {
        let superseded = match *self {
            VictoryState::Planted { map, spike, .. } => Some((map, spike)),
            VictoryState::Idle => None,
        };
        *self = VictoryState::Planted {
            map,
            spike,
            remaining: victory_time,
        };
        superseded
    }

    pub fn deactivate(&mut self) {
        *self = VictoryState::Idle;
    }

    /// Deactivates if `touched` is the planted spike, returning its map.
    pub fn contact_deactivation(&mut self, touched: Entity) -> Option<MapId> {
        match *self {
            VictoryState::Planted { map, spike, .. } if spike == touched => {
                *self = VictoryState::Idle;
                Some(map)
            }
            _ => None,
        }
    }

    pub fn planted_map(&self) -> Option<MapId> {
        match self {
            VictoryState::Planted { map, .. } => Some(*map),
            VictoryState::Idle => None,
        }
    }

    pub fn spike_entity(&self) -> Option<Entity> {
        match self {
            VictoryState::Planted { spike, .. } => Some(*spike),
            VictoryState::Idle => None,
        }
    }

    pub fn remaining(&self) -> Option<f32> {
        match self {
            VictoryState::Planted { remaining, .. } => Some(*remaining),
            VictoryState::Idle => None,
        }
    }

    /// Decrements the countdown. Runs whenever a spike is planted, no matter
    /// where the player stands.
    pub fn tick(&mut self, delta: f32) -> CountdownStep {
        match self {
            VictoryState::Idle => CountdownStep::Idle,
            VictoryState::Planted { remaining, .. } => {
                *remaining -= delta;
                if *remaining <= 0.0 {
                    CountdownStep::Completed
                } else {
                    CountdownStep::Running(*remaining)
                }
            }
        }
    }
}
