//! Map identity shared by every domain.

use bevy::prelude::*;

/// One of the four arenas a session rotates through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MapId {
    Map1,
    Map2,
    Map3,
    Map4,
}

impl MapId {
    pub const COUNT: usize = 4;

    pub const ALL: [MapId; MapId::COUNT] = [MapId::Map1, MapId::Map2, MapId::Map3, MapId::Map4];

    pub fn index(self) -> usize {
        match self {
            MapId::Map1 => 0,
            MapId::Map2 => 1,
            MapId::Map3 => 2,
            MapId::Map4 => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MapId::Map1 => "MAP 1",
            MapId::Map2 => "MAP 2",
            MapId::Map3 => "MAP 3",
            MapId::Map4 => "MAP 4",
        }
    }
}

/// Which map an entity currently dwells on. Carried by enemies and planted
/// spikes; reassignment alone moves a dweller between maps.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapAssignment(pub MapId);

/// The map the player currently stands on. Written only when a travel
/// sequence activates its destination.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveMap(pub MapId);

impl Default for ActiveMap {
    fn default() -> Self {
        Self(MapId::Map1)
    }
}
