//! Dormancy sync for map dwellers.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::maps::identity::{ActiveMap, MapAssignment, MapId};

/// Action bringing one dweller in line with the active map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DwellerSync {
    Wake,
    Sleep,
    Leave,
}

/// Decides what to do with a dweller given its assignment, the active map,
/// and whether it is currently dormant. Idempotent: once the action is
/// applied, the same inputs resolve to `Leave`.
pub(crate) fn dweller_sync(assignment: MapId, active: MapId, dormant: bool) -> DwellerSync {
    match (assignment == active, dormant) {
        (true, true) => DwellerSync::Wake,
        (false, false) => DwellerSync::Sleep,
        _ => DwellerSync::Leave,
    }
}

/// Keeps every map dweller's visibility and physics in line with the active
/// map. Touches only entities whose state is wrong.
pub(crate) fn sync_map_dwellers(
    active_map: Res<ActiveMap>,
    mut commands: Commands,
    mut dwellers: Query<(
        Entity,
        &MapAssignment,
        &mut Visibility,
        Has<RigidBodyDisabled>,
    )>,
) {
    for (entity, assignment, mut visibility, dormant) in &mut dwellers {
        match dweller_sync(assignment.0, active_map.0, dormant) {
            DwellerSync::Wake => {
                *visibility = Visibility::Inherited;
                commands
                    .entity(entity)
                    .remove::<(RigidBodyDisabled, ColliderDisabled)>();
            }
            DwellerSync::Sleep => {
                *visibility = Visibility::Hidden;
                commands
                    .entity(entity)
                    .insert((RigidBodyDisabled, ColliderDisabled));
            }
            DwellerSync::Leave => {}
        }
    }
}
