//! Victory domain: per-tick evaluation, spike contacts, and the countdown.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::GameState;
use crate::enemies::{Enemy, EnemyCensus};
use crate::victory::events::{
    DemandingPlaneChanged, SpikeDeactivated, VictoryAchieved,
};
use crate::victory::state::{
    evaluate_plane_shift, CountdownStep, DemandingPlane, SpikeDeactivationReason, VictorySpike,
    VictoryState,
};

/// Re-evaluates the demanding plane from the census. A plane change is
/// announced first, then any spike stranded on the old plane is preempted.
pub(crate) fn update_demanding_plane(
    census: Res<EnemyCensus>,
    mut demanding: ResMut<DemandingPlane>,
    mut victory: ResMut<VictoryState>,
    mut plane_changed: MessageWriter<DemandingPlaneChanged>,
    mut deactivated: MessageWriter<SpikeDeactivated>,
    mut commands: Commands,
) {
    let Some((current, preempted)) =
        evaluate_plane_shift(demanding.0, census.counts(), victory.planted_map())
    else {
        return;
    };
    plane_changed.write(DemandingPlaneChanged {
        previous: demanding.0,
        current: Some(current),
    });
    info!("[VICTORY] Demanding plane {:?} -> {:?}", demanding.0, current);
    demanding.0 = Some(current);

    if let Some(map) = preempted {
        if let Some(spike) = victory.spike_entity() {
            if let Ok(mut spike) = commands.get_entity(spike) {
                spike.despawn();
            }
        }
        victory.deactivate();
        deactivated.write(SpikeDeactivated {
            map,
            reason: SpikeDeactivationReason::Preempted,
        });
        warn!("[VICTORY] Spike on {:?} preempted by plane change", map);
    }
}

/// Enemies that reach the planted spike smash it, felling the countdown in the
/// same tick with its own reason.
pub(crate) fn handle_spike_contacts(
    mut collisions: MessageReader<CollisionStart>,
    spikes: Query<(), With<VictorySpike>>,
    enemies: Query<(), With<Enemy>>,
    mut victory: ResMut<VictoryState>,
    mut deactivated: MessageWriter<SpikeDeactivated>,
    mut commands: Commands,
) {
    for contact in collisions.read() {
        let (a, b) = (contact.collider1, contact.collider2);
        let spike = if spikes.contains(a) {
            a
        } else if spikes.contains(b) {
            b
        } else {
            continue;
        };
        let other = if spike == a { b } else { a };
        if !enemies.contains(other) {
            continue;
        }
        if let Some(map) = victory.contact_deactivation(spike) {
            deactivated.write(SpikeDeactivated {
                map,
                reason: SpikeDeactivationReason::EnemyContact,
            });
            warn!("[VICTORY] Spike on {:?} smashed by an enemy", map);
        }
        if let Ok(mut spike) = commands.get_entity(spike) {
            spike.despawn();
        }
    }
}

/// Ticks the countdown while a spike is planted. An entity that vanished
/// outside the countdown is reconciled here as a destruction.
pub(crate) fn update_victory_countdown(
    time: Res<Time>,
    mut victory: ResMut<VictoryState>,
    spikes: Query<(), With<VictorySpike>>,
    mut deactivated: MessageWriter<SpikeDeactivated>,
    mut achieved: MessageWriter<VictoryAchieved>,
    mut next_state: ResMut<NextState<GameState>>,
    mut commands: Commands,
) {
    let Some(map) = victory.planted_map() else {
        return;
    };
    if let Some(spike) = victory.spike_entity() {
        if !spikes.contains(spike) {
            victory.deactivate();
            deactivated.write(SpikeDeactivated {
                map,
                reason: SpikeDeactivationReason::Destroyed,
            });
            return;
        }
    }
    if let CountdownStep::Completed = victory.tick(time.delta_secs()) {
        if let Some(spike) = victory.spike_entity() {
            if let Ok(mut spike) = commands.get_entity(spike) {
                spike.despawn();
            }
        }
        victory.deactivate();
        achieved.write(VictoryAchieved { map });
        info!("[VICTORY] Countdown complete on {:?}", map);
        next_state.set(GameState::Victory);
    }
}

pub(crate) fn cleanup_victory(
    mut commands: Commands,
    spikes: Query<Entity, With<VictorySpike>>,
    mut victory: ResMut<VictoryState>,
    mut demanding: ResMut<DemandingPlane>,
) {
    for spike in &spikes {
        commands.entity(spike).despawn();
    }
    *victory = VictoryState::default();
    *demanding = DemandingPlane::default();
}
