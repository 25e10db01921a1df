//! Skills domain: spike planting. On the demanding plane the spike arms the
//! victory countdown; anywhere else it is a regular trap that relocates the
//! first enemy to step on it.

use std::collections::VecDeque;

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::config::DifficultyProfile;
use crate::enemies::{Enemy, RelocateEnemy};
use crate::maps::{ActiveMap, MapAssignment, SceneTransition};
use crate::player::Player;
use crate::skills::cooldowns::{Skill, SkillCooldowns};
use crate::victory::{
    DemandingPlane, SpikeDeactivated, SpikeDeactivationReason, SpikePlanted, VictorySpike,
    VictoryState,
};

const SPIKE_HEIGHT: f32 = 1.2;
const SPIKE_RADIUS: f32 = 0.5;

/// A regular trap. Single use.
#[derive(Component, Debug)]
pub struct SpikeTrap;

/// Planting order of live traps, oldest first. Enforces the per-session cap.
#[derive(Resource, Debug, Default)]
pub struct TrapRoster(pub VecDeque<Entity>);

pub(crate) fn cast_spike(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut cooldowns: ResMut<SkillCooldowns>,
    profile: Res<DifficultyProfile>,
    transition: Res<SceneTransition>,
    active_map: Res<ActiveMap>,
    demanding: Res<DemandingPlane>,
    mut victory: ResMut<VictoryState>,
    mut roster: ResMut<TrapRoster>,
    mut planted: MessageWriter<SpikePlanted>,
    mut deactivated: MessageWriter<SpikeDeactivated>,
    player: Query<&Transform, With<Player>>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyK) || transition.is_active() {
        return;
    }
    let Ok(transform) = player.single() else {
        return;
    };
    if !cooldowns.try_use(Skill::Spike, profile.spike_cooldown) {
        return;
    }
    let position = Vec3::new(
        transform.translation.x,
        SPIKE_HEIGHT / 2.0,
        transform.translation.z,
    );
    let mesh = meshes.add(Cone {
        radius: SPIKE_RADIUS,
        height: SPIKE_HEIGHT,
    });

    if demanding.0 == Some(active_map.0) {
        let spike = commands
            .spawn((
                VictorySpike,
                MapAssignment(active_map.0),
                Mesh3d(mesh),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgb(1.0, 0.85, 0.2),
                    emissive: LinearRgba::rgb(0.8, 0.6, 0.1),
                    ..default()
                })),
                Transform::from_translation(position),
                RigidBody::Static,
                Collider::sphere(SPIKE_RADIUS),
                Sensor,
                CollisionEventsEnabled,
            ))
            .id();
        // The superseded spike falls before the new plant is announced.
        if let Some((old_map, old_spike)) = victory.plant(active_map.0, spike, profile.victory_time)
        {
            if let Ok(mut old_spike) = commands.get_entity(old_spike) {
                old_spike.despawn();
            }
            deactivated.write(SpikeDeactivated {
                map: old_map,
                reason: SpikeDeactivationReason::Superseded,
            });
            info!("[SKILLS] New spike supersedes the one on {:?}", old_map);
        }
        planted.write(SpikePlanted { map: active_map.0 });
        info!(
            "[SKILLS] Victory spike planted on {:?}, {}s to hold",
            active_map.0, profile.victory_time
        );
        return;
    }

    let trap = commands
        .spawn((
            SpikeTrap,
            MapAssignment(active_map.0),
            Mesh3d(mesh),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.6, 0.6, 0.65),
                ..default()
            })),
            Transform::from_translation(position),
            RigidBody::Static,
            Collider::sphere(SPIKE_RADIUS),
            Sensor,
            CollisionEventsEnabled,
        ))
        .id();
    roster.0.push_back(trap);
    while roster.0.len() > profile.max_spikes {
        if let Some(oldest) = roster.0.pop_front() {
            if let Ok(mut oldest) = commands.get_entity(oldest) {
                oldest.despawn();
            }
        }
    }
    info!("[SKILLS] Trap planted on {:?}", active_map.0);
}

/// A trap fires once: the enemy that springs it is sent to a random map.
pub(crate) fn handle_trap_contacts(
    mut collisions: MessageReader<CollisionStart>,
    traps: Query<(), With<SpikeTrap>>,
    enemies: Query<(), With<Enemy>>,
    mut roster: ResMut<TrapRoster>,
    mut relocations: MessageWriter<RelocateEnemy>,
    mut commands: Commands,
) {
    for contact in collisions.read() {
        let (a, b) = (contact.collider1, contact.collider2);
        let trap = if traps.contains(a) {
            a
        } else if traps.contains(b) {
            b
        } else {
            continue;
        };
        let other = if trap == a { b } else { a };
        if !enemies.contains(other) {
            continue;
        }
        relocations.write(RelocateEnemy { enemy: other });
        roster.0.retain(|&entity| entity != trap);
        if let Ok(mut trap) = commands.get_entity(trap) {
            trap.despawn();
        }
    }
}

pub(crate) fn cleanup_traps(
    mut commands: Commands,
    traps: Query<Entity, With<SpikeTrap>>,
    mut roster: ResMut<TrapRoster>,
) {
    for trap in &traps {
        commands.entity(trap).despawn();
    }
    roster.0.clear();
}
