//! Skills domain: energy bolt that banishes the enemy it hits.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::config::DifficultyProfile;
use crate::enemies::{Enemy, RelocateEnemy};
use crate::maps::SceneTransition;
use crate::player::Player;
use crate::skills::cooldowns::{Skill, SkillCooldowns};

const BOLT_SPEED: f32 = 18.0;
const BOLT_RADIUS: f32 = 0.2;
const BOLT_LIFETIME: f32 = 2.0;

#[derive(Component, Debug)]
pub struct EnergyBolt {
    pub lifetime: Timer,
}

/// Fires at the nearest active enemy; no target, no shot, no cooldown spent.
pub(crate) fn cast_bolt(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut cooldowns: ResMut<SkillCooldowns>,
    profile: Res<DifficultyProfile>,
    transition: Res<SceneTransition>,
    player: Query<&Transform, With<Player>>,
    enemies: Query<&Transform, (With<Enemy>, Without<RigidBodyDisabled>, Without<Player>)>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyF) || transition.is_active() {
        return;
    }
    let Ok(origin) = player.single() else {
        return;
    };
    let Some(target) = enemies.iter().min_by(|a, b| {
        let da = a.translation.distance_squared(origin.translation);
        let db = b.translation.distance_squared(origin.translation);
        da.total_cmp(&db)
    }) else {
        return;
    };
    if !cooldowns.try_use(Skill::Bolt, profile.bolt_cooldown) {
        return;
    }
    let mut direction = target.translation - origin.translation;
    direction.y = 0.0;
    let direction = direction.normalize_or_zero();
    commands.spawn((
        EnergyBolt {
            lifetime: Timer::from_seconds(BOLT_LIFETIME, TimerMode::Once),
        },
        Mesh3d(meshes.add(Sphere::new(BOLT_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.3, 0.9, 1.0),
            emissive: LinearRgba::rgb(0.2, 0.8, 1.0),
            ..default()
        })),
        Transform::from_translation(origin.translation + direction + Vec3::Y * 0.3),
        RigidBody::Dynamic,
        GravityScale(0.0),
        Collider::sphere(BOLT_RADIUS),
        Sensor,
        CollisionEventsEnabled,
        LinearVelocity(direction * BOLT_SPEED),
    ));
}

pub(crate) fn handle_bolt_hits(
    mut collisions: MessageReader<CollisionStart>,
    bolts: Query<(), With<EnergyBolt>>,
    enemies: Query<(), With<Enemy>>,
    mut relocations: MessageWriter<RelocateEnemy>,
    mut commands: Commands,
) {
    for contact in collisions.read() {
        let (a, b) = (contact.collider1, contact.collider2);
        let bolt = if bolts.contains(a) {
            a
        } else if bolts.contains(b) {
            b
        } else {
            continue;
        };
        let other = if bolt == a { b } else { a };
        if !enemies.contains(other) {
            continue;
        }
        relocations.write(RelocateEnemy { enemy: other });
        if let Ok(mut bolt) = commands.get_entity(bolt) {
            bolt.despawn();
        }
    }
}

pub(crate) fn expire_bolts(
    time: Res<Time>,
    mut bolts: Query<(Entity, &mut EnergyBolt)>,
    mut commands: Commands,
) {
    for (entity, mut bolt) in &mut bolts {
        bolt.lifetime.tick(time.delta());
        if bolt.lifetime.is_finished() {
            commands.entity(entity).despawn();
        }
    }
}

pub(crate) fn cleanup_bolts(mut commands: Commands, bolts: Query<Entity, With<EnergyBolt>>) {
    for bolt in &bolts {
        commands.entity(bolt).despawn();
    }
}
