//! Player domain: spawn, movement, contact damage, regen, death.

use std::collections::HashSet;

use avian3d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::config::DifficultyProfile;
use crate::core::GameState;
use crate::enemies::Enemy;
use crate::player::components::{Health, Player, PLAYER_RADIUS, PLAYER_SPEED};

/// Enemies currently pressing against the player. Each one contributes the
/// full contact damage rate.
#[derive(Resource, Debug, Default)]
pub struct EnemyContacts(pub HashSet<Entity>);

pub(crate) fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    profile: Res<DifficultyProfile>,
    stale: Query<Entity, With<Player>>,
) {
    for entity in &stale {
        commands.entity(entity).despawn();
    }
    commands.spawn((
        Player,
        Health::new(profile.player_max_health),
        Mesh3d(meshes.add(Sphere::new(PLAYER_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.15, 0.45, 0.95),
            ..default()
        })),
        Transform::from_xyz(0.0, PLAYER_RADIUS, 0.0),
        RigidBody::Dynamic,
        Collider::sphere(PLAYER_RADIUS),
        LockedAxes::ROTATION_LOCKED,
        LinearVelocity::ZERO,
        CollisionEventsEnabled,
    ));
    info!(
        "[PLAYER] Spawned with {} health",
        profile.player_max_health
    );
}

pub(crate) fn cleanup_player(
    mut commands: Commands,
    players: Query<Entity, With<Player>>,
    mut contacts: ResMut<EnemyContacts>,
) {
    for entity in &players {
        commands.entity(entity).despawn();
    }
    contacts.0.clear();
}

/// WASD steering. The body is frozen during travel, so the filter skips it.
pub(crate) fn move_player(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut players: Query<&mut LinearVelocity, (With<Player>, Without<RigidBodyDisabled>)>,
) {
    let Ok(mut velocity) = players.single_mut() else {
        return;
    };
    let mut input = Vec2::ZERO;
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        input.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        input.y += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        input.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        input.x += 1.0;
    }
    let input = input.normalize_or_zero() * PLAYER_SPEED;
    velocity.x = input.x;
    velocity.z = input.y;
}

pub(crate) fn track_enemy_contacts(
    mut started: MessageReader<CollisionStart>,
    mut ended: MessageReader<CollisionEnd>,
    mut contacts: ResMut<EnemyContacts>,
    player: Query<Entity, With<Player>>,
    enemies: Query<(), With<Enemy>>,
) {
    let Ok(player) = player.single() else {
        return;
    };
    for contact in started.read() {
        let other = if contact.collider1 == player {
            contact.collider2
        } else if contact.collider2 == player {
            contact.collider1
        } else {
            continue;
        };
        if enemies.contains(other) {
            contacts.0.insert(other);
        }
    }
    for contact in ended.read() {
        let other = if contact.collider1 == player {
            contact.collider2
        } else if contact.collider2 == player {
            contact.collider1
        } else {
            continue;
        };
        contacts.0.remove(&other);
    }
}

pub(crate) fn apply_contact_damage(
    time: Res<Time>,
    profile: Res<DifficultyProfile>,
    mut contacts: ResMut<EnemyContacts>,
    live_enemies: Query<(), (With<Enemy>, Without<ColliderDisabled>)>,
    mut players: Query<&mut Health, With<Player>>,
) {
    // Enemies relocated or sent dormant mid-contact stop hurting.
    contacts.0.retain(|enemy| live_enemies.contains(*enemy));
    if contacts.0.is_empty() {
        return;
    }
    let Ok(mut health) = players.single_mut() else {
        return;
    };
    let damage =
        contacts.0.len() as f32 * profile.enemy_damage_per_second * time.delta_secs();
    health.damage(damage);
}

pub(crate) fn regenerate_health(
    time: Res<Time>,
    profile: Res<DifficultyProfile>,
    contacts: Res<EnemyContacts>,
    mut players: Query<&mut Health, With<Player>>,
) {
    if !contacts.0.is_empty() {
        return;
    }
    let Ok(mut health) = players.single_mut() else {
        return;
    };
    health.regenerate(time.delta_secs(), profile.regen_rate, profile.regen_cooldown);
}

pub(crate) fn check_player_death(
    players: Query<&Health, With<Player>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Ok(health) = players.single() else {
        return;
    };
    if health.is_dead() {
        info!("[PLAYER] Health depleted");
        next_state.set(GameState::GameOver);
    }
}
