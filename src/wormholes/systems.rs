//! Wormholes domain: wandering, regrowth, and contact dispatch.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::config::DifficultyProfile;
use crate::core::SessionRng;
use crate::enemies::{Enemy, RelocateEnemy};
use crate::maps::{ActiveMap, SceneTransition, TravelRequested, ARENA_HALF_EXTENT};
use crate::player::Player;
use crate::wormholes::components::{candidate_maps, Wormhole};

const GROW_TIME: f32 = 0.5;
const MIN_SCALE: f32 = 0.05;

/// Jumps each wormhole to a fresh spot when its wander timer runs out.
pub(crate) fn relocate_wormholes(
    time: Res<Time>,
    profile: Res<DifficultyProfile>,
    mut rng: ResMut<SessionRng>,
    mut wormholes: Query<(&mut Wormhole, &mut Transform), Without<ColliderDisabled>>,
) {
    let bound = ARENA_HALF_EXTENT - 3.0;
    for (mut wormhole, mut transform) in &mut wormholes {
        wormhole.relocate.tick(time.delta());
        if !wormhole.relocate.is_finished() {
            continue;
        }
        transform.translation = Vec3::new(
            rng.0.random_range(-bound..=bound),
            transform.translation.y,
            rng.0.random_range(-bound..=bound),
        );
        let interval =
            rng.0.random_range(profile.wormhole_relocate_min..=profile.wormhole_relocate_max);
        wormhole.relocate = Timer::from_seconds(interval, TimerMode::Once);
        wormhole.grow = 0.0;
    }
}

pub(crate) fn grow_wormholes(
    time: Res<Time>,
    mut wormholes: Query<(&mut Wormhole, &mut Transform)>,
) {
    for (mut wormhole, mut transform) in &mut wormholes {
        if wormhole.grow >= 1.0 {
            continue;
        }
        wormhole.grow = (wormhole.grow + time.delta_secs() / GROW_TIME).min(1.0);
        transform.scale = Vec3::splat(wormhole.grow.max(MIN_SCALE));
    }
}

/// A player in a wormhole starts travel to a random other map; an enemy in
/// one is thrown to a random map, the current one included.
pub(crate) fn dispatch_wormhole_contacts(
    mut collisions: MessageReader<CollisionStart>,
    wormholes: Query<(), With<Wormhole>>,
    players: Query<(), With<Player>>,
    enemies: Query<(), With<Enemy>>,
    active_map: Res<ActiveMap>,
    transition: Res<SceneTransition>,
    mut rng: ResMut<SessionRng>,
    mut travels: MessageWriter<TravelRequested>,
    mut relocations: MessageWriter<RelocateEnemy>,
) {
    for contact in collisions.read() {
        let (a, b) = (contact.collider1, contact.collider2);
        let wormhole = if wormholes.contains(a) {
            a
        } else if wormholes.contains(b) {
            b
        } else {
            continue;
        };
        let other = if wormhole == a { b } else { a };
        if players.contains(other) {
            if transition.is_active() {
                continue;
            }
            let candidates = candidate_maps(active_map.0);
            if let Some(&destination) = candidates.choose(&mut rng.0) {
                travels.write(TravelRequested { destination });
            }
        } else if enemies.contains(other) {
            relocations.write(RelocateEnemy { enemy: other });
        }
    }
}
