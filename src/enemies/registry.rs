//! Enemies domain: the session pool, the per-map census, and visibility sync.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::config::DifficultyProfile;
use crate::core::SessionRng;
use crate::enemies::components::{Enemy, Roam};
use crate::enemies::events::{EnemyPopulationChanged, RelocateEnemy};
use crate::maps::{ActiveMap, MapAssignment, MapId, ARENA_HALF_EXTENT};

pub const ENEMY_RADIUS: f32 = 0.5;

/// Per-map population counts, retallied from `MapAssignment` every tick.
/// The totals always sum to the pool size; enemies move, they never die.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EnemyCensus {
    counts: [usize; MapId::COUNT],
}

impl EnemyCensus {
    pub fn from_counts(counts: [usize; MapId::COUNT]) -> Self {
        Self { counts }
    }

    pub fn tally<I: IntoIterator<Item = MapId>>(assignments: I) -> Self {
        let mut counts = [0; MapId::COUNT];
        for map in assignments {
            counts[map.index()] += 1;
        }
        Self { counts }
    }

    pub fn counts(&self) -> [usize; MapId::COUNT] {
        self.counts
    }

    pub fn count(&self, map: MapId) -> usize {
        self.counts[map.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// An announcement goes out when counts moved or any relocation was
    /// processed; a same-map relocation changes no count but subscribers
    /// still hear about it.
    pub fn announces(&self, fresh: EnemyCensus, relocations: usize) -> bool {
        relocations > 0 || fresh != *self
    }
}

fn random_arena_point(rng: &mut impl Rng) -> Vec3 {
    let bound = ARENA_HALF_EXTENT - 2.0;
    Vec3::new(
        rng.random_range(-bound..=bound),
        ENEMY_RADIUS,
        rng.random_range(-bound..=bound),
    )
}

/// Builds the session's fixed enemy pool, each member assigned a random map.
/// Members off the starting map spawn dormant.
pub(crate) fn spawn_enemy_pool(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut rng: ResMut<SessionRng>,
    profile: Res<DifficultyProfile>,
    active_map: Res<ActiveMap>,
    stale: Query<Entity, With<Enemy>>,
) {
    let stale_count = stale.iter().count();
    if stale_count > 0 {
        warn!("[ENEMIES] Clearing {} stale pool members", stale_count);
        for entity in &stale {
            commands.entity(entity).despawn();
        }
    }

    let mesh = meshes.add(Sphere::new(ENEMY_RADIUS));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.85, 0.15, 0.1),
        ..default()
    });

    for _ in 0..profile.enemy_count {
        let map = *MapId::ALL
            .choose(&mut rng.0)
            .unwrap_or(&MapId::Map1);
        let position = random_arena_point(&mut rng.0);
        let retarget = Timer::from_seconds(rng.0.random_range(2.0..5.0), TimerMode::Once);
        let mut enemy = commands.spawn((
            Enemy,
            MapAssignment(map),
            Roam {
                target: random_arena_point(&mut rng.0),
                retarget,
            },
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(position),
            RigidBody::Dynamic,
            Collider::sphere(ENEMY_RADIUS),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::ZERO,
            CollisionEventsEnabled,
        ));
        if map != active_map.0 {
            enemy.insert((Visibility::Hidden, RigidBodyDisabled, ColliderDisabled));
        }
    }
    info!(
        "[ENEMIES] Spawned pool of {} across {} maps",
        profile.enemy_count,
        MapId::COUNT
    );
}

pub(crate) fn cleanup_enemies(
    mut commands: Commands,
    enemies: Query<Entity, With<Enemy>>,
    mut census: ResMut<EnemyCensus>,
) {
    for entity in &enemies {
        commands.entity(entity).despawn();
    }
    *census = EnemyCensus::default();
}

/// Reassigns relocated enemies to a random map and a fresh position. The draw
/// includes the current map on purpose.
pub(crate) fn relocate_enemies(
    mut requests: MessageReader<RelocateEnemy>,
    mut rng: ResMut<SessionRng>,
    mut enemies: Query<(&mut MapAssignment, &mut Transform, &mut Roam), With<Enemy>>,
) {
    for request in requests.read() {
        let Ok((mut assignment, mut transform, mut roam)) = enemies.get_mut(request.enemy) else {
            continue;
        };
        let from = assignment.0;
        let destination = *MapId::ALL.choose(&mut rng.0).unwrap_or(&from);
        assignment.0 = destination;
        transform.translation = random_arena_point(&mut rng.0);
        roam.target = random_arena_point(&mut rng.0);
        info!("[ENEMIES] Relocated {:?} -> {:?}", from, destination);
    }
}

/// Retallies the census from live assignments and announces changes. Reads
/// the relocation messages with its own cursor so a same-map relocation still
/// reaches subscribers.
pub(crate) fn take_enemy_census(
    mut census: ResMut<EnemyCensus>,
    mut relocations: MessageReader<RelocateEnemy>,
    mut changed: MessageWriter<EnemyPopulationChanged>,
    enemies: Query<&MapAssignment, With<Enemy>>,
) {
    let relocated = relocations.read().count();
    let fresh = EnemyCensus::tally(enemies.iter().map(|assignment| assignment.0));
    if census.announces(fresh, relocated) {
        *census = fresh;
        changed.write(EnemyPopulationChanged {
            counts: fresh.counts(),
        });
    }
}
