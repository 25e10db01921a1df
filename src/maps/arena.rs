//! Procedurally built arena scenes, one per map.

use avian3d::prelude::*;
use bevy::prelude::*;
use rand::Rng;

use crate::config::DifficultyProfile;
use crate::core::SessionRng;
use crate::maps::identity::{ActiveMap, MapId};
use crate::maps::transition::SceneTransition;
use crate::wormholes::Wormhole;

pub const ARENA_HALF_EXTENT: f32 = 20.0;

const WALL_HEIGHT: f32 = 3.0;
const WALL_THICKNESS: f32 = 1.0;

/// Root entity of one map's scene hierarchy.
#[derive(Component, Debug)]
pub struct MapSceneRoot(pub MapId);

/// Tag on every scene entity belonging to one map.
#[derive(Component, Debug)]
pub struct MapScene(pub MapId);

/// Candidate arrival position for travel into this map.
#[derive(Component, Debug)]
pub struct SpawnPoint {
    pub map: MapId,
}

const SPAWN_OFFSETS: [Vec2; 5] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(-13.0, -13.0),
    Vec2::new(13.0, -13.0),
    Vec2::new(-13.0, 13.0),
    Vec2::new(13.0, 13.0),
];

fn ground_color(map: MapId) -> Color {
    match map {
        MapId::Map1 => Color::srgb(0.24, 0.35, 0.25),
        MapId::Map2 => Color::srgb(0.35, 0.30, 0.22),
        MapId::Map3 => Color::srgb(0.22, 0.28, 0.38),
        MapId::Map4 => Color::srgb(0.34, 0.22, 0.30),
    }
}

/// Builds one map's scene. An inactive scene is hidden and its colliders are
/// disabled until the travel sequence activates it.
pub(crate) fn spawn_map_scene(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    rng: &mut SessionRng,
    profile: &DifficultyProfile,
    map: MapId,
    active: bool,
) -> Entity {
    let size = ARENA_HALF_EXTENT * 2.0;
    let ground_mesh = meshes.add(Cuboid::new(size, 0.5, size));
    let ground_material = materials.add(StandardMaterial {
        base_color: ground_color(map),
        perceptual_roughness: 0.9,
        ..default()
    });
    let wall_mesh_x = meshes.add(Cuboid::new(size, WALL_HEIGHT, WALL_THICKNESS));
    let wall_mesh_z = meshes.add(Cuboid::new(WALL_THICKNESS, WALL_HEIGHT, size));
    let wall_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.15, 0.15, 0.18),
        ..default()
    });
    let wormhole_mesh = meshes.add(Sphere::new(0.8));
    let wormhole_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.55, 0.2, 0.9),
        emissive: LinearRgba::rgb(0.4, 0.1, 0.9),
        ..default()
    });

    let visibility = if active {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    let root = commands
        .spawn((MapSceneRoot(map), Transform::default(), visibility))
        .id();

    commands.entity(root).with_children(|parent| {
        let mut ground = parent.spawn((
            MapScene(map),
            Mesh3d(ground_mesh),
            MeshMaterial3d(ground_material),
            Transform::from_xyz(0.0, -0.25, 0.0),
            RigidBody::Static,
            Collider::cuboid(size, 0.5, size),
        ));
        if !active {
            ground.insert(ColliderDisabled);
        }

        let edge = ARENA_HALF_EXTENT + WALL_THICKNESS / 2.0;
        let walls = [
            (true, Vec3::new(0.0, WALL_HEIGHT / 2.0, -edge)),
            (true, Vec3::new(0.0, WALL_HEIGHT / 2.0, edge)),
            (false, Vec3::new(-edge, WALL_HEIGHT / 2.0, 0.0)),
            (false, Vec3::new(edge, WALL_HEIGHT / 2.0, 0.0)),
        ];
        for (along_x, position) in walls {
            let (mesh, collider) = if along_x {
                (
                    wall_mesh_x.clone(),
                    Collider::cuboid(size, WALL_HEIGHT, WALL_THICKNESS),
                )
            } else {
                (
                    wall_mesh_z.clone(),
                    Collider::cuboid(WALL_THICKNESS, WALL_HEIGHT, size),
                )
            };
            let mut wall = parent.spawn((
                MapScene(map),
                Mesh3d(mesh),
                MeshMaterial3d(wall_material.clone()),
                Transform::from_translation(position),
                RigidBody::Static,
                collider,
            ));
            if !active {
                wall.insert(ColliderDisabled);
            }
        }

        for offset in SPAWN_OFFSETS {
            parent.spawn((
                MapScene(map),
                SpawnPoint { map },
                Transform::from_xyz(offset.x, 0.0, offset.y),
            ));
        }

        let count = rng
            .0
            .random_range(profile.wormholes_per_map_min..=profile.wormholes_per_map_max);
        for _ in 0..count {
            let x = rng.0.random_range(-(ARENA_HALF_EXTENT - 3.0)..=(ARENA_HALF_EXTENT - 3.0));
            let z = rng.0.random_range(-(ARENA_HALF_EXTENT - 3.0)..=(ARENA_HALF_EXTENT - 3.0));
            let mut wormhole = parent.spawn((
                MapScene(map),
                Wormhole::new(&mut rng.0, profile),
                Mesh3d(wormhole_mesh.clone()),
                MeshMaterial3d(wormhole_material.clone()),
                Transform::from_xyz(x, 0.8, z),
                RigidBody::Static,
                Collider::sphere(0.9),
                Sensor,
                CollisionEventsEnabled,
            ));
            if !active {
                wormhole.insert(ColliderDisabled);
            }
        }
    });

    root
}

/// Every session opens on the first map.
pub(crate) fn spawn_initial_map(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut rng: ResMut<SessionRng>,
    profile: Res<DifficultyProfile>,
    mut active_map: ResMut<ActiveMap>,
) {
    active_map.0 = MapId::Map1;
    spawn_map_scene(
        &mut commands,
        &mut meshes,
        &mut materials,
        &mut rng,
        &profile,
        MapId::Map1,
        true,
    );
    info!("[MAPS] Session opens on {:?}", MapId::Map1);
}

pub(crate) fn cleanup_maps(
    mut commands: Commands,
    roots: Query<Entity, With<MapSceneRoot>>,
    mut transition: ResMut<SceneTransition>,
    mut active_map: ResMut<ActiveMap>,
) {
    for root in &roots {
        commands.entity(root).despawn();
    }
    *transition = SceneTransition::default();
    *active_map = ActiveMap::default();
}
