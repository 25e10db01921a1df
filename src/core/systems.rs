//! Core domain: camera and lighting setup, camera follow.

use bevy::prelude::*;

use crate::player::Player;

/// Camera offset behind and above the ball, matched to the arena scale.
const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 9.0, 11.0);
const CAMERA_SMOOTHING: f32 = 6.0;

#[derive(Component, Debug)]
pub struct FollowCamera;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        FollowCamera,
        Camera3d::default(),
        Transform::from_translation(CAMERA_OFFSET).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 9_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(6.0, 14.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

pub(crate) fn follow_player(
    time: Res<Time>,
    player_query: Query<&Transform, (With<Player>, Without<FollowCamera>)>,
    mut camera_query: Query<&mut Transform, With<FollowCamera>>,
) {
    let Some(player_transform) = player_query.iter().next() else {
        return;
    };

    let target = player_transform.translation + CAMERA_OFFSET;
    let t = (CAMERA_SMOOTHING * time.delta_secs()).min(1.0);

    for mut camera_transform in &mut camera_query {
        camera_transform.translation = camera_transform.translation.lerp(target, t);
        let look_at = player_transform.translation;
        camera_transform.look_at(look_at, Vec3::Y);
    }
}
