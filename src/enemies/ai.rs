//! Enemies domain: wander and chase steering for active pool members.

use avian3d::prelude::*;
use bevy::prelude::*;
use rand::Rng;

use crate::config::DifficultyProfile;
use crate::core::SessionRng;
use crate::enemies::components::{Enemy, Roam};
use crate::maps::ARENA_HALF_EXTENT;
use crate::player::Player;

const ARRIVE_DISTANCE_SQ: f32 = 0.04;

/// Dormant members carry `RigidBodyDisabled` and are skipped entirely.
pub(crate) fn drive_enemy_motion(
    time: Res<Time>,
    profile: Res<DifficultyProfile>,
    mut rng: ResMut<SessionRng>,
    player: Query<&Transform, (With<Player>, Without<Enemy>)>,
    mut enemies: Query<
        (&mut Roam, &Transform, &mut LinearVelocity),
        (With<Enemy>, Without<RigidBodyDisabled>),
    >,
) {
    let player_position = player.single().ok().map(|transform| transform.translation);
    let bound = ARENA_HALF_EXTENT - 2.0;

    for (mut roam, transform, mut velocity) in &mut enemies {
        roam.retarget.tick(time.delta());
        if roam.retarget.is_finished() {
            roam.target = Vec3::new(
                rng.0.random_range(-bound..=bound),
                transform.translation.y,
                rng.0.random_range(-bound..=bound),
            );
            roam.retarget = Timer::from_seconds(rng.0.random_range(2.0..5.0), TimerMode::Once);
        }

        let target = match player_position {
            Some(position)
                if position.distance(transform.translation) < profile.enemy_chase_radius =>
            {
                position
            }
            _ => roam.target,
        };

        let mut heading = target - transform.translation;
        heading.y = 0.0;
        if heading.length_squared() > ARRIVE_DISTANCE_SQ {
            let direction = heading.normalize();
            velocity.x = direction.x * profile.enemy_speed;
            velocity.z = direction.z * profile.enemy_speed;
        } else {
            velocity.x = 0.0;
            velocity.z = 0.0;
        }
    }
}
