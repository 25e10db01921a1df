//! Skills domain: radial shockwave that throws nearby enemies back.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::config::DifficultyProfile;
use crate::enemies::Enemy;
use crate::maps::SceneTransition;
use crate::player::Player;
use crate::skills::cooldowns::{Skill, SkillCooldowns};

pub const SHOCKWAVE_RADIUS: f32 = 6.0;
const SHOCKWAVE_FORCE: f32 = 16.0;

pub(crate) fn cast_shockwave(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut cooldowns: ResMut<SkillCooldowns>,
    profile: Res<DifficultyProfile>,
    transition: Res<SceneTransition>,
    player: Query<&Transform, With<Player>>,
    mut enemies: Query<
        (&Transform, &mut LinearVelocity),
        (With<Enemy>, Without<Player>, Without<RigidBodyDisabled>),
    >,
) {
    if !keyboard.just_pressed(KeyCode::KeyQ) || transition.is_active() {
        return;
    }
    let Ok(origin) = player.single() else {
        return;
    };
    if !cooldowns.try_use(Skill::Shockwave, profile.shockwave_cooldown) {
        return;
    }
    let mut thrown = 0;
    for (transform, mut velocity) in &mut enemies {
        let mut away = transform.translation - origin.translation;
        away.y = 0.0;
        let distance = away.length();
        if distance > SHOCKWAVE_RADIUS {
            continue;
        }
        let falloff = 1.0 - distance / SHOCKWAVE_RADIUS;
        let push = away.normalize_or_zero() * SHOCKWAVE_FORCE * (0.5 + falloff);
        velocity.x += push.x;
        velocity.z += push.z;
        thrown += 1;
    }
    info!("[SKILLS] Shockwave threw {} enemies", thrown);
}
