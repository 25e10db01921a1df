//! Skills domain: burst dash along the current heading.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::config::DifficultyProfile;
use crate::maps::SceneTransition;
use crate::player::Player;
use crate::skills::cooldowns::{Skill, SkillCooldowns};

const DASH_SPEED: f32 = 22.0;

pub(crate) fn cast_dash(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut cooldowns: ResMut<SkillCooldowns>,
    profile: Res<DifficultyProfile>,
    transition: Res<SceneTransition>,
    mut player: Query<&mut LinearVelocity, (With<Player>, Without<RigidBodyDisabled>)>,
) {
    if !keyboard.just_pressed(KeyCode::ShiftLeft) || transition.is_active() {
        return;
    }
    let Ok(mut velocity) = player.single_mut() else {
        return;
    };
    let heading = Vec2::new(velocity.x, velocity.z);
    // Standing still gives the dash no direction; the cooldown is not spent.
    if heading.length_squared() < 0.01 {
        return;
    }
    if !cooldowns.try_use(Skill::Dash, profile.dash_cooldown) {
        return;
    }
    let burst = heading.normalize() * DASH_SPEED;
    velocity.x = burst.x;
    velocity.z = burst.y;
}
