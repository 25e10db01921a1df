//! Enemies domain: pool member components.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Enemy;

/// Wander state while no player is in chase range.
#[derive(Component, Debug)]
pub struct Roam {
    pub target: Vec3,
    pub retarget: Timer,
}
