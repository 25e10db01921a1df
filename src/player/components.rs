//! Player domain: the persistent ball and its health.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Player;

pub const PLAYER_RADIUS: f32 = 0.5;
pub const PLAYER_SPEED: f32 = 6.0;

/// Health with delayed regeneration. Taking damage restarts the regen delay.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Health {
    pub current: f32,
    pub max: f32,
    since_damage: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            max,
            since_damage: 0.0,
        }
    }

    pub fn damage(&mut self, amount: f32) {
        self.current = (self.current - amount).max(0.0);
        self.since_damage = 0.0;
    }

    /// Advances the regen clock and heals once the delay has passed.
    pub fn regenerate(&mut self, delta: f32, rate: f32, cooldown: f32) {
        self.since_damage += delta;
        if self.since_damage >= cooldown && self.current > 0.0 {
            self.current = (self.current + rate * delta).min(self.max);
        }
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn fraction(&self) -> f32 {
        if self.max > 0.0 {
            self.current / self.max
        } else {
            0.0
        }
    }
}
