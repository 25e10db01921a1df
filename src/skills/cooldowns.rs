//! Skills domain: shared cooldown bookkeeping.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Skill {
    Spike,
    Shockwave,
    Dash,
    Bolt,
}

impl Skill {
    pub const COUNT: usize = 4;

    pub const ALL: [Skill; Skill::COUNT] = [Skill::Spike, Skill::Shockwave, Skill::Dash, Skill::Bolt];

    pub fn index(self) -> usize {
        match self {
            Skill::Spike => 0,
            Skill::Shockwave => 1,
            Skill::Dash => 2,
            Skill::Bolt => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Skill::Spike => "SPIKE",
            Skill::Shockwave => "SHOCKWAVE",
            Skill::Dash => "DASH",
            Skill::Bolt => "BOLT",
        }
    }

    pub fn key_hint(self) -> &'static str {
        match self {
            Skill::Spike => "K",
            Skill::Shockwave => "Q",
            Skill::Dash => "SHIFT",
            Skill::Bolt => "F",
        }
    }
}

/// Remaining cooldown per skill, ticked once per frame.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct SkillCooldowns {
    remaining: [f32; Skill::COUNT],
}

impl SkillCooldowns {
    pub fn tick(&mut self, delta: f32) {
        for remaining in &mut self.remaining {
            *remaining = (*remaining - delta).max(0.0);
        }
    }

    pub fn ready(&self, skill: Skill) -> bool {
        self.remaining[skill.index()] <= 0.0
    }

    pub fn remaining(&self, skill: Skill) -> f32 {
        self.remaining[skill.index()]
    }

    /// Consumes the skill if it is ready, arming its cooldown.
    pub fn try_use(&mut self, skill: Skill, cooldown: f32) -> bool {
        if !self.ready(skill) {
            return false;
        }
        self.remaining[skill.index()] = cooldown;
        true
    }
}

pub(crate) fn tick_cooldowns(time: Res<Time>, mut cooldowns: ResMut<SkillCooldowns>) {
    cooldowns.tick(time.delta_secs());
}

pub(crate) fn reset_cooldowns(mut cooldowns: ResMut<SkillCooldowns>) {
    *cooldowns = SkillCooldowns::default();
}
