//! Skills domain: spike planting, shockwave, dash, energy bolt.

mod bolt;
mod cooldowns;
mod dash;
mod shockwave;
mod spike;

#[cfg(test)]
mod tests;

pub use bolt::EnergyBolt;
pub use cooldowns::{Skill, SkillCooldowns};
pub use spike::{SpikeTrap, TrapRoster};

use bevy::prelude::*;

use crate::core::GameState;
use crate::skills::bolt::{cast_bolt, cleanup_bolts, expire_bolts, handle_bolt_hits};
use crate::skills::cooldowns::{reset_cooldowns, tick_cooldowns};
use crate::skills::dash::cast_dash;
use crate::skills::shockwave::cast_shockwave;
use crate::skills::spike::{cast_spike, cleanup_traps, handle_trap_contacts};

pub struct SkillsPlugin;

impl Plugin for SkillsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SkillCooldowns>()
            .init_resource::<TrapRoster>()
            .add_systems(OnEnter(GameState::Playing), reset_cooldowns)
            .add_systems(OnExit(GameState::Playing), (cleanup_traps, cleanup_bolts))
            .add_systems(
                Update,
                (
                    tick_cooldowns,
                    cast_spike,
                    handle_trap_contacts,
                    cast_shockwave,
                    cast_dash,
                    cast_bolt,
                    handle_bolt_hits,
                    expire_bolts,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
