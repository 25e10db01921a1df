//! UI domain: skill cooldown readouts.

use bevy::prelude::*;

use crate::skills::{Skill, SkillCooldowns};

/// Marker for the skill bar container
#[derive(Component)]
pub struct SkillBarUI;

/// Marker for one skill's status text
#[derive(Component)]
pub struct SkillSlot(pub Skill);

pub(crate) fn spawn_skill_bar(mut commands: Commands) {
    commands
        .spawn((
            SkillBarUI,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(16.0),
                bottom: Val::Px(16.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::FlexEnd,
                row_gap: Val::Px(4.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.08, 0.08, 0.1, 0.75)),
        ))
        .with_children(|parent| {
            for skill in Skill::ALL {
                parent.spawn((
                    SkillSlot(skill),
                    Text::new(format!("[{}] {}", skill.key_hint(), skill.label())),
                    TextFont {
                        font_size: 15.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.85, 0.85, 0.85)),
                ));
            }
        });
}

pub(crate) fn update_skill_bar(
    cooldowns: Res<SkillCooldowns>,
    mut slots: Query<(&SkillSlot, &mut Text, &mut TextColor)>,
) {
    for (slot, mut text, mut color) in &mut slots {
        let remaining = cooldowns.remaining(slot.0);
        if remaining > 0.0 {
            text.0 = format!("[{}] {} {:.1}s", slot.0.key_hint(), slot.0.label(), remaining);
            color.0 = Color::srgb(0.5, 0.5, 0.5);
        } else {
            text.0 = format!("[{}] {}", slot.0.key_hint(), slot.0.label());
            color.0 = Color::srgb(0.85, 0.85, 0.85);
        }
    }
}

pub(crate) fn cleanup_skill_bar(mut commands: Commands, bars: Query<Entity, With<SkillBarUI>>) {
    for bar in &bars {
        commands.entity(bar).despawn();
    }
}
