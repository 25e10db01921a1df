//! UI domain: player health bar.

use bevy::prelude::*;

use crate::player::{Health, Player};

pub(crate) const HEALTHBAR_WIDTH: f32 = 220.0;
pub(crate) const HEALTHBAR_HEIGHT: f32 = 22.0;

/// Marker for the health bar container
#[derive(Component)]
pub struct HealthBarUI;

/// Marker for the fill element
#[derive(Component)]
pub struct HealthBarFill;

/// Marker for the numeric readout
#[derive(Component)]
pub struct HealthBarText;

pub(crate) fn spawn_health_bar(mut commands: Commands) {
    commands
        .spawn((
            HealthBarUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(16.0),
                bottom: Val::Px(16.0),
                width: Val::Px(HEALTHBAR_WIDTH),
                height: Val::Px(HEALTHBAR_HEIGHT),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
            BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
        ))
        .with_children(|parent| {
            parent.spawn((
                HealthBarFill,
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(0.0),
                    top: Val::Px(0.0),
                    bottom: Val::Px(0.0),
                    width: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.2, 0.8, 0.3)),
            ));
            parent.spawn((
                HealthBarText,
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.95, 0.95)),
                Node {
                    margin: UiRect::left(Val::Px(6.0)),
                    ..default()
                },
                ZIndex(1),
            ));
        });
}

pub(crate) fn update_health_bar(
    players: Query<&Health, With<Player>>,
    mut fills: Query<(&mut Node, &mut BackgroundColor), With<HealthBarFill>>,
    mut texts: Query<&mut Text, With<HealthBarText>>,
) {
    let Ok(health) = players.single() else {
        return;
    };
    let fraction = health.fraction();
    for (mut node, mut background) in &mut fills {
        node.width = Val::Percent(fraction * 100.0);
        background.0 = if fraction > 0.6 {
            Color::srgb(0.2, 0.8, 0.3)
        } else if fraction > 0.3 {
            Color::srgb(0.9, 0.75, 0.2)
        } else {
            Color::srgb(0.9, 0.2, 0.2)
        };
    }
    for mut text in &mut texts {
        text.0 = format!("{:.0} / {:.0}", health.current, health.max);
    }
}

pub(crate) fn cleanup_health_bar(mut commands: Commands, bars: Query<Entity, With<HealthBarUI>>) {
    for bar in &bars {
        commands.entity(bar).despawn();
    }
}
