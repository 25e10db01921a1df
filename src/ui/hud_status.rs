//! UI domain: per-map status cards and the victory countdown readout.

use bevy::prelude::*;

use crate::enemies::EnemyCensus;
use crate::maps::{ActiveMap, MapId};
use crate::victory::{DemandingPlane, VictoryState};

const CARD_WIDTH: f32 = 120.0;

/// Marker for one map's status card
#[derive(Component)]
pub struct MapCard(pub MapId);

/// Marker for the enemy count text inside a card
#[derive(Component)]
pub struct MapCardCount(pub MapId);

/// Marker for the countdown line under the cards
#[derive(Component)]
pub struct CountdownText;

/// Marker for the whole status strip
#[derive(Component)]
pub struct MapStatusUI;

pub(crate) fn spawn_map_status(mut commands: Commands) {
    commands
        .spawn((
            MapStatusUI,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(6.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent
                .spawn(Node {
                    column_gap: Val::Px(8.0),
                    ..default()
                })
                .with_children(|row| {
                    for map in MapId::ALL {
                        row.spawn((
                            MapCard(map),
                            Node {
                                width: Val::Px(CARD_WIDTH),
                                flex_direction: FlexDirection::Column,
                                align_items: AlignItems::Center,
                                padding: UiRect::all(Val::Px(6.0)),
                                border: UiRect::all(Val::Px(2.0)),
                                ..default()
                            },
                            BackgroundColor(Color::srgba(0.08, 0.08, 0.1, 0.85)),
                            BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
                        ))
                        .with_children(|card| {
                            card.spawn((
                                Text::new(map.label()),
                                TextFont {
                                    font_size: 16.0,
                                    ..default()
                                },
                                TextColor(Color::srgb(0.85, 0.85, 0.85)),
                            ));
                            card.spawn((
                                MapCardCount(map),
                                Text::new("0"),
                                TextFont {
                                    font_size: 22.0,
                                    ..default()
                                },
                                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                            ));
                        });
                    }
                });

            parent.spawn((
                CountdownText,
                Text::new(""),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.85, 0.2)),
            ));
        });
}

pub(crate) fn update_map_status(
    census: Res<EnemyCensus>,
    demanding: Res<DemandingPlane>,
    active_map: Res<ActiveMap>,
    mut counts: Query<(&MapCardCount, &mut Text)>,
    mut cards: Query<(&MapCard, &mut BorderColor, &mut BackgroundColor)>,
) {
    for (count, mut text) in &mut counts {
        text.0 = census.count(count.0).to_string();
    }
    for (card, mut border, mut background) in &mut cards {
        let is_demanding = demanding.0 == Some(card.0);
        let is_active = active_map.0 == card.0;
        *border = BorderColor::all(if is_demanding {
            Color::srgb(1.0, 0.3, 0.2)
        } else {
            Color::srgb(0.3, 0.3, 0.3)
        });
        background.0 = if is_active {
            Color::srgba(0.12, 0.2, 0.3, 0.9)
        } else {
            Color::srgba(0.08, 0.08, 0.1, 0.85)
        };
    }
}

pub(crate) fn update_countdown_text(
    victory: Res<VictoryState>,
    mut texts: Query<&mut Text, With<CountdownText>>,
) {
    let Ok(mut text) = texts.single_mut() else {
        return;
    };
    text.0 = match (victory.planted_map(), victory.remaining()) {
        (Some(map), Some(remaining)) => {
            format!("SPIKE ON {}  {:.1}s", map.label(), remaining.max(0.0))
        }
        _ => String::new(),
    };
}

pub(crate) fn cleanup_map_status(
    mut commands: Commands,
    strips: Query<Entity, With<MapStatusUI>>,
) {
    for strip in &strips {
        commands.entity(strip).despawn();
    }
}
