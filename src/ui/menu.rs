//! UI domain: main menu with difficulty selection.

use bevy::prelude::*;

use crate::config::{Difficulty, DifficultyProfile, DifficultyTable};
use crate::core::{GameState, RunConfig};

/// Marker for the menu root
#[derive(Component)]
pub struct MainMenuUI;

/// Marker for one difficulty row
#[derive(Component)]
pub struct DifficultyRow(pub Difficulty);

pub(crate) fn spawn_main_menu(mut commands: Commands) {
    commands
        .spawn((
            MainMenuUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(10.0),
                ..default()
            },
            BackgroundColor(Color::srgb(0.05, 0.05, 0.08)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("PLANESHIFT"),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.3, 0.95)),
                Node {
                    margin: UiRect::bottom(Val::Px(30.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Herd the enemies onto one plane, then hold it with a spike."),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.65)),
                Node {
                    margin: UiRect::bottom(Val::Px(30.0)),
                    ..default()
                },
            ));

            for (index, difficulty) in Difficulty::ALL.into_iter().enumerate() {
                parent.spawn((
                    DifficultyRow(difficulty),
                    Text::new(format!("[{}] {}", index + 1, difficulty.label())),
                    TextFont {
                        font_size: 26.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.5, 0.5, 0.5)),
                ));
            }

            parent.spawn((
                Text::new("Press [Enter] to play"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.75)),
                Node {
                    margin: UiRect::top(Val::Px(40.0)),
                    ..default()
                },
            ));
        });
}

pub(crate) fn handle_menu_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut run_config: ResMut<RunConfig>,
    table: Res<DifficultyTable>,
    mut profile: ResMut<DifficultyProfile>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let picks = [
        (KeyCode::Digit1, Difficulty::Easy),
        (KeyCode::Digit2, Difficulty::Normal),
        (KeyCode::Digit3, Difficulty::Hard),
        (KeyCode::Digit4, Difficulty::Nightmare),
    ];
    for (key, difficulty) in picks {
        if keyboard.just_pressed(key) {
            run_config.difficulty = difficulty;
        }
    }
    if keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::NumpadEnter) {
        *profile = table.profile(run_config.difficulty).clone();
        info!("[MENU] Starting on {}", run_config.difficulty.label());
        next_state.set(GameState::Playing);
    }
}

pub(crate) fn update_menu_selection(
    run_config: Res<RunConfig>,
    mut rows: Query<(&DifficultyRow, &mut TextColor)>,
) {
    for (row, mut color) in &mut rows {
        color.0 = if row.0 == run_config.difficulty {
            row.0.color()
        } else {
            Color::srgb(0.5, 0.5, 0.5)
        };
    }
}

pub(crate) fn cleanup_main_menu(mut commands: Commands, menus: Query<Entity, With<MainMenuUI>>) {
    for menu in &menus {
        commands.entity(menu).despawn();
    }
}
