//! UI domain: victory and game-over screens.

use bevy::prelude::*;

use crate::core::GameState;

/// Marker for either end screen
#[derive(Component)]
pub struct EndScreenUI;

fn spawn_end_screen(commands: &mut Commands, title: &str, title_color: Color, subtitle: &str) {
    commands
        .spawn((
            EndScreenUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.85)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title.to_string()),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(30.0)),
                    ..default()
                },
            ));
            parent.spawn((
                Text::new(subtitle.to_string()),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
                Node {
                    margin: UiRect::bottom(Val::Px(50.0)),
                    ..default()
                },
            ));
            parent.spawn((
                Text::new("[R] Play again    [Escape] Menu"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.45, 0.45, 0.5)),
            ));
        });
}

pub(crate) fn spawn_victory_screen(mut commands: Commands) {
    spawn_end_screen(
        &mut commands,
        "THE PLANE IS YOURS",
        Color::srgb(1.0, 0.85, 0.2),
        "The spike held. Every plane bows to you.",
    );
}

pub(crate) fn spawn_game_over_screen(mut commands: Commands) {
    spawn_end_screen(
        &mut commands,
        "OVERRUN",
        Color::srgb(0.8, 0.15, 0.15),
        "The swarm wore you down.",
    );
}

pub(crate) fn handle_end_screen_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        next_state.set(GameState::Playing);
    } else if keyboard.just_pressed(KeyCode::Escape) {
        next_state.set(GameState::MainMenu);
    }
}

pub(crate) fn cleanup_end_screen(mut commands: Commands, screens: Query<Entity, With<EndScreenUI>>) {
    for screen in &screens {
        commands.entity(screen).despawn();
    }
}
