//! UI domain: full-screen fade overlay driven by the travel sequence.

use bevy::prelude::*;

use crate::maps::SceneTransition;

/// Marker for the fade overlay quad
#[derive(Component)]
pub struct FadeOverlay;

pub(crate) fn spawn_fade_overlay(mut commands: Commands) {
    commands.spawn((
        FadeOverlay,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            right: Val::Px(0.0),
            top: Val::Px(0.0),
            bottom: Val::Px(0.0),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.0)),
        // Above the HUD, below nothing else
        ZIndex(200),
    ));
}

pub(crate) fn update_fade_overlay(
    transition: Res<SceneTransition>,
    mut overlays: Query<&mut BackgroundColor, With<FadeOverlay>>,
) {
    let alpha = transition.fade_alpha();
    for mut background in &mut overlays {
        background.0 = Color::srgba(0.0, 0.0, 0.0, alpha);
    }
}

pub(crate) fn cleanup_fade_overlay(
    mut commands: Commands,
    overlays: Query<Entity, With<FadeOverlay>>,
) {
    for overlay in &overlays {
        commands.entity(overlay).despawn();
    }
}
