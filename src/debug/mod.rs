//! Debug overlay for fast iteration.
//!
//! F1 or backtick toggles a live readout of the coordination state: census,
//! demanding plane, active map, travel sequence, and countdown. Ctrl hotkeys
//! poke the session from outside the normal flow.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{GameState, RunConfig};
use crate::enemies::EnemyCensus;
use crate::maps::{ActiveMap, MapId, SceneTransition, TravelRequested};
use crate::victory::{DemandingPlane, VictoryState};

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub overlay_visible: bool,
}

/// Marker for the debug overlay text
#[derive(Component, Debug)]
pub struct DebugOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (toggle_debug_overlay, handle_debug_hotkeys, update_debug_overlay).chain(),
        );
    }
}

/// Toggle the overlay with F1 or backtick
fn toggle_debug_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing: Query<Entity, With<DebugOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F1) && !keyboard.just_pressed(KeyCode::Backquote) {
        return;
    }
    debug_state.overlay_visible = !debug_state.overlay_visible;
    if debug_state.overlay_visible {
        commands.spawn((
            DebugOverlay,
            Text::new("..."),
            TextFont {
                font_size: 13.0,
                ..default()
            },
            TextColor(Color::srgb(0.8, 0.9, 0.8)),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(16.0),
                top: Val::Px(90.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            ZIndex(500),
        ));
    } else {
        for entity in &existing {
            commands.entity(entity).despawn();
        }
    }
}

/// Ctrl+1..4 forces travel to a map, skipping the wormhole roll
fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    debug_state: Res<DebugState>,
    state: Res<State<GameState>>,
    mut travels: MessageWriter<TravelRequested>,
) {
    if !debug_state.overlay_visible || *state.get() != GameState::Playing {
        return;
    }
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }
    let warps = [
        (KeyCode::Digit1, MapId::Map1),
        (KeyCode::Digit2, MapId::Map2),
        (KeyCode::Digit3, MapId::Map3),
        (KeyCode::Digit4, MapId::Map4),
    ];
    for (key, destination) in warps {
        if keyboard.just_pressed(key) {
            info!("[DEBUG] Forcing travel to {:?}", destination);
            travels.write(TravelRequested { destination });
        }
    }
}

fn update_debug_overlay(
    debug_state: Res<DebugState>,
    census: Res<EnemyCensus>,
    demanding: Res<DemandingPlane>,
    active_map: Res<ActiveMap>,
    transition: Res<SceneTransition>,
    victory: Res<VictoryState>,
    run_config: Res<RunConfig>,
    mut overlays: Query<&mut Text, With<DebugOverlay>>,
) {
    if !debug_state.overlay_visible {
        return;
    }
    let Ok(mut text) = overlays.single_mut() else {
        return;
    };
    let countdown = match victory.remaining() {
        Some(remaining) => format!("{:.1}s on {:?}", remaining, victory.planted_map()),
        None => "idle".to_string(),
    };
    let travel = match transition.in_flight() {
        Some(destination) => format!("-> {:?}", destination),
        None => "idle".to_string(),
    };
    text.0 = format!(
        "census: {:?}\ndemanding: {:?}\nactive: {:?}\ntravel: {}\nspike: {}\nseed: {}",
        census.counts(),
        demanding.0,
        active_map.0,
        travel,
        countdown,
        run_config.seed,
    );
}
