//! Single-flight travel sequencing between maps.

use std::time::Duration;

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use rand::seq::IndexedRandom;

use crate::config::DifficultyProfile;
use crate::core::SessionRng;
use crate::maps::arena::{spawn_map_scene, MapScene, MapSceneRoot, SpawnPoint};
use crate::maps::events::{ActiveMapChanged, TravelRequested};
use crate::maps::identity::{ActiveMap, MapId};
use crate::player::Player;

/// Destination readiness required before activation may happen.
pub const ACTIVATION_READY: f32 = 0.9;

/// Readiness ramp per second while the destination scene is held back.
const LOAD_RATE: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TravelPhase {
    FadeOut,
    Holding,
    FadeIn,
}

#[derive(Debug)]
struct TravelState {
    destination: MapId,
    phase: TravelPhase,
    fade: Timer,
    fade_duration: f32,
    readiness: f32,
}

/// Outcome of one tick of the travel sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelStep {
    Idle,
    Running,
    /// The destination must be activated this tick. Fires exactly once per
    /// travel, only after the fade-out finished and readiness crossed the
    /// activation threshold.
    Activate(MapId),
    Finished(MapId),
}

/// The one travel sequence a session may have in flight. Requests that arrive
/// while a sequence is running are dropped, never queued.
#[derive(Resource, Debug, Default)]
pub struct SceneTransition {
    active: Option<TravelState>,
}

impl SceneTransition {
    /// Starts a travel sequence. Returns false if one is already in flight.
    pub fn request(&mut self, destination: MapId, fade_duration: f32) -> bool {
        if self.active.is_some() {
            return false;
        }
        self.active = Some(TravelState {
            destination,
            phase: TravelPhase::FadeOut,
            fade: Timer::from_seconds(fade_duration, TimerMode::Once),
            fade_duration,
            readiness: 0.0,
        });
        true
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn in_flight(&self) -> Option<MapId> {
        self.active.as_ref().map(|travel| travel.destination)
    }

    /// Strength of the black overlay covering the screen.
    pub fn fade_alpha(&self) -> f32 {
        match &self.active {
            None => 0.0,
            Some(travel) => match travel.phase {
                TravelPhase::FadeOut => travel.fade.fraction(),
                TravelPhase::Holding => 1.0,
                TravelPhase::FadeIn => 1.0 - travel.fade.fraction(),
            },
        }
    }

    /// Advances the sequence by one tick.
    pub fn advance(&mut self, delta: Duration) -> TravelStep {
        let Some(travel) = self.active.as_mut() else {
            return TravelStep::Idle;
        };
        travel.readiness = (travel.readiness + delta.as_secs_f32() * LOAD_RATE).min(1.0);
        match travel.phase {
            TravelPhase::FadeOut => {
                travel.fade.tick(delta);
                if travel.fade.is_finished() {
                    travel.phase = TravelPhase::Holding;
                }
                TravelStep::Running
            }
            TravelPhase::Holding => {
                if travel.readiness >= ACTIVATION_READY {
                    travel.phase = TravelPhase::FadeIn;
                    travel.fade = Timer::from_seconds(travel.fade_duration, TimerMode::Once);
                    TravelStep::Activate(travel.destination)
                } else {
                    TravelStep::Running
                }
            }
            TravelPhase::FadeIn => {
                travel.fade.tick(delta);
                if travel.fade.is_finished() {
                    let destination = travel.destination;
                    self.active = None;
                    TravelStep::Finished(destination)
                } else {
                    TravelStep::Running
                }
            }
        }
    }
}

/// Accepts or drops incoming travel requests. An accepted request freezes the
/// player and builds the destination scene hidden and inert.
pub(crate) fn handle_travel_requests(
    mut requests: MessageReader<TravelRequested>,
    mut transition: ResMut<SceneTransition>,
    active_map: Res<ActiveMap>,
    profile: Res<DifficultyProfile>,
    mut rng: ResMut<SessionRng>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    player: Query<Entity, With<Player>>,
) {
    for request in requests.read() {
        if request.destination == active_map.0 {
            debug!(
                "[TRANSITION] Ignoring travel to already active {:?}",
                request.destination
            );
            continue;
        }
        if !transition.request(request.destination, profile.fade_duration) {
            debug!(
                "[TRANSITION] Travel in flight, dropping request for {:?}",
                request.destination
            );
            continue;
        }
        info!(
            "[TRANSITION] Travel {:?} -> {:?}",
            active_map.0, request.destination
        );
        spawn_map_scene(
            &mut commands,
            &mut meshes,
            &mut materials,
            &mut rng,
            &profile,
            request.destination,
            false,
        );
        if let Ok(player) = player.single() {
            commands.entity(player).insert(RigidBodyDisabled);
        }
    }
}

/// Ticks the travel sequence. On activation the old scene is torn down, the
/// destination is revealed and re-enabled, and the player lands on one of the
/// destination's spawn points.
pub(crate) fn run_transition(
    time: Res<Time>,
    mut transition: ResMut<SceneTransition>,
    mut active_map: ResMut<ActiveMap>,
    mut changed: MessageWriter<ActiveMapChanged>,
    mut rng: ResMut<SessionRng>,
    mut commands: Commands,
    mut roots: Query<(Entity, &MapSceneRoot, &mut Visibility)>,
    held: Query<(Entity, &MapScene), With<ColliderDisabled>>,
    spawn_points: Query<(&SpawnPoint, &Transform), Without<Player>>,
    mut player: Query<(Entity, &mut Transform, &mut LinearVelocity), With<Player>>,
) {
    match transition.advance(time.delta()) {
        TravelStep::Activate(destination) => {
            let previous = active_map.0;
            for (entity, root, mut visibility) in &mut roots {
                if root.0 == destination {
                    *visibility = Visibility::Inherited;
                } else {
                    commands.entity(entity).despawn();
                }
            }
            for (entity, member) in &held {
                if member.0 == destination {
                    commands.entity(entity).remove::<ColliderDisabled>();
                }
            }
            let arrivals: Vec<Vec3> = spawn_points
                .iter()
                .filter(|(point, _)| point.map == destination)
                .map(|(_, transform)| transform.translation)
                .collect();
            if let Ok((entity, mut transform, mut velocity)) = player.single_mut() {
                if let Some(point) = arrivals.choose(&mut rng.0) {
                    transform.translation = *point + Vec3::Y;
                } else {
                    warn!("[TRANSITION] No spawn points on {:?}", destination);
                }
                velocity.0 = Vec3::ZERO;
                commands.entity(entity).remove::<RigidBodyDisabled>();
            } else {
                warn!("[TRANSITION] No player to reposition on {:?}", destination);
            }
            active_map.0 = destination;
            changed.write(ActiveMapChanged {
                previous,
                current: destination,
            });
            info!("[TRANSITION] Activated {:?}", destination);
        }
        TravelStep::Finished(destination) => {
            info!("[TRANSITION] Travel to {:?} complete", destination);
        }
        TravelStep::Idle | TravelStep::Running => {}
    }
}
