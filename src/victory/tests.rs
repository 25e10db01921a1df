use bevy::prelude::{Entity, World};

use super::*;
use crate::maps::MapId;

const SPIKE: Entity = Entity::PLACEHOLDER;

#[test]
fn demanding_map_picks_largest_population() {
    assert_eq!(demanding_map([1, 5, 2, 0]), MapId::Map2);
    assert_eq!(demanding_map([0, 0, 0, 9]), MapId::Map4);
}

#[test]
fn demanding_map_ties_break_to_lowest_map() {
    assert_eq!(demanding_map([3, 3, 3, 3]), MapId::Map1);
    assert_eq!(demanding_map([0, 4, 4, 0]), MapId::Map2);
    assert_eq!(demanding_map([3, 3, 1, 0]), MapId::Map1);
    assert_eq!(demanding_map([2, 1, 2, 2]), MapId::Map1);
}

#[test]
fn demanding_map_empty_census_falls_to_first_map() {
    assert_eq!(demanding_map([0, 0, 0, 0]), MapId::Map1);
}

#[test]
fn plant_arms_the_countdown() {
    let mut victory = VictoryState::default();
    assert_eq!(victory.plant(MapId::Map3, SPIKE, 45.0), None);
    assert_eq!(victory.planted_map(), Some(MapId::Map3));
    assert_eq!(victory.remaining(), Some(45.0));
}

#[test]
fn plant_supersedes_an_existing_spike() {
    let mut world = World::new();
    let first = world.spawn_empty().id();
    let second = world.spawn_empty().id();

    let mut victory = VictoryState::default();
    assert_eq!(victory.plant(MapId::Map3, first, 45.0), None);

    // The second plant always lands; the first spike falls and comes back to
    // the caller for teardown.
    assert_eq!(
        victory.plant(MapId::Map1, second, 60.0),
        Some((MapId::Map3, first))
    );
    assert_eq!(victory.planted_map(), Some(MapId::Map1));
    assert_eq!(victory.spike_entity(), Some(second));
    assert_eq!(victory.remaining(), Some(60.0));
}

#[test]
fn enemy_contact_fells_the_planted_spike() {
    let mut world = World::new();
    let spike = world.spawn_empty().id();
    let bystander = world.spawn_empty().id();

    let mut victory = VictoryState::default();
    victory.plant(MapId::Map2, spike, 45.0);

    // A touch on some other entity leaves the countdown alone.
    assert_eq!(victory.contact_deactivation(bystander), None);
    assert_eq!(victory.planted_map(), Some(MapId::Map2));

    // Contact with the planted spike fells it immediately, whatever time is
    // left on the clock.
    assert_eq!(victory.contact_deactivation(spike), Some(MapId::Map2));
    assert_eq!(victory, VictoryState::Idle);
}

#[test]
fn plane_shift_carries_its_preemption() {
    // Unchanged plane: nothing to announce.
    assert_eq!(
        evaluate_plane_shift(Some(MapId::Map2), [1, 5, 2, 0], Some(MapId::Map2)),
        None
    );

    // The plane moves away from the planted map: one step carries both the
    // new value and the preemption, so the change is announced first and
    // observers see the new plane on the deactivation tick.
    assert_eq!(
        evaluate_plane_shift(Some(MapId::Map2), [1, 2, 6, 0], Some(MapId::Map2)),
        Some((MapId::Map3, Some(MapId::Map2)))
    );

    // A move that keeps the spike's map demanding preempts nothing.
    assert_eq!(
        evaluate_plane_shift(None, [0, 5, 0, 0], Some(MapId::Map2)),
        Some((MapId::Map2, None))
    );

    // No spike planted: just the announcement.
    assert_eq!(
        evaluate_plane_shift(Some(MapId::Map1), [0, 4, 1, 0], None),
        Some((MapId::Map2, None))
    );
}

#[test]
fn countdown_ticks_down_and_completes() {
    let mut victory = VictoryState::default();
    victory.plant(MapId::Map2, SPIKE, 1.0);

    match victory.tick(0.4) {
        CountdownStep::Running(remaining) => assert!((remaining - 0.6).abs() < 1e-5),
        step => panic!("unexpected step {:?}", step),
    }
    match victory.tick(0.4) {
        CountdownStep::Running(remaining) => assert!((remaining - 0.2).abs() < 1e-5),
        step => panic!("unexpected step {:?}", step),
    }
    assert_eq!(victory.tick(0.4), CountdownStep::Completed);
}

#[test]
fn idle_countdown_reports_idle() {
    let mut victory = VictoryState::default();
    assert_eq!(victory.tick(1.0), CountdownStep::Idle);
    assert_eq!(victory.planted_map(), None);
    assert_eq!(victory.remaining(), None);
}

#[test]
fn replant_after_deactivation_supersedes_nothing() {
    let mut victory = VictoryState::default();
    victory.plant(MapId::Map1, SPIKE, 45.0);
    victory.deactivate();
    assert_eq!(victory, VictoryState::Idle);
    assert_eq!(victory.plant(MapId::Map4, SPIKE, 60.0), None);
    assert_eq!(victory.remaining(), Some(60.0));
}

#[test]
fn tick_runs_regardless_of_demanding_plane() {
    // The countdown never pauses while planted; preemption is the only way a
    // plane change stops it, and that is applied by the caller.
    let mut victory = VictoryState::default();
    victory.plant(MapId::Map1, SPIKE, 10.0);
    for _ in 0..5 {
        victory.tick(1.0);
    }
    assert_eq!(victory.remaining(), Some(5.0));
}
