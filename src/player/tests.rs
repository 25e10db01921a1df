use super::*;

#[test]
fn damage_clamps_at_zero() {
    let mut health = Health::new(100.0);
    health.damage(30.0);
    assert_eq!(health.current, 70.0);
    health.damage(500.0);
    assert_eq!(health.current, 0.0);
    assert!(health.is_dead());
}

#[test]
fn regen_waits_out_the_cooldown() {
    let mut health = Health::new(100.0);
    health.damage(50.0);

    // Still inside the delay window.
    health.regenerate(1.0, 5.0, 2.0);
    assert_eq!(health.current, 50.0);

    // Past the window, healing resumes.
    health.regenerate(1.5, 5.0, 2.0);
    assert!(health.current > 50.0);
}

#[test]
fn damage_restarts_the_regen_delay() {
    let mut health = Health::new(100.0);
    health.damage(20.0);
    health.regenerate(3.0, 5.0, 2.0);
    let healed = health.current;
    assert!(healed > 80.0);

    health.damage(10.0);
    health.regenerate(1.0, 5.0, 2.0);
    assert_eq!(health.current, healed - 10.0);
}

#[test]
fn regen_never_exceeds_max() {
    let mut health = Health::new(100.0);
    health.damage(1.0);
    health.regenerate(100.0, 50.0, 2.0);
    assert_eq!(health.current, 100.0);
}

#[test]
fn dead_players_do_not_regenerate() {
    let mut health = Health::new(100.0);
    health.damage(100.0);
    health.regenerate(10.0, 5.0, 2.0);
    assert!(health.is_dead());
    assert_eq!(health.current, 0.0);
}

#[test]
fn fraction_tracks_current_over_max() {
    let mut health = Health::new(200.0);
    assert_eq!(health.fraction(), 1.0);
    health.damage(50.0);
    assert_eq!(health.fraction(), 0.75);
}
