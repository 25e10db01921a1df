use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;
use crate::config::{builtin_profile, Difficulty};
use crate::maps::MapId;

#[test]
fn candidates_exclude_the_current_map() {
    for current in MapId::ALL {
        let candidates = candidate_maps(current);
        assert_eq!(candidates.len(), MapId::COUNT - 1);
        assert!(!candidates.contains(&current));
    }
}

#[test]
fn candidates_keep_map_order() {
    assert_eq!(
        candidate_maps(MapId::Map2),
        vec![MapId::Map1, MapId::Map3, MapId::Map4]
    );
}

#[test]
fn wander_interval_stays_in_the_configured_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let profile = builtin_profile(Difficulty::Normal);
    for _ in 0..50 {
        let wormhole = Wormhole::new(&mut rng, &profile);
        let interval = wormhole.relocate.duration().as_secs_f32();
        assert!(interval >= profile.wormhole_relocate_min);
        assert!(interval <= profile.wormhole_relocate_max);
    }
}

#[test]
fn new_wormholes_start_fully_grown() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let profile = builtin_profile(Difficulty::Easy);
    let wormhole = Wormhole::new(&mut rng, &profile);
    assert_eq!(wormhole.grow, 1.0);
}
