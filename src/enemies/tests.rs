use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;
use crate::maps::MapId;

#[test]
fn census_tallies_assignments() {
    let assignments = [
        MapId::Map1,
        MapId::Map1,
        MapId::Map3,
        MapId::Map4,
        MapId::Map4,
        MapId::Map4,
    ];
    let census = EnemyCensus::tally(assignments);
    assert_eq!(census.count(MapId::Map1), 2);
    assert_eq!(census.count(MapId::Map2), 0);
    assert_eq!(census.count(MapId::Map3), 1);
    assert_eq!(census.count(MapId::Map4), 3);
}

#[test]
fn census_conserves_pool_size() {
    let pool = vec![MapId::Map2; 16];
    let census = EnemyCensus::tally(pool.iter().copied());
    assert_eq!(census.total(), 16);
    assert_eq!(census.counts().iter().sum::<usize>(), 16);
}

#[test]
fn empty_census_is_all_zero() {
    let census = EnemyCensus::default();
    for map in MapId::ALL {
        assert_eq!(census.count(map), 0);
    }
    assert_eq!(census.total(), 0);
}

#[test]
fn census_equality_detects_changes() {
    let before = EnemyCensus::from_counts([4, 4, 4, 4]);
    let same = EnemyCensus::tally(
        MapId::ALL
            .iter()
            .flat_map(|&map| std::iter::repeat_n(map, 4)),
    );
    assert_eq!(before, same);

    let moved = EnemyCensus::from_counts([5, 3, 4, 4]);
    assert_ne!(before, moved);
    assert_eq!(before.total(), moved.total());
}

#[test]
fn same_map_relocation_still_announces() {
    let census = EnemyCensus::from_counts([4, 4, 4, 4]);
    let unchanged = EnemyCensus::from_counts([4, 4, 4, 4]);

    // No relocation, no movement: quiet.
    assert!(!census.announces(unchanged, 0));

    // An enemy drew its own map back: the counts match but the relocation
    // still goes out to subscribers.
    assert!(census.announces(unchanged, 1));

    // Counts moved without a relocation message, as after a fresh spawn.
    assert!(census.announces(EnemyCensus::from_counts([5, 3, 4, 4]), 0));
}

#[test]
fn relocation_draw_covers_every_map() {
    // The relocation draw must not exclude the current map.
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut seen = [false; MapId::COUNT];
    for _ in 0..200 {
        let map = *MapId::ALL.choose(&mut rng).unwrap();
        seen[map.index()] = true;
    }
    assert_eq!(seen, [true; MapId::COUNT]);
}
