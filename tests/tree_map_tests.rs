//! Unit tests for TreeMap.
//!
//! Exercises the public operation surface end to end, checking the tree
//! invariants with `validate` after the structural changes.

use llrb_map::map::{InvariantViolation, OrderedMap, TreeMap};
use rstest::{fixture, rstest};

/// Routes `tracing` events to the test output; `RUST_LOG=llrb_map=trace`
/// shows every structural event.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[fixture]
fn scenario() -> TreeMap<i32, String> {
    init_tracing();
    let mut map = TreeMap::new();
    for key in [5, 3, 8, 1, 4, 7, 9] {
        map.put(key, key.to_string());
    }
    map
}

#[fixture]
fn large() -> TreeMap<u32, u32> {
    init_tracing();
    let mut map = TreeMap::new();
    // Multiplying by an odd constant permutes 0..1024 modulo 1024
    for index in 0..1024u32 {
        let key = index.wrapping_mul(617) % 1024;
        map.put(key, key * 2);
    }
    map
}

// =============================================================================
// Basic Construction Tests
// =============================================================================

#[rstest]
fn test_new_creates_empty_map() {
    let map: TreeMap<i32, String> = TreeMap::new();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert_eq!(map.height(), 0);
}

#[rstest]
fn test_default_creates_empty_map() {
    let map: TreeMap<i32, String> = TreeMap::default();
    assert!(map.is_empty());
    assert!(map.validate().is_ok());
}

// =============================================================================
// Put and Get Tests
// =============================================================================

#[rstest]
fn test_put_single_entry() {
    let mut map = TreeMap::new();
    map.put(1, "one".to_string());
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&1), Some(&"one".to_string()));
}

#[rstest]
fn test_put_overwrites_existing_key() {
    let mut map = TreeMap::new();
    map.put(1, "one".to_string());
    map.put(1, "ONE".to_string());

    assert_eq!(map.get(&1), Some(&"ONE".to_string()));
    assert_eq!(map.len(), 1);
}

#[rstest]
fn test_get_nonexistent_key_returns_none(scenario: TreeMap<i32, String>) {
    assert_eq!(scenario.get(&2), None);
    assert_eq!(scenario.get(&100), None);
}

#[rstest]
fn test_get_with_borrowed_key() {
    let mut map = TreeMap::new();
    map.put("apple".to_string(), 3);
    map.put("banana".to_string(), 5);

    assert_eq!(map.get("banana"), Some(&5));
    assert!(map.contains_key("apple"));
    assert_eq!(map.floor("b"), Some(&"apple".to_string()));
    assert_eq!(map.ceil("b"), Some(&"banana".to_string()));
}

#[rstest]
#[case::ascending((0..500).collect())]
#[case::descending((0..500).rev().collect())]
#[case::zigzag((0..250).flat_map(|index| [index, 499 - index]).collect())]
fn test_put_sequences_keep_invariants(#[case] keys: Vec<i32>) {
    let mut map = TreeMap::new();
    for key in &keys {
        map.put(*key, *key);
    }

    let stats = map.validate().unwrap();
    assert_eq!(stats.entries(), 500);
    assert!(stats.height() <= 17);
    for key in keys {
        assert_eq!(map.get(&key), Some(&key));
    }
}

// =============================================================================
// Contains Key Tests
// =============================================================================

#[rstest]
fn test_contains_key(scenario: TreeMap<i32, String>) {
    assert!(scenario.contains_key(&1));
    assert!(scenario.contains_key(&9));
    assert!(!scenario.contains_key(&6));
}

#[rstest]
fn test_contains_key_empty_map() {
    let map: TreeMap<i32, String> = TreeMap::new();
    assert!(!map.contains_key(&1));
}

// =============================================================================
// Remove Tests
// =============================================================================

#[rstest]
fn test_remove_scenario_root(mut scenario: TreeMap<i32, String>) {
    assert_eq!(scenario.remove(&5), Some("5".to_string()));

    assert_eq!(scenario.get(&5), None);
    assert_eq!(scenario.len(), 6);
    assert_eq!(scenario.to_string(), "{1: 1, 3: 3, 4: 4, 7: 7, 8: 8, 9: 9}");
    assert!(scenario.validate().is_ok());
}

#[rstest]
fn test_remove_nonexistent_key(mut scenario: TreeMap<i32, String>) {
    assert_eq!(scenario.remove(&6), None);
    assert_eq!(scenario.len(), 7);
    assert!(scenario.validate().is_ok());
}

#[rstest]
fn test_remove_from_empty_map() {
    let mut map: TreeMap<i32, String> = TreeMap::new();
    assert_eq!(map.remove(&1), None);
    assert!(map.is_empty());
}

#[rstest]
fn test_remove_only_entry() {
    let mut map = TreeMap::new();
    map.put(1, "one");
    assert_eq!(map.remove(&1), Some("one"));
    assert!(map.is_empty());
    assert_eq!(map.min(), None);
    assert!(map.validate().is_ok());
}

#[rstest]
#[case::min_first(|key: u32| key)]
#[case::max_first(|key: u32| 1023 - key)]
#[case::interleaved(|key: u32| (key * 389) % 1024)]
fn test_remove_all_keeps_invariants(
    mut large: TreeMap<u32, u32>,
    #[case] order: fn(u32) -> u32,
) {
    for index in 0..1024 {
        let key = order(index);
        assert_eq!(large.remove(&key), Some(key * 2));
        assert_eq!(large.len(), (1023 - index) as usize);
        if index % 64 == 0 {
            assert!(large.validate().is_ok());
        }
    }
    assert!(large.is_empty());
    assert_eq!(large.validate().unwrap().entries(), 0);
}

#[rstest]
fn test_remove_minimum_repeatedly(mut large: TreeMap<u32, u32>) {
    for expected in 0..100 {
        let minimum = *large.min().unwrap();
        assert_eq!(minimum, expected);
        assert_eq!(large.remove(&minimum), Some(minimum * 2));
    }
    assert_eq!(large.min(), Some(&100));
    assert!(large.validate().is_ok());
}

#[rstest]
fn test_remove_maximum_repeatedly(mut large: TreeMap<u32, u32>) {
    for expected in (924..1024).rev() {
        let maximum = *large.max().unwrap();
        assert_eq!(maximum, expected);
        assert_eq!(large.remove(&maximum), Some(maximum * 2));
    }
    assert_eq!(large.max(), Some(&923));
    assert!(large.validate().is_ok());
}

#[rstest]
fn test_remove_then_put_again(mut scenario: TreeMap<i32, String>) {
    scenario.remove(&3);
    scenario.put(3, "three".to_string());
    assert_eq!(scenario.get(&3), Some(&"three".to_string()));
    assert_eq!(scenario.len(), 7);
    assert!(scenario.validate().is_ok());
}

// =============================================================================
// Navigation Tests
// =============================================================================

#[rstest]
fn test_scenario_navigation(scenario: TreeMap<i32, String>) {
    assert_eq!(scenario.min(), Some(&1));
    assert_eq!(scenario.max(), Some(&9));
    assert_eq!(scenario.min_value(), Some(&"1".to_string()));
    assert_eq!(scenario.max_value(), Some(&"9".to_string()));
    assert_eq!(scenario.floor(&6), Some(&5));
    assert_eq!(scenario.ceil(&6), Some(&7));
    assert_eq!(scenario.len(), 7);
}

#[rstest]
fn test_navigation_on_empty_map() {
    let map: TreeMap<i32, i32> = TreeMap::new();
    assert_eq!(map.min(), None);
    assert_eq!(map.max(), None);
    assert_eq!(map.min_value(), None);
    assert_eq!(map.max_value(), None);
    assert_eq!(map.floor(&1), None);
    assert_eq!(map.ceil(&1), None);
}

#[rstest]
#[case(2, Some(1), Some(3))]
#[case(5, Some(5), Some(5))]
#[case(6, Some(5), Some(7))]
#[case(0, None, Some(1))]
#[case(10, Some(9), None)]
fn test_floor_and_ceil(
    scenario: TreeMap<i32, String>,
    #[case] probe: i32,
    #[case] floor: Option<i32>,
    #[case] ceil: Option<i32>,
) {
    assert_eq!(scenario.floor(&probe).copied(), floor);
    assert_eq!(scenario.ceil(&probe).copied(), ceil);
}

#[rstest]
fn test_navigation_is_read_only(scenario: TreeMap<i32, String>) {
    let before = scenario.clone();
    let _ = (scenario.min(), scenario.max(), scenario.floor(&6), scenario.ceil(&6));
    let _ = scenario.get(&4);
    assert_eq!(scenario, before);
    assert_eq!(scenario.validate(), before.validate());
}

// =============================================================================
// OrderedMap Contract Tests
// =============================================================================

fn fill<M: OrderedMap<i32, i32>>(map: &mut M, keys: &[i32]) {
    for &key in keys {
        map.put(key, -key);
    }
}

#[rstest]
fn test_ordered_map_contract() {
    let mut map: TreeMap<i32, i32> = TreeMap::new();
    assert!(OrderedMap::is_empty(&map));

    fill(&mut map, &[4, 2, 6]);

    assert_eq!(OrderedMap::len(&map), 3);
    assert!(OrderedMap::contains_key(&map, &2));
    assert_eq!(OrderedMap::min_value(&map), Some(&-2));
    assert_eq!(OrderedMap::max_value(&map), Some(&-6));
    assert_eq!(OrderedMap::remove(&mut map, &4), Some(-4));
    assert_eq!(OrderedMap::floor(&map, &5), Some(&2));
}

// =============================================================================
// Validation Tests
// =============================================================================

#[rstest]
fn test_validate_after_mixed_workload(mut large: TreeMap<u32, u32>) {
    for key in (0..1024).step_by(3) {
        large.remove(&key);
    }
    for key in 2000..2100 {
        large.put(key, key);
    }

    let stats = large.validate().unwrap();
    assert_eq!(stats.entries(), large.len());
    assert_eq!(stats.height(), large.height());
    assert!(stats.black_height() <= stats.height());
}

#[rstest]
fn test_invariant_violation_message() {
    let violation = InvariantViolation::UnbalancedBlackHeight {
        left: 3,
        right: 2,
        depth: 1,
    };
    assert_eq!(
        violation.to_string(),
        "unbalanced black height at depth 1: left 3, right 2"
    );
}
