//! Tests for the SCAN target queue orderer

use elevator_dispatch_core_rs::{reorder, ElevatorStatus};
use proptest::prelude::*;

#[test]
fn test_up_sweep_ahead_ascending_then_behind_ascending() {
    let ordered = reorder(5, ElevatorStatus::Up, &[3, 8, 1, 9]);
    assert_eq!(ordered, vec![8, 9, 1, 3]);
}

#[test]
fn test_down_sweep_mirrors_up() {
    let ordered = reorder(5, ElevatorStatus::Down, &[3, 8, 1, 9]);
    assert_eq!(ordered, vec![3, 1, 8, 9]);
}

#[test]
fn test_idle_orders_nearest_first_with_stable_ties() {
    // Distances from floor 5 are 4, 4, 1; the tie between 1 and 9 keeps
    // input order.
    let ordered = reorder(5, ElevatorStatus::Idle, &[1, 9, 6]);
    assert_eq!(ordered, vec![6, 1, 9]);
}

#[test]
fn test_off_orders_like_idle() {
    assert_eq!(
        reorder(5, ElevatorStatus::Off, &[1, 9, 6]),
        reorder(5, ElevatorStatus::Idle, &[1, 9, 6])
    );
}

#[test]
fn test_current_floor_counts_as_ahead_on_both_sweeps() {
    assert_eq!(reorder(4, ElevatorStatus::Up, &[2, 4, 6]), vec![4, 6, 2]);
    assert_eq!(reorder(4, ElevatorStatus::Down, &[2, 4, 6]), vec![4, 2, 6]);
}

#[test]
fn test_all_targets_behind_an_up_sweep() {
    // Nothing ahead: the behind partition alone, ascending.
    assert_eq!(reorder(9, ElevatorStatus::Up, &[3, 1, 2]), vec![1, 2, 3]);
}

#[test]
fn test_reordering_twice_is_a_fixed_point() {
    let once = reorder(5, ElevatorStatus::Up, &[3, 8, 1, 9, 8]);
    let twice = reorder(5, ElevatorStatus::Up, &once);
    assert_eq!(once, twice);
}

fn direction_strategy() -> impl Strategy<Value = ElevatorStatus> {
    prop_oneof![
        Just(ElevatorStatus::Up),
        Just(ElevatorStatus::Down),
        Just(ElevatorStatus::Idle),
        Just(ElevatorStatus::Off),
    ]
}

proptest! {
    /// The orderer returns a permutation: same multiset in, same multiset out.
    #[test]
    fn prop_reorder_is_a_permutation(
        current_floor in 0usize..32,
        direction in direction_strategy(),
        targets in proptest::collection::vec(0usize..32, 0..24),
    ) {
        let ordered = reorder(current_floor, direction, &targets);

        let mut expected = targets.clone();
        expected.sort();
        let mut actual = ordered.clone();
        actual.sort();
        prop_assert_eq!(expected, actual);
    }

    /// On an up sweep, every floor at or above the cabin precedes every
    /// floor below it, and both segments are internally sorted.
    #[test]
    fn prop_up_sweep_partitions_and_sorts(
        current_floor in 0usize..32,
        targets in proptest::collection::vec(0usize..32, 0..24),
    ) {
        let ordered = reorder(current_floor, ElevatorStatus::Up, &targets);

        let split = ordered.iter().take_while(|&&f| f >= current_floor).count();
        let (ahead, behind) = ordered.split_at(split);

        prop_assert!(behind.iter().all(|&f| f < current_floor));
        prop_assert!(ahead.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(behind.windows(2).all(|w| w[0] <= w[1]));
    }
}
