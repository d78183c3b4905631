//! Target queue ordering (SCAN sorter)
//!
//! Reorders an elevator's pending floors so that requests ahead in the
//! current direction of travel are served before requests behind it, the
//! strategy disk schedulers call SCAN. Serving the current sweep first
//! minimizes direction reversals.
//!
//! # Ordering Rules
//!
//! - `Up`: floors `>= current` ascending, then floors `< current` ascending
//! - `Down`: floors `<= current` descending, then floors `> current` descending
//! - `Idle` / `Off`: by absolute distance from the current floor, nearest first
//!
//! Ties keep their relative order from the input sequence (stable sort), so
//! repeated reordering of an unchanged queue is a fixed point.
//!
//! # Purity
//!
//! [`reorder`] is a pure function returning a fresh permutation of its input;
//! it never drops or invents floors. The step simulator and dispatcher only
//! mutate queues through the [`update_targets`] write-back, which keeps queue
//! iteration free of in-place aliasing.

use crate::models::elevator::{Elevator, ElevatorStatus};

/// Reorder pending target floors for a cabin at `current_floor` heading in
/// `direction`.
///
/// Returns a permutation of `targets`; the input is left untouched.
///
/// # Example
///
/// ```
/// use elevator_dispatch_core_rs::{reorder, ElevatorStatus};
///
/// // Sweeping up from floor 5: serve 8 and 9 on the way up, then come
/// // back down for 1 and 3.
/// let ordered = reorder(5, ElevatorStatus::Up, &[3, 8, 1, 9]);
/// assert_eq!(ordered, vec![8, 9, 1, 3]);
/// ```
pub fn reorder(current_floor: usize, direction: ElevatorStatus, targets: &[usize]) -> Vec<usize> {
    match direction {
        ElevatorStatus::Up => {
            let mut ahead: Vec<usize> =
                targets.iter().copied().filter(|&f| f >= current_floor).collect();
            let mut behind: Vec<usize> =
                targets.iter().copied().filter(|&f| f < current_floor).collect();
            ahead.sort();
            behind.sort();
            ahead.extend(behind);
            ahead
        }
        ElevatorStatus::Down => {
            let mut ahead: Vec<usize> =
                targets.iter().copied().filter(|&f| f <= current_floor).collect();
            let mut behind: Vec<usize> =
                targets.iter().copied().filter(|&f| f > current_floor).collect();
            ahead.sort_by(|a, b| b.cmp(a));
            behind.sort_by(|a, b| b.cmp(a));
            ahead.extend(behind);
            ahead
        }
        ElevatorStatus::Idle | ElevatorStatus::Off => {
            let mut ordered = targets.to_vec();
            ordered.sort_by_key(|&f| current_floor.abs_diff(f));
            ordered
        }
    }
}

/// Reorder an elevator's own queue in place
///
/// Applies [`reorder`] with the elevator's current floor and status and
/// writes the result back. Always succeeds.
pub fn update_targets(elevator: &mut Elevator) {
    let ordered = reorder(
        elevator.current_floor(),
        elevator.status(),
        elevator.target_floors(),
    );
    elevator.set_target_floors(ordered);
}
