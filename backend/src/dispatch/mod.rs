//! Dispatch selection for floor calls
//!
//! Chooses the best cabin for an incoming floor call. Candidates are
//! evaluated in an ordered sequence of priority tiers; the first tier with a
//! match decides, and later tiers are never consulted.
//!
//! # Tiers
//!
//! 1. Already targeting the call floor and sweeping toward it: fewest
//!    pending targets wins
//! 2. Already targeting the call floor, any direction: closest wins
//! 3. Idle cabins: closest wins
//! 4. Sweeping toward the call floor in the requested direction: fewest
//!    pending targets wins
//! 5. Not moving away (idle, or heading at the call floor in either
//!    direction): closest wins
//! 6. Any active cabin, even one moving away: closest wins
//!
//! Only a fleet with zero active cabins yields no selection.
//!
//! # Tie-breaking
//!
//! Every tier scans the fleet in ascending id order; equal load or equal
//! distance resolves to the first cabin seen, so selection is deterministic.

use crate::models::elevator::{Elevator, ElevatorStatus};

/// Requested travel direction of a floor call
///
/// External layers encode direction as `+1` (up) / `-1` (down); the
/// conversions keep that wire encoding out of the core logic.
///
/// # Example
///
/// ```
/// use elevator_dispatch_core_rs::CallDirection;
///
/// assert_eq!(CallDirection::from_delta(1), Some(CallDirection::Up));
/// assert_eq!(CallDirection::from_delta(-1), Some(CallDirection::Down));
/// assert_eq!(CallDirection::from_delta(0), None);
/// assert_eq!(CallDirection::Down.delta(), -1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallDirection {
    Up,
    Down,
}

impl CallDirection {
    /// Parse the `+1`/`-1` wire encoding; anything else is rejected
    pub fn from_delta(delta: i64) -> Option<Self> {
        match delta {
            1 => Some(CallDirection::Up),
            -1 => Some(CallDirection::Down),
            _ => None,
        }
    }

    /// The `+1`/`-1` wire encoding of this direction
    pub fn delta(&self) -> i64 {
        match self {
            CallDirection::Up => 1,
            CallDirection::Down => -1,
        }
    }
}

/// Whether a cabin's current sweep will pass the call floor in the
/// requested direction
///
/// True only when the cabin travels in the requested direction and the call
/// floor is still ahead of it.
fn converging(elevator: &Elevator, call_floor: usize, direction: CallDirection) -> bool {
    match (elevator.status(), direction) {
        (ElevatorStatus::Up, CallDirection::Up) => elevator.current_floor() < call_floor,
        (ElevatorStatus::Down, CallDirection::Down) => elevator.current_floor() > call_floor,
        _ => false,
    }
}

/// Whether a cabin is heading at the call floor, whatever direction the
/// caller asked for
///
/// Weaker than [`converging`]: a cabin climbing toward a down-call still
/// counts as "not moving away".
fn heading_toward(elevator: &Elevator, call_floor: usize) -> bool {
    match elevator.status() {
        ElevatorStatus::Up => elevator.current_floor() < call_floor,
        ElevatorStatus::Down => elevator.current_floor() > call_floor,
        ElevatorStatus::Idle | ElevatorStatus::Off => false,
    }
}

/// Pick the candidate with the fewest pending targets; first id wins ties
fn least_loaded<'a, I>(candidates: I) -> Option<usize>
where
    I: Iterator<Item = &'a Elevator>,
{
    candidates.min_by_key(|e| e.queue_len()).map(|e| e.id())
}

/// Pick the candidate nearest to `call_floor`; first id wins ties
fn closest<'a, I>(candidates: I, call_floor: usize) -> Option<usize>
where
    I: Iterator<Item = &'a Elevator>,
{
    candidates
        .min_by_key(|e| e.distance_to(call_floor))
        .map(|e| e.id())
}

/// Select the best cabin for a floor call
///
/// Returns the chosen elevator's id, or `None` when the fleet has no active
/// cabin. The caller appends the floor to the winner's queue and renormalizes
/// it; selection itself never mutates.
///
/// # Example
///
/// ```
/// use elevator_dispatch_core_rs::{select_best_elevator, Building, BuildingConfig, CallDirection};
///
/// let building = Building::new(BuildingConfig {
///     number_of_floors: 10,
///     active_elevator_count: 5,
/// }).unwrap();
///
/// // All five cabins idle at floor 0: equal distance, lowest id wins.
/// let chosen = select_best_elevator(building.elevators(), 7, CallDirection::Up);
/// assert_eq!(chosen, Some(0));
/// ```
pub fn select_best_elevator(
    elevators: &[Elevator],
    call_floor: usize,
    direction: CallDirection,
) -> Option<usize> {
    // Tier 1: already targeting the call floor on a converging sweep.
    if let Some(id) = least_loaded(elevators.iter().filter(|e| {
        !e.is_off() && e.has_target(call_floor) && converging(e, call_floor, direction)
    })) {
        return Some(id);
    }

    // Tier 2: already targeting the call floor, any direction. No explicit
    // Off filter: an Off cabin never carries targets.
    if let Some(id) = closest(
        elevators.iter().filter(|e| e.has_target(call_floor)),
        call_floor,
    ) {
        return Some(id);
    }

    // Tier 3: idle cabins.
    if let Some(id) = closest(elevators.iter().filter(|e| e.is_idle()), call_floor) {
        return Some(id);
    }

    // Tier 4: converging on the call floor without it queued yet.
    if let Some(id) = least_loaded(
        elevators
            .iter()
            .filter(|e| !e.is_off() && converging(e, call_floor, direction)),
    ) {
        return Some(id);
    }

    // Tier 5: not moving away from the call. Looser than tier 4: the cabin
    // only has to be heading at the floor, not serving the requested
    // direction.
    if let Some(id) = closest(
        elevators
            .iter()
            .filter(|e| !e.is_off() && (e.is_idle() || heading_toward(e, call_floor))),
        call_floor,
    ) {
        return Some(id);
    }

    // Tier 6: any active cabin, even one moving away.
    closest(elevators.iter().filter(|e| !e.is_off()), call_floor)
}
