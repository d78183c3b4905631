//! Elevator model
//!
//! Represents a single cabin in the fleet.
//! Each elevator has:
//! - A fixed id (0..15), assigned at fleet creation
//! - Current floor position
//! - Ordered queue of pending target floors
//! - Status (Up, Down, Idle, Off)
//!
//! # Critical Invariants
//!
//! 1. An `Off` elevator carries no targets and rejects all work
//! 2. A non-`Off` elevator with an empty queue is `Idle`
//! 3. `Up`/`Down` reflect the head target relative to the current floor
//!
//! Records are never destroyed: reconfiguration only resets status, floor,
//! and queue in place.

use serde::{Deserialize, Serialize};

/// Elevator status
///
/// Closed set of cabin states; every consumer matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElevatorStatus {
    /// Moving up (head target is above the current floor)
    Up,

    /// Moving down (head target is below the current floor)
    Down,

    /// Active with no pending targets
    Idle,

    /// Outside the active fleet; rejects all pickups and targets
    Off,
}

impl ElevatorStatus {
    /// Status as a display string
    pub fn as_str(&self) -> &'static str {
        match self {
            ElevatorStatus::Up => "Up",
            ElevatorStatus::Down => "Down",
            ElevatorStatus::Idle => "Idle",
            ElevatorStatus::Off => "Off",
        }
    }
}

/// A single elevator cabin
///
/// # Example
///
/// ```
/// use elevator_dispatch_core_rs::{Elevator, ElevatorStatus};
///
/// let mut elevator = Elevator::new(0);
/// assert_eq!(elevator.status(), ElevatorStatus::Off);
///
/// elevator.reset(true);
/// elevator.push_target(4);
/// elevator.refresh_status();
/// assert_eq!(elevator.status(), ElevatorStatus::Up);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Elevator {
    /// Unique id within the fleet (0..15), immutable
    id: usize,

    /// Current floor position (0..number_of_floors-1)
    current_floor: usize,

    /// Pending target floors, ordered by the SCAN sorter
    ///
    /// Duplicates are possible on insert; every entry equal to the arrival
    /// floor is purged together when the elevator reaches it.
    target_floors: Vec<usize>,

    /// Current status
    status: ElevatorStatus,
}

impl Elevator {
    /// Create a new elevator record at floor 0 with an empty queue
    ///
    /// New records start `Off`; the building activates the first
    /// `active_elevator_count` of them when a configuration is applied.
    pub fn new(id: usize) -> Self {
        Self {
            id,
            current_floor: 0,
            target_floors: Vec::new(),
            status: ElevatorStatus::Off,
        }
    }

    /// Elevator id
    pub fn id(&self) -> usize {
        self.id
    }

    /// Current floor position
    pub fn current_floor(&self) -> usize {
        self.current_floor
    }

    /// Pending target floors in service order
    pub fn target_floors(&self) -> &[usize] {
        &self.target_floors
    }

    /// Current status
    pub fn status(&self) -> ElevatorStatus {
        self.status
    }

    /// Number of pending targets (dispatch load metric)
    pub fn queue_len(&self) -> usize {
        self.target_floors.len()
    }

    /// Whether the elevator is outside the active fleet
    pub fn is_off(&self) -> bool {
        self.status == ElevatorStatus::Off
    }

    /// Whether the elevator is active with no pending targets
    pub fn is_idle(&self) -> bool {
        self.status == ElevatorStatus::Idle
    }

    /// Whether `floor` is already queued
    pub fn has_target(&self, floor: usize) -> bool {
        self.target_floors.contains(&floor)
    }

    /// Absolute distance from the current floor to `floor`
    pub fn distance_to(&self, floor: usize) -> usize {
        self.current_floor.abs_diff(floor)
    }

    /// Append a floor to the pending queue
    ///
    /// Insertion order is only meaningful until the SCAN sorter normalizes
    /// the queue; duplicates are accepted.
    pub fn push_target(&mut self, floor: usize) {
        self.target_floors.push(floor);
    }

    /// Replace the queue with a reordered permutation of itself
    pub fn set_target_floors(&mut self, target_floors: Vec<usize>) {
        self.target_floors = target_floors;
    }

    /// First floor in the service order, the elevator's immediate destination
    pub fn head_target(&self) -> Option<usize> {
        self.target_floors.first().copied()
    }

    /// Move one floor toward `floor`, updating status to match the movement
    ///
    /// Returns `true` if the elevator moved. A target equal to the current
    /// floor moves nothing; the caller handles it as an arrival.
    pub fn advance_toward(&mut self, floor: usize) -> bool {
        if floor > self.current_floor {
            self.current_floor += 1;
            self.status = ElevatorStatus::Up;
            true
        } else if floor < self.current_floor {
            self.current_floor -= 1;
            self.status = ElevatorStatus::Down;
            true
        } else {
            false
        }
    }

    /// Remove every queued entry equal to `floor`
    ///
    /// Handles duplicate insertions for the same floor in one pass.
    /// Returns the number of entries removed.
    pub fn clear_targets_at(&mut self, floor: usize) -> usize {
        let before = self.target_floors.len();
        self.target_floors.retain(|&f| f != floor);
        before - self.target_floors.len()
    }

    /// Recompute status from the queue head
    ///
    /// `Off` elevators are untouched. An empty queue yields `Idle`; a head
    /// above/below the current floor yields `Up`/`Down`. A head at the
    /// current floor leaves the elevator `Idle` until the next step purges it.
    pub fn refresh_status(&mut self) {
        if self.status == ElevatorStatus::Off {
            return;
        }
        self.status = match self.target_floors.first() {
            None => ElevatorStatus::Idle,
            Some(&head) if head > self.current_floor => ElevatorStatus::Up,
            Some(&head) if head < self.current_floor => ElevatorStatus::Down,
            Some(_) => ElevatorStatus::Idle,
        };
    }

    /// Reset the record for a new configuration
    ///
    /// Floor returns to 0 and the queue is cleared; status becomes `Idle`
    /// for active records and `Off` for the rest.
    pub fn reset(&mut self, active: bool) {
        self.current_floor = 0;
        self.target_floors.clear();
        self.status = if active {
            ElevatorStatus::Idle
        } else {
            ElevatorStatus::Off
        };
    }
}
