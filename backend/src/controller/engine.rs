//! Dispatch controller engine
//!
//! Main operation surface integrating all components:
//! - Dispatch selection (floor calls → cabin assignment)
//! - Target queue normalization (SCAN ordering)
//! - Step simulation (discrete one-floor movement)
//! - Configuration management (fleet reset)
//! - Event logging (complete session history)
//!
//! # Architecture
//!
//! The controller owns the building and advances it through discrete steps:
//!
//! ```text
//! For each step, per active cabin with pending work:
//! 1. Renormalize the queue for the cabin's floor and direction
//! 2. Move one floor toward the head target
//! 3. On arrival, purge every entry for that floor
//! 4. Recompute status from the remaining queue
//! ```
//!
//! Pickups and target additions mutate the fleet between steps; the
//! configuration operation resets it wholesale.
//!
//! # Concurrency
//!
//! All operations are synchronous, single-pass, and take `&mut self`: the
//! fleet must never be observed half-mutated, so embedding processes wrap the
//! controller in a single mutex (or a single-threaded actor) and hold it for
//! the duration of one operation. Configuration invalidates in-flight queues
//! and must be serialized against pickups and steps by the caller.
//!
//! # Example
//!
//! ```rust
//! use elevator_dispatch_core_rs::{BuildingConfig, CallDirection, Controller};
//!
//! let mut controller = Controller::new(BuildingConfig {
//!     number_of_floors: 8,
//!     active_elevator_count: 2,
//! }).unwrap();
//!
//! let assigned = controller.pickup(5, CallDirection::Up).unwrap();
//!
//! // One discrete tick per call; the cabin climbs one floor each time.
//! for _ in 0..5 {
//!     controller.step();
//! }
//! assert_eq!(controller.status()[assigned].current_floor(), 5);
//! ```

use crate::dispatch::{self, CallDirection};
use crate::models::building::{Building, BuildingConfig, ConfigError};
use crate::models::elevator::Elevator;
use crate::models::event::{Event, EventLog};
use crate::scan;

/// Result of a single simulation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    /// Step number (0-indexed)
    pub step: usize,

    /// Number of cabins that moved a floor this step
    pub num_moved: usize,

    /// Number of cabins that reached their head target this step
    pub num_arrivals: usize,
}

/// Main controller owning fleet state and coordinating dispatch, queue
/// ordering, and step simulation
///
/// One controller serves one building. It is created by the embedding
/// process and injected wherever operations are invoked; the fleet is never
/// global state.
pub struct Controller {
    /// Fleet state (configuration plus all 16 cabin records)
    building: Building,

    /// Event log (all session events)
    event_log: EventLog,

    /// Discrete steps executed so far; stamps logged events
    steps_taken: usize,
}

impl Controller {
    /// Create a new controller from a building configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Controller)` - Fleet initialized, first `active_elevator_count`
    ///   cabins idle at floor 0, the rest off
    /// * `Err(ConfigError)` - Configuration out of range
    pub fn new(config: BuildingConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            building: Building::new(config)?,
            event_log: EventLog::new(),
            steps_taken: 0,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Read-only snapshot of all 16 cabin records, `Off` ones included
    pub fn status(&self) -> &[Elevator] {
        self.building.elevators()
    }

    /// Active building configuration
    pub fn config(&self) -> BuildingConfig {
        self.building.config()
    }

    /// Get reference to the building
    pub fn building(&self) -> &Building {
        &self.building
    }

    /// Number of discrete steps executed so far
    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Get reference to the event log
    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Get total events logged
    pub fn event_count(&self) -> usize {
        self.event_log.len()
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Apply a new building configuration and reset the fleet
    ///
    /// Every cabin returns to floor 0 with an empty queue; cabins below the
    /// active count become `Idle`, the rest `Off`. In-flight targets are
    /// discarded. Idempotent on success; a failed validation leaves the
    /// fleet untouched.
    pub fn configure(
        &mut self,
        number_of_floors: usize,
        active_elevator_count: usize,
    ) -> Result<(), ConfigError> {
        let config = BuildingConfig {
            number_of_floors,
            active_elevator_count,
        };
        self.building.apply_config(config)?;
        self.event_log.log(Event::Reconfigured {
            step: self.steps_taken,
            number_of_floors,
            active_elevator_count,
        });
        Ok(())
    }

    /// Dispatch a floor call to the best cabin
    ///
    /// Selects per the tier rules in [`dispatch`], appends `floor` to the
    /// winner's queue, renormalizes it, and refreshes the cabin's status so
    /// `Up`/`Down` immediately reflect the new head target.
    ///
    /// # Returns
    ///
    /// The assigned elevator id, or `None` when the fleet has no active
    /// cabin or the floor is outside the building. No retry is implied;
    /// surfacing the failure is the caller's concern.
    pub fn pickup(&mut self, floor: usize, direction: CallDirection) -> Option<usize> {
        let step = self.steps_taken;
        let assigned = if floor < self.building.config().number_of_floors {
            dispatch::select_best_elevator(self.building.elevators(), floor, direction)
        } else {
            None
        };
        self.event_log.log(Event::PickupRequested {
            step,
            floor,
            direction,
            assigned,
        });

        let id = assigned?;
        if let Some(elevator) = self.building.elevator_mut(id) {
            elevator.push_target(floor);
            scan::update_targets(elevator);
            elevator.refresh_status();
        }
        assigned
    }

    /// Append a target floor to a specific cabin's queue
    ///
    /// Rejected silently (`false`, with a `TargetRejected` event) when the
    /// id is unknown, the cabin is `Off`, or the floor is outside the
    /// building. An accepted target is queued, normalized, and reflected in
    /// the cabin's status.
    pub fn add_target(&mut self, elevator_id: usize, floor: usize) -> bool {
        let step = self.steps_taken;
        let number_of_floors = self.building.config().number_of_floors;

        let accepted = match self.building.elevator_mut(elevator_id) {
            Some(elevator) if !elevator.is_off() && floor < number_of_floors => {
                elevator.push_target(floor);
                scan::update_targets(elevator);
                elevator.refresh_status();
                true
            }
            _ => false,
        };

        if accepted {
            self.event_log.log(Event::TargetAdded {
                step,
                elevator_id,
                floor,
            });
        } else {
            self.event_log.log(Event::TargetRejected {
                step,
                elevator_id,
                floor,
            });
        }
        accepted
    }

    /// Execute one simulation step
    ///
    /// Advances every active cabin with pending work by at most one floor,
    /// in ascending id order. Each cabin's movement and status recompute is
    /// atomic within the step; cabins never observe each other's mid-step
    /// state. See the module docs for the per-cabin sequence.
    pub fn step(&mut self) -> StepResult {
        let step = self.steps_taken;
        let mut num_moved = 0;
        let mut num_arrivals = 0;

        for elevator in self.building.elevators_mut() {
            if elevator.is_off() || elevator.target_floors().is_empty() {
                continue;
            }

            // Reorder for the cabin's current floor and direction before
            // committing to a head target.
            scan::update_targets(elevator);
            let head = match elevator.head_target() {
                Some(head) => head,
                None => continue,
            };

            let from_floor = elevator.current_floor();
            if elevator.advance_toward(head) {
                num_moved += 1;
                self.event_log.log(Event::ElevatorMoved {
                    step,
                    elevator_id: elevator.id(),
                    from_floor,
                    to_floor: elevator.current_floor(),
                });
            }

            // Arrival: purge every queued entry for this floor (duplicate
            // insertions clear together) and recompute status.
            if elevator.current_floor() == head {
                let floor = elevator.current_floor();
                let cleared = elevator.clear_targets_at(floor);
                elevator.refresh_status();
                num_arrivals += 1;
                self.event_log.log(Event::ElevatorArrived {
                    step,
                    elevator_id: elevator.id(),
                    floor,
                    cleared,
                });
            }
        }

        self.steps_taken += 1;
        StepResult {
            step,
            num_moved,
            num_arrivals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::elevator::ElevatorStatus;

    fn controller(floors: usize, active: usize) -> Controller {
        Controller::new(BuildingConfig {
            number_of_floors: floors,
            active_elevator_count: active,
        })
        .unwrap()
    }

    #[test]
    fn test_pickup_assigns_and_queues() {
        let mut controller = controller(10, 5);

        let assigned = controller.pickup(7, CallDirection::Up);
        assert_eq!(assigned, Some(0));

        let elevator = &controller.status()[0];
        assert_eq!(elevator.target_floors(), &[7]);
        assert_eq!(elevator.status(), ElevatorStatus::Up);
    }

    #[test]
    fn test_pickup_out_of_range_floor() {
        let mut controller = controller(10, 5);
        assert_eq!(controller.pickup(10, CallDirection::Up), None);
        assert_eq!(controller.event_count(), 1);
    }

    #[test]
    fn test_add_target_rejects_off_and_unknown() {
        let mut controller = controller(10, 2);

        assert!(controller.add_target(1, 4));
        assert!(!controller.add_target(2, 4)); // Off
        assert!(!controller.add_target(99, 4)); // unknown
        assert!(!controller.add_target(0, 10)); // floor out of range
    }

    #[test]
    fn test_step_counts_movement_and_arrivals() {
        let mut controller = controller(10, 1);
        controller.add_target(0, 2);

        let result = controller.step();
        assert_eq!(result, StepResult { step: 0, num_moved: 1, num_arrivals: 0 });

        let result = controller.step();
        assert_eq!(result, StepResult { step: 1, num_moved: 1, num_arrivals: 1 });

        let result = controller.step();
        assert_eq!(result, StepResult { step: 2, num_moved: 0, num_arrivals: 0 });
    }

    #[test]
    fn test_target_at_current_floor_clears_without_moving() {
        let mut controller = controller(10, 1);
        controller.add_target(0, 0);

        let result = controller.step();
        assert_eq!(result.num_moved, 0);
        assert_eq!(result.num_arrivals, 1);

        let elevator = &controller.status()[0];
        assert!(elevator.target_floors().is_empty());
        assert_eq!(elevator.status(), ElevatorStatus::Idle);
    }

    #[test]
    fn test_configure_resets_and_logs() {
        let mut controller = controller(10, 5);
        controller.pickup(3, CallDirection::Up);

        controller.configure(6, 2).unwrap();
        assert_eq!(controller.config().number_of_floors, 6);
        assert!(controller.status().iter().all(|e| e.target_floors().is_empty()));

        let err = controller.configure(0, 2).unwrap_err();
        assert_eq!(err, ConfigError::NotEnoughFloors(0));
        // Failed validation leaves the fleet untouched.
        assert_eq!(controller.config().number_of_floors, 6);
    }
}
