//! Event logging for debugging and auditing.
//!
//! Captures every externally visible fleet state change: pickup dispatches,
//! target queue mutations, elevator movement, arrivals, and reconfiguration.
//! The log is observational only: no core operation reads it to make a
//! decision. Outer layers use it to:
//! - Debug dispatch decisions (which cabin answered a call)
//! - Audit movement against the one-floor-per-step contract
//! - Reconstruct a session for analysis
//!
//! Events are stamped with the step counter, so everything that happens
//! between two `step()` calls shares the upcoming step number.

use crate::dispatch::CallDirection;

/// Fleet event capturing a state change.
///
/// Events are logged in the order they occur within a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A floor call entered the dispatcher
    PickupRequested {
        step: usize,
        floor: usize,
        direction: CallDirection,
        /// Chosen elevator, `None` when no non-`Off` cabin exists
        assigned: Option<usize>,
    },

    /// A target floor was accepted into an elevator's queue
    TargetAdded {
        step: usize,
        elevator_id: usize,
        floor: usize,
    },

    /// A target floor was rejected (unknown id, `Off` cabin, or bad floor)
    TargetRejected {
        step: usize,
        elevator_id: usize,
        floor: usize,
    },

    /// An elevator moved one floor during a step
    ElevatorMoved {
        step: usize,
        elevator_id: usize,
        from_floor: usize,
        to_floor: usize,
    },

    /// An elevator reached its head target and purged matching entries
    ElevatorArrived {
        step: usize,
        elevator_id: usize,
        floor: usize,
        /// Queue entries removed, > 1 when the floor was queued repeatedly
        cleared: usize,
    },

    /// The building configuration changed and the fleet was reset
    Reconfigured {
        step: usize,
        number_of_floors: usize,
        active_elevator_count: usize,
    },
}

impl Event {
    /// Get the step number when this event occurred
    pub fn step(&self) -> usize {
        match self {
            Event::PickupRequested { step, .. } => *step,
            Event::TargetAdded { step, .. } => *step,
            Event::TargetRejected { step, .. } => *step,
            Event::ElevatorMoved { step, .. } => *step,
            Event::ElevatorArrived { step, .. } => *step,
            Event::Reconfigured { step, .. } => *step,
        }
    }

    /// Get the elevator id this event concerns, if any
    pub fn elevator_id(&self) -> Option<usize> {
        match self {
            Event::PickupRequested { assigned, .. } => *assigned,
            Event::TargetAdded { elevator_id, .. } => Some(*elevator_id),
            Event::TargetRejected { elevator_id, .. } => Some(*elevator_id),
            Event::ElevatorMoved { elevator_id, .. } => Some(*elevator_id),
            Event::ElevatorArrived { elevator_id, .. } => Some(*elevator_id),
            Event::Reconfigured { .. } => None,
        }
    }
}

/// Append-only log of fleet events
///
/// # Example
///
/// ```
/// use elevator_dispatch_core_rs::{Event, EventLog};
///
/// let mut log = EventLog::new();
/// log.log(Event::TargetAdded { step: 0, elevator_id: 1, floor: 4 });
///
/// assert_eq!(log.len(), 1);
/// assert_eq!(log.events()[0].step(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Get the number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all events
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get events for a specific step
    pub fn events_at_step(&self, step: usize) -> Vec<&Event> {
        self.events.iter().filter(|e| e.step() == step).collect()
    }

    /// Get events concerning a specific elevator
    pub fn events_for_elevator(&self, elevator_id: usize) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.elevator_id() == Some(elevator_id))
            .collect()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_for_elevator_filters() {
        let mut log = EventLog::new();
        log.log(Event::TargetAdded {
            step: 0,
            elevator_id: 1,
            floor: 4,
        });
        log.log(Event::TargetAdded {
            step: 0,
            elevator_id: 2,
            floor: 6,
        });
        log.log(Event::ElevatorMoved {
            step: 1,
            elevator_id: 1,
            from_floor: 0,
            to_floor: 1,
        });

        assert_eq!(log.events_for_elevator(1).len(), 2);
        assert_eq!(log.events_for_elevator(2).len(), 1);
        assert_eq!(log.events_at_step(1).len(), 1);
    }

    #[test]
    fn test_unassigned_pickup_has_no_elevator() {
        let event = Event::PickupRequested {
            step: 3,
            floor: 5,
            direction: CallDirection::Down,
            assigned: None,
        };
        assert_eq!(event.elevator_id(), None);
        assert_eq!(event.step(), 3);
    }
}
