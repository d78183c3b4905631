//! Domain models for the elevator dispatch core

pub mod building;
pub mod elevator;
pub mod event;

// Re-exports
pub use building::{Building, BuildingConfig, ConfigError, FLEET_CAPACITY};
pub use elevator::{Elevator, ElevatorStatus};
pub use event::{Event, EventLog};
