//! Elevator Dispatch Core - Rust Engine
//!
//! Multi-car elevator dispatch controller with discrete-step simulation.
//!
//! # Architecture
//!
//! - **models**: Domain types (Elevator, Building, Event)
//! - **scan**: Target queue ordering (SCAN sorter)
//! - **dispatch**: Tiered elevator selection for floor calls
//! - **controller**: Operation surface and step simulation
//!
//! # Critical Invariants
//!
//! 1. The fleet always holds exactly 16 records; reconfiguration resets,
//!    never destroys
//! 2. An `Off` cabin carries no targets and rejects all work
//! 3. Queue reordering is a pure permutation (never drops or adds floors)
//! 4. One discrete step moves a cabin at most one floor
//!
//! The HTTP layer, browser UI, and process bootstrap are external
//! collaborators: they invoke the operations on [`Controller`] and render
//! the results, and own all wire encoding themselves.

// Module declarations
pub mod controller;
pub mod dispatch;
pub mod models;
pub mod scan;

// Re-exports for convenience
pub use controller::{Controller, StepResult};
pub use dispatch::{select_best_elevator, CallDirection};
pub use models::{
    building::{Building, BuildingConfig, ConfigError, FLEET_CAPACITY},
    elevator::{Elevator, ElevatorStatus},
    event::{Event, EventLog},
};
pub use scan::{reorder, update_targets};
