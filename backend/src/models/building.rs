//! Building and fleet state
//!
//! The building owns the fixed-capacity fleet: exactly [`FLEET_CAPACITY`]
//! elevator records, of which the first `active_elevator_count` are in
//! service. It is the single shared mutable state behind every pickup,
//! target addition, step, and reconfiguration.
//!
//! # Critical Invariants
//!
//! 1. `elevators.len() == FLEET_CAPACITY` at all times
//! 2. `status == Off` iff `id >= active_elevator_count`
//! 3. After any configuration change, every record is at floor 0 with an
//!    empty queue
//!
//! The building is exclusively owned by the dispatch controller and passed by
//! reference, never a module-level singleton; callers needing concurrent
//! access wrap the controller in a mutex.

use crate::models::elevator::Elevator;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hard ceiling on fleet size, independent of the active count
pub const FLEET_CAPACITY: usize = 16;

/// Building configuration
///
/// Field names serialize in camelCase to match the wire shape the HTTP layer
/// exposes (`numberOfFloors`, `activeElevatorCount`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingConfig {
    /// Number of floors served, >= 1
    pub number_of_floors: usize,

    /// Number of elevators in service, 0..=16
    pub active_elevator_count: usize,
}

/// Errors that can occur when applying a building configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("activeElevatorCount {requested} exceeds fleet capacity {capacity}")]
    TooManyElevators { requested: usize, capacity: usize },

    #[error("numberOfFloors must be at least 1, got {0}")]
    NotEnoughFloors(usize),
}

/// The building: configuration plus the full 16-record fleet
///
/// # Example
///
/// ```
/// use elevator_dispatch_core_rs::{Building, BuildingConfig, FLEET_CAPACITY};
///
/// let building = Building::new(BuildingConfig {
///     number_of_floors: 10,
///     active_elevator_count: 3,
/// }).unwrap();
///
/// assert_eq!(building.elevators().len(), FLEET_CAPACITY);
/// assert_eq!(building.num_active(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Building {
    /// Active configuration
    config: BuildingConfig,

    /// All elevator records; always exactly `FLEET_CAPACITY` of them
    elevators: Vec<Elevator>,
}

impl Building {
    /// Create a building with an initial configuration
    ///
    /// All records start at floor 0 with empty queues; the first
    /// `active_elevator_count` are `Idle`, the rest `Off`.
    ///
    /// # Returns
    ///
    /// * `Ok(Building)` - Initialized fleet
    /// * `Err(ConfigError)` - Configuration out of range
    pub fn new(config: BuildingConfig) -> Result<Self, ConfigError> {
        let elevators = (0..FLEET_CAPACITY).map(Elevator::new).collect();
        let mut building = Self {
            config,
            elevators,
        };
        building.apply_config(config)?;
        Ok(building)
    }

    /// Validate a configuration without applying it
    pub fn validate_config(config: &BuildingConfig) -> Result<(), ConfigError> {
        if config.active_elevator_count > FLEET_CAPACITY {
            return Err(ConfigError::TooManyElevators {
                requested: config.active_elevator_count,
                capacity: FLEET_CAPACITY,
            });
        }
        if config.number_of_floors == 0 {
            return Err(ConfigError::NotEnoughFloors(config.number_of_floors));
        }
        Ok(())
    }

    /// Apply a new configuration and reset the fleet
    ///
    /// Every record returns to floor 0 with an empty queue; records below the
    /// active count become `Idle`, the rest `Off`. Idempotent. In-flight
    /// targets are discarded, so callers must serialize this against pickups
    /// and steps.
    pub fn apply_config(&mut self, config: BuildingConfig) -> Result<(), ConfigError> {
        Self::validate_config(&config)?;
        self.config = config;
        for elevator in &mut self.elevators {
            elevator.reset(elevator.id() < config.active_elevator_count);
        }
        Ok(())
    }

    /// Active configuration
    pub fn config(&self) -> BuildingConfig {
        self.config
    }

    /// Read-only view of all 16 records, `Off` ones included
    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    /// Mutable view of the fleet for the step simulator
    pub fn elevators_mut(&mut self) -> &mut [Elevator] {
        &mut self.elevators
    }

    /// Get reference to an elevator by id
    pub fn elevator(&self, id: usize) -> Option<&Elevator> {
        self.elevators.get(id)
    }

    /// Get mutable reference to an elevator by id
    pub fn elevator_mut(&mut self, id: usize) -> Option<&mut Elevator> {
        self.elevators.get_mut(id)
    }

    /// Number of elevators currently in service
    pub fn num_active(&self) -> usize {
        self.config.active_elevator_count
    }
}
