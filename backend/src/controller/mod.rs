//! Controller - operation surface and step simulation
//!
//! Integrates dispatch selection, queue ordering, and fleet state behind the
//! operations the outer layers invoke.
//!
//! See `engine.rs` for full implementation.

pub mod engine;

// Re-export main types for convenience
pub use engine::{Controller, StepResult};
