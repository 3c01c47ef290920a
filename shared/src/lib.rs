//! Maintenance Calories Calculator Shared Library
//!
//! This crate contains the metrics engine, the workout plan table and the
//! input validation used by both the server and the WASM module.

pub mod errors;
pub mod health_metrics;
pub mod types;
pub mod validation;
pub mod workout;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use types::*;
pub use workout::{select_workout_plan, WorkoutPlan};
