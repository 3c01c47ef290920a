//! Error types for the calorie calculator

use thiserror::Error;

/// Faults raised by the metrics engine itself.
///
/// Range checks happen before the engine runs, so the only thing the engine
/// rejects is a value it cannot do arithmetic with.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    #[error("Invalid input for {field}: {value}")]
    InvalidInput { field: &'static str, value: f64 },
}

impl MetricsError {
    /// Reject `value` unless it is a finite number
    pub fn require_finite(field: &'static str, value: f64) -> Result<f64, MetricsError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(MetricsError::InvalidInput { field, value })
        }
    }

    /// Reject `value` unless it is finite and strictly positive
    pub fn require_positive(field: &'static str, value: f64) -> Result<f64, MetricsError> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(MetricsError::InvalidInput { field, value })
        }
    }
}
