// src/error.rs
use thiserror::Error;

/// Error types for the fast-asian library
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SdeError {
    /// Invalid parameter values, rejected before any path is simulated
    #[error("Invalid parameter '{parameter}' = {value}: {constraint}")]
    InvalidParameter {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// A dedicated worker pool could not be started
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}

/// Result type alias for fast-asian operations
pub type SdeResult<T> = Result<T, SdeError>;

/// Validation utilities
pub mod validation {
    use super::{SdeError, SdeResult};

    /// Validate that a parameter is finite and strictly positive
    pub fn validate_positive(name: &str, value: f64) -> SdeResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(SdeError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is finite and non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> SdeResult<()> {
        validate_finite(name, value)?;
        if value < 0.0 {
            Err(SdeError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> SdeResult<()> {
        if !value.is_finite() {
            Err(SdeError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a step or trial count
    pub fn validate_count(name: &str, count: usize) -> SdeResult<()> {
        if count == 0 {
            Err(SdeError::InvalidParameter {
                parameter: name.to_string(),
                value: 0.0,
                constraint: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a probability level strictly inside (0, 1)
    pub fn validate_open_unit(name: &str, value: f64) -> SdeResult<()> {
        if !(value > 0.0 && value < 1.0) {
            Err(SdeError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must lie strictly between 0 and 1".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
