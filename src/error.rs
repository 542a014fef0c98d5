// src/error.rs
use thiserror::Error;

/// Error types for the parameter, panel and scan layers.
///
/// The closed-form pricer and Greeks calculator never return these: invalid
/// numeric input there propagates as NaN or infinity.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BsmError {
    /// Invalid parameter values
    #[error("Invalid parameter '{parameter}' = {value}: {constraint}")]
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },

    /// Option kind string that is neither call nor put
    #[error("Unknown option kind '{input}': expected 'call' or 'put'")]
    UnknownOptionKind { input: String },
}

/// Result type alias for bsm-greeks operations
pub type BsmResult<T> = Result<T, BsmError>;

/// Validation utilities
pub mod validation {
    use super::{BsmError, BsmResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> BsmResult<()> {
        // NaN fails the comparison, so reject it explicitly
        if value.is_nan() || value <= 0.0 {
            Err(BsmError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> BsmResult<()> {
        if value.is_nan() || value < 0.0 {
            Err(BsmError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is within a closed range
    pub fn validate_range(name: &str, value: f64, min: f64, max: f64) -> BsmResult<()> {
        if value.is_nan() || value < min || value > max {
            Err(BsmError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: format!("must be in range [{}, {}]", min, max),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> BsmResult<()> {
        if !value.is_finite() {
            Err(BsmError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
