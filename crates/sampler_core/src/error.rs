//! Sampling error types.
//!
//! This module provides structured error handling for the range-bounded
//! exponential sampler and for sampler configuration loading.

use thiserror::Error;

/// Sampling operation errors.
///
/// Provides structured error handling for invalid sampler parameters and
/// for the rejection loop of the range-bounded exponential sampler.
///
/// # Variants
///
/// - `InvalidLambda`: Non-positive or non-finite rate parameter
/// - `InvalidRange`: Lower bound not strictly below the upper bound
/// - `NonFiniteBound`: NaN or infinite range bound
/// - `RejectionLimitExceeded`: Resampling cap reached without an accepted draw
///
/// # Examples
///
/// ```
/// use sampler_core::SamplingError;
///
/// let err = SamplingError::InvalidLambda { lambda: -1.0 };
/// assert!(format!("{}", err).contains("-1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplingError {
    /// Rate parameter must be finite and strictly positive.
    #[error("Invalid lambda: {lambda} (must be finite and > 0)")]
    InvalidLambda {
        /// The invalid rate value
        lambda: f64,
    },

    /// Range is empty or inverted.
    #[error("Invalid range: min {min} must be < max {max}")]
    InvalidRange {
        /// Lower bound supplied
        min: f64,
        /// Upper bound supplied
        max: f64,
    },

    /// Range bound is NaN or infinite.
    #[error("Non-finite range bound: [{min}, {max})")]
    NonFiniteBound {
        /// Lower bound supplied
        min: f64,
        /// Upper bound supplied
        max: f64,
    },

    /// No draw fell inside the range within the configured attempts.
    #[error("Rejection limit exceeded: no accepted draw after {attempts} attempts")]
    RejectionLimitExceeded {
        /// Number of draws made before giving up
        attempts: usize,
    },
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The rejection cap must allow at least one draw.
    #[error("Invalid max_rejection_attempts: {0}. Must be at least 1")]
    InvalidMaxAttempts(usize),

    /// The configuration file could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Result type for sampling operations.
pub type Result<T> = std::result::Result<T, SamplingError>;
