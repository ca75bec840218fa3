//! Error types for engine operations
//!
//! Every failure is an argument-validation failure raised at the call
//! boundary, before any sample is drawn. Generator state is never
//! touched by a call that returns an error.

use thiserror::Error;

/// Errors returned by [`RandomEngine`](crate::RandomEngine) operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RandomError {
    /// Minimum exceeds (or, for exclusive bounds, meets) the maximum
    #[error(
        "Invalid range: {parameter} ({min}) must be {} max ({max})",
        relation(.inclusive)
    )]
    InvalidRange {
        parameter: &'static str,
        min: f64,
        max: f64,
        inclusive: bool,
    },

    /// Buffer, slice or collection has no elements
    #[error("Parameter '{parameter}' must not be empty")]
    EmptyCollection { parameter: &'static str },

    /// Requested sequence length is below 1
    #[error("Parameter '{parameter}' must be at least 1, got {count}")]
    InvalidCount { parameter: &'static str, count: usize },

    /// Odds were requested with a zero denominator
    #[error("Division by zero: odds of {numerator} in 0")]
    DivisionByZero { numerator: i32 },

    /// Every candidate of a weighted choice has weight <= 0
    #[error("Parameter '{parameter}' has no value with a positive weight")]
    NoSelectableValues { parameter: &'static str },

    /// Snapshot failed validation
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

fn relation(inclusive: &bool) -> &'static str {
    if *inclusive {
        "less than or equal to"
    } else {
        "less than"
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, RandomError>;

impl RandomError {
    /// Exclusive range failure for `[min, max)`
    pub(crate) fn exclusive_range(min: impl Into<f64>, max: impl Into<f64>) -> Self {
        RandomError::InvalidRange {
            parameter: "min",
            min: min.into(),
            max: max.into(),
            inclusive: false,
        }
    }

    /// Inclusive range failure for `[min, max]`
    pub(crate) fn inclusive_range(min: impl Into<f64>, max: impl Into<f64>) -> Self {
        RandomError::InvalidRange {
            parameter: "min",
            min: min.into(),
            max: max.into(),
            inclusive: true,
        }
    }
}
