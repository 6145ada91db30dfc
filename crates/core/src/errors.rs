//! Core error types for the deposit allocator.
//!
//! The allocation algorithm itself is infallible. These errors cover the
//! edges around it: parsing plan types, opt-in validation of plan weights,
//! loading input documents and converting amounts for display.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the deposit allocator.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to (de)serialize data: {0}")]
    Serialization(String),

    #[error("I/O operation failed: {0}")]
    Io(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for plan configuration and amounts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Unknown deposit plan type '{0}', expected 'one_time' or 'monthly'")]
    InvalidPlanType(String),

    #[error("Invalid weight {weight} for portfolio '{portfolio}'")]
    InvalidWeight { portfolio: String, weight: f64 },

    #[error("Portfolio name must not be empty")]
    EmptyPortfolioName,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
