//! # Billing Error Types
//!
//! Typed error handling for the billing gateway.
//! All processor-facing operations return `Result<T, BillingError>`.

use thiserror::Error;

/// Core error type for all billing operations
#[derive(Debug, Error)]
pub enum BillingError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Caller omitted a required field; the message is a fixed string
    /// and never echoes caller-supplied input
    #[error("{0}")]
    MissingParameter(&'static str),

    /// The external processor rejected an operation; the message is the
    /// processor's own, relayed verbatim
    #[error("{message}")]
    Provider { message: String },

    /// Network/HTTP failure reaching the processor
    #[error("Network error: {0}")]
    Network(String),

    /// Joining the concurrent plan lookups failed
    #[error("Aggregation failed: {0}")]
    Aggregation(String),

    /// Processor response could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BillingError {
    /// Returns the HTTP status code appropriate for this error.
    ///
    /// Processor rejections and network failures map to 400: any failed
    /// step in a processor-backed flow terminates the request with the
    /// failure surfaced to the caller. Internal failures map to 500.
    pub fn status_code(&self) -> u16 {
        match self {
            BillingError::Configuration(_) => 500,
            BillingError::MissingParameter(_) => 400,
            BillingError::Provider { .. } => 400,
            BillingError::Network(_) => 400,
            BillingError::Aggregation(_) => 500,
            BillingError::Serialization(_) => 500,
        }
    }

    /// Message safe to return to the caller. Internal failures collapse to
    /// a generic string; 4xx messages pass through.
    pub fn public_message(&self) -> String {
        match self {
            BillingError::Aggregation(_) => "Failed to load products".to_string(),
            BillingError::Configuration(_) => "Internal server error".to_string(),
            BillingError::Serialization(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for billing operations
pub type BillingResult<T> = Result<T, BillingError>;
