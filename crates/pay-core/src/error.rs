//! # Payment Error Types
//!
//! Typed error handling for the pay-bridge backend.
//! All payment operations return `Result<T, PaymentError>`.
//!
//! The `Display` output of each variant is exactly what the HTTP layer
//! sends back in the `error` field, so callback messages are fixed strings.

use thiserror::Error;

/// Core error type for all payment operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Payment provider API error, message passed through verbatim
    #[error("{message}")]
    ProviderError { provider: String, message: String },

    /// Network/HTTP error communicating with provider
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Callback body could not be read
    #[error("Unable to read request body")]
    BodyUnreadable,

    /// Callback body is not valid form-encoded data
    #[error("Failed to parse query parameters")]
    CallbackParse,

    /// A required callback field is absent or empty
    #[error("Missing {field} parameter")]
    MissingParameter { field: &'static str },

    /// Callback signature does not match the recomputed HMAC
    #[error("failed to verify")]
    SignatureMismatch,
}

impl PaymentError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::Configuration(_) => 500,
            PaymentError::InvalidRequest(_) => 400,
            // Upstream failures surface as plain 500s
            PaymentError::ProviderError { .. } => 500,
            PaymentError::NetworkError(_) => 500,
            PaymentError::Serialization(_) => 500,
            PaymentError::BodyUnreadable => 500,
            PaymentError::CallbackParse => 500,
            PaymentError::MissingParameter { .. } => 400,
            PaymentError::SignatureMismatch => 400,
        }
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;
