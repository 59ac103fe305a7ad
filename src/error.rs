//! Error handling for the gateway client
//!
//! Only transport-level failures are errors here. Business failures the
//! gateway reports (`error` in the response body) are ordinary values;
//! see [`crate::types::GatewayResponse`].

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, PaymeError>;

/// Errors raised by the client
#[derive(Debug, Error)]
pub enum PaymeError {
    /// Invalid or missing configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection could not be established within the attempt cap
    #[error("Connection failed after {attempts} attempts: {source}")]
    RetriesExhausted {
        /// Send attempts performed, including the first
        attempts: u32,
        /// The connection error from the final attempt
        #[source]
        source: reqwest::Error,
    },

    /// Non-retryable HTTP failure (timeout, TLS, undecodable body)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON (de)serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response body carried neither `result` nor `error`, or a success
    /// result was missing a required field
    #[error("Malformed gateway response")]
    MalformedResponse,
}

impl PaymeError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        PaymeError::Config(message.into())
    }

    /// Whether this failure exhausted the connection attempt cap
    pub fn is_retries_exhausted(&self) -> bool {
        matches!(self, PaymeError::RetriesExhausted { .. })
    }
}
