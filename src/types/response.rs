//! Gateway response model
//!
//! Responses are JSON-RPC shaped: `{"result": ...}` on success,
//! `{"error": {"code", "message"}}` on failure, never both. The body is
//! decoded into [`GatewayResponse`] once, at the transport boundary, so
//! callers branch on a tagged union instead of probing raw JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::codes::ErrorKind;

/// Structured error reported by the gateway
///
/// A gateway error is a business outcome, not a transport failure: it is
/// always returned as a value, never raised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayError {
    /// Numeric error code; resolve with [`GatewayError::kind`]
    pub code: i64,
    /// Human-readable message from the gateway
    pub message: String,
}

impl GatewayError {
    /// Resolve the code through the error catalog
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::from_code(self.code)
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (code {}): {}", self.kind(), self.code, self.message)
    }
}

/// Decoded gateway response
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayResponse {
    /// The `result` payload of a successful call
    Success(Value),
    /// A well-formed gateway error
    Error(GatewayError),
}

#[derive(Deserialize)]
struct RawResponse {
    result: Option<Value>,
    error: Option<GatewayError>,
}

impl GatewayResponse {
    /// Decode a response body
    ///
    /// A body carrying neither `result` nor `error` is malformed and fails
    /// hard; if a body carries both, the error is authoritative.
    pub fn from_value(body: Value) -> crate::Result<Self> {
        let raw: RawResponse = serde_json::from_value(body)?;
        match (raw.result, raw.error) {
            (_, Some(error)) => Ok(GatewayResponse::Error(error)),
            (Some(result), None) => Ok(GatewayResponse::Success(result)),
            (None, None) => Err(crate::PaymeError::MalformedResponse),
        }
    }

    /// Whether this is a success response
    pub fn is_success(&self) -> bool {
        matches!(self, GatewayResponse::Success(_))
    }

    /// Get the success payload, if any
    pub fn result(&self) -> Option<&Value> {
        match self {
            GatewayResponse::Success(result) => Some(result),
            GatewayResponse::Error(_) => None,
        }
    }

    /// Get the gateway error, if any
    pub fn error(&self) -> Option<&GatewayError> {
        match self {
            GatewayResponse::Success(_) => None,
            GatewayResponse::Error(error) => Some(error),
        }
    }

    /// Convert into a `Result`, consuming the response
    pub fn into_result(self) -> Result<Value, GatewayError> {
        match self {
            GatewayResponse::Success(result) => Ok(result),
            GatewayResponse::Error(error) => Err(error),
        }
    }
}
