//! Core types for the gateway protocol
//!
//! This module defines the data structures shared across the client:
//! typed RPC methods with their authorization classes, the decoded
//! response union, the error-code catalog, and the immutable gateway
//! configuration.
//!
//! # Architecture
//!
//! - [`method`] - RPC method enumeration and auth-class tags
//! - [`response`] - Tagged response union decoded at the transport boundary
//! - [`codes`] - Numeric error-code catalog
//! - [`config`] - Immutable client configuration
//! - [`constants`] - Endpoints and pipeline constants
//!
//! # Examples
//!
//! ## Resolving a gateway error
//!
//! ```
//! use payme_client::types::{ErrorKind, GatewayError};
//!
//! let error = GatewayError {
//!     code: -31001,
//!     message: "Invalid amount".to_string(),
//! };
//! assert_eq!(error.kind(), ErrorKind::InvalidAmount);
//! ```
//!
//! ## Building a configuration
//!
//! ```
//! use payme_client::types::GatewayConfig;
//!
//! # fn example() -> payme_client::Result<()> {
//! let config = GatewayConfig::new("merchant-token", "secret-key", "order_id")
//!     .with_production(false);
//! config.validate()?;
//! # Ok(())
//! # }
//! ```

pub mod codes;
pub mod config;
pub mod constants;
pub mod method;
pub mod response;

// Re-export commonly used types
pub use codes::ErrorKind;
pub use config::GatewayConfig;
pub use constants::{DEFAULT_TIMEOUT, MAX_ATTEMPTS, RETRY_DELAY};
pub use method::{AuthClass, Method};
pub use response::{GatewayError, GatewayResponse};
