//! # Payme Client
//!
//! An async Rust client for the Payme (Paycom) merchant API.
//!
//! ## Features
//!
//! - 💳 **Card registration and verification**: `cards.create`,
//!   `cards.get_verify_code`, `cards.verify`
//! - 🧾 **Receipt lifecycle**: `receipts.create`, `receipts.pay`,
//!   `receipts.cancel`, plus a one-call create-and-pay transaction
//! - 🔗 **Checkout links**: offline builder for hosted-checkout
//!   initialization links
//! - 🔁 **Resilient transport**: bounded retries on connection failures,
//!   fixed backoff, one shared connection pool
//! - 🔒 **Type safety**: enumerated methods with statically attached
//!   authorization classes; gateway errors decoded into a tagged union
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use payme_client::{GatewayConfig, PaymeClient, PaymeService};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> payme_client::Result<()> {
//!     let config = GatewayConfig::new("merchant-token", "secret-key", "order_id");
//!     let service = PaymeService::new(PaymeClient::new(config)?);
//!
//!     // 100 000 tiyin = 1 000 so'm
//!     let response = service
//!         .create_and_pay_transaction(
//!             "card-token",
//!             "order-42",
//!             Decimal::from(100_000),
//!             Some("subscription"),
//!         )
//!         .await?;
//!
//!     match response.into_result() {
//!         Ok(result) => println!("paid: {}", result["receipt"]["_id"]),
//!         Err(error) => println!("refused: {error}"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`types`**: methods and auth classes, response union, error-code
//!   catalog, configuration
//! - **`transport`**: the retrying request pipeline
//! - **`client`**: card/receipt operations and the checkout-link builder
//! - **`service`**: create-and-pay workflow composition
//! - **`error`**: transport-level error handling
//!
//! Gateway-reported business failures are values (`GatewayResponse::Error`),
//! never `Err`; only transport-level failures are errors. Connection
//! failures retry up to 10 attempts on a fixed 1 s delay; nothing else
//! retries.

pub mod client;
pub mod error;
pub mod service;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use client::PaymeClient;
pub use error::{PaymeError, Result};
pub use service::PaymeService;
pub use transport::Transport;
pub use types::*;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
