//! Retrying request pipeline
//!
//! One [`Transport`] owns one connection pool and one endpoint, chosen at
//! construction from the configuration's mode flag. Every request is a
//! JSON POST of `{"method", "params"}` with exactly one `X-Auth` header,
//! selected by the method's authorization class.
//!
//! Connection-level failures are retried on a fixed delay up to
//! [`MAX_ATTEMPTS`] total attempts. Nothing else is a retry condition:
//! a non-2xx status with a decodable JSON body is decoded and returned
//! like any other response, so gateway-reported errors stay values.
//!
//! # Examples
//!
//! ```no_run
//! use payme_client::transport::Transport;
//! use payme_client::types::{GatewayConfig, Method};
//! use serde_json::json;
//!
//! # async fn example() -> payme_client::Result<()> {
//! let config = GatewayConfig::new("merchant-token", "secret-key", "order_id");
//! let transport = Transport::new(&config)?;
//!
//! let response = transport
//!     .send(Method::ReceiptsCancel, json!({"id": "receipt-id"}))
//!     .await?;
//! if let Some(error) = response.error() {
//!     println!("gateway refused: {error}");
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use url::Url;

use crate::types::constants::{DEFAULT_TIMEOUT, MAX_ATTEMPTS, RETRY_DELAY};
use crate::types::{AuthClass, GatewayConfig, GatewayResponse, Method};
use crate::{PaymeError, Result};

#[cfg(test)]
mod tests;

/// Header carrying the merchant credential
pub const AUTH_HEADER: &str = "X-Auth";

/// Gateway request pipeline
///
/// Cheap to clone; clones share the connection pool. The pool is released
/// when the last clone is dropped.
#[derive(Clone)]
pub struct Transport {
    /// Shared connection pool with the total-request timeout applied
    client: Client,
    /// Single endpoint all requests go to
    endpoint: Url,
    /// `X-Auth` value for card-family methods
    card_auth: String,
    /// `X-Auth` value for receipt-family methods
    receipt_auth: String,
    /// Delay between connection retries
    retry_delay: Duration,
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("endpoint", &self.endpoint.as_str())
            .field("card_auth", &self.card_auth)
            .field("receipt_auth", &"<redacted>")
            .finish()
    }
}

impl Transport {
    /// Create a transport for the configured endpoint
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        config.validate()?;

        let endpoint = Url::parse(config.api_url())
            .map_err(|e| PaymeError::config(format!("Invalid API URL: {e}")))?;

        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| PaymeError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint,
            card_auth: config.merchant_token.clone(),
            receipt_auth: format!("{}:{}", config.merchant_token, config.secret_key),
            retry_delay: RETRY_DELAY,
        })
    }

    /// Get the endpoint this transport sends to
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Send one RPC call and decode the response
    ///
    /// Retries connection failures up to [`MAX_ATTEMPTS`] attempts total,
    /// then fails with [`PaymeError::RetriesExhausted`]. Timeouts and
    /// undecodable bodies propagate immediately.
    pub async fn send(&self, method: Method, params: Value) -> Result<GatewayResponse> {
        let body = json!({
            "method": method.as_str(),
            "params": params,
        });
        let auth = match method.auth_class() {
            AuthClass::Card => &self.card_auth,
            AuthClass::Receipt => &self.receipt_auth,
        };

        let mut attempt = 0;
        loop {
            attempt += 1;
            let sent = self
                .client
                .post(self.endpoint.clone())
                .header(AUTH_HEADER, auth.as_str())
                .json(&body)
                .send()
                .await;

            match sent {
                Ok(response) => {
                    let status = response.status();
                    let value: Value = match response.json().await {
                        Ok(value) => value,
                        Err(err) => {
                            tracing::error!(%method, error = %err, "undecodable response body");
                            return Err(err.into());
                        }
                    };
                    if !status.is_success() {
                        tracing::warn!(
                            %method,
                            status = status.as_u16(),
                            body = %value,
                            "gateway returned non-success status"
                        );
                    }
                    tracing::debug!(%method, response = %value, "gateway response");
                    return GatewayResponse::from_value(value);
                }
                Err(err) if err.is_connect() => {
                    if attempt >= MAX_ATTEMPTS {
                        tracing::error!(%method, attempts = attempt, "connection retries exhausted");
                        return Err(PaymeError::RetriesExhausted {
                            attempts: attempt,
                            source: err,
                        });
                    }
                    tracing::warn!(
                        %method,
                        attempt,
                        max_attempts = MAX_ATTEMPTS,
                        error = %err,
                        "connection error, retrying"
                    );
                    tokio::time::sleep(self.retry_delay).await;
                }
                Err(err) => {
                    tracing::error!(%method, error = %err, "request failed");
                    return Err(err.into());
                }
            }
        }
    }
}
