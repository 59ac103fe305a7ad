//! Workflow composition over the client
//!
//! [`PaymeService`] bundles the two-step receipt flow into a single
//! transaction primitive: create the receipt, then pay it with the card
//! token. A gateway error from the create step is returned verbatim and
//! the pay step never runs, so a refused transaction has at most one side
//! effect on the remote side.

use rust_decimal::Decimal;

use crate::client::PaymeClient;
use crate::types::GatewayResponse;
use crate::{PaymeError, Result};


/// Transaction-level operations composed from client calls
#[derive(Debug, Clone)]
pub struct PaymeService {
    client: PaymeClient,
}

impl PaymeService {
    /// Create a service over an existing client
    pub fn new(client: PaymeClient) -> Self {
        Self { client }
    }

    /// Get the underlying client
    pub fn client(&self) -> &PaymeClient {
        &self.client
    }

    /// Create a receipt and pay it with a verified card token
    ///
    /// Short-circuits on a gateway error from the create step: the error
    /// response is returned as-is and nothing is paid. On success the
    /// receipt id is taken from `result.receipt._id` and the pay response
    /// is returned verbatim.
    pub async fn create_and_pay_transaction(
        &self,
        token: &str,
        order_id: &str,
        amount: Decimal,
        order_type: Option<&str>,
    ) -> Result<GatewayResponse> {
        let created = self
            .client
            .create_receipt(order_id, amount, order_type)
            .await?;

        let result = match &created {
            GatewayResponse::Error(error) => {
                tracing::warn!(code = error.code, %order_id, "receipt refused, skipping pay");
                return Ok(created);
            }
            GatewayResponse::Success(result) => result,
        };

        let receipt_id = result["receipt"]["_id"].as_str().ok_or_else(|| {
            tracing::error!(%order_id, "create response carries no receipt id");
            PaymeError::MalformedResponse
        })?;

        self.client.pay_receipt(receipt_id, token).await
    }

    /// Build a hosted-checkout link for the order
    pub fn create_payment_link(
        &self,
        amount: Decimal,
        order_id: &str,
        return_url: &str,
        order_type: Option<&str>,
    ) -> String {
        self.client
            .create_initialization_link(amount, order_id, return_url, order_type)
    }
}
