//! High-level gateway operations
//!
//! [`PaymeClient`] translates the card and receipt operations into
//! transport calls with the right payload shape. The authorization class
//! is carried by the method itself, so nothing here touches headers.
//!
//! Gateway-reported failures are not errors: every operation returns the
//! decoded [`GatewayResponse`] and the caller branches on it. Only
//! transport failures surface as `Err`.
//!
//! # Examples
//!
//! ```no_run
//! use payme_client::{GatewayConfig, PaymeClient};
//! use rust_decimal::Decimal;
//!
//! # async fn example() -> payme_client::Result<()> {
//! let config = GatewayConfig::new("merchant-token", "secret-key", "order_id");
//! let client = PaymeClient::new(config)?;
//!
//! let response = client
//!     .create_receipt("order-42", Decimal::from(100_000), Some("subscription"))
//!     .await?;
//! match response.into_result() {
//!     Ok(result) => println!("receipt: {}", result["receipt"]["_id"]),
//!     Err(error) => println!("refused: {error}"),
//! }
//! # Ok(())
//! # }
//! ```

use base64::{engine::general_purpose, Engine as _};
use rust_decimal::Decimal;
use serde_json::{json, Map, Value};

use crate::transport::Transport;
use crate::types::{GatewayConfig, GatewayResponse, Method};
use crate::Result;


/// Client for the card and receipt method families
#[derive(Debug, Clone)]
pub struct PaymeClient {
    transport: Transport,
    config: GatewayConfig,
}

impl PaymeClient {
    /// Create a client from an explicit configuration
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let transport = Transport::new(&config)?;
        Ok(Self { transport, config })
    }

    /// Create a client from `PAYME_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(GatewayConfig::from_env()?)
    }

    /// Get the configuration this client was built with
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Register a card
    ///
    /// `expire` is `MMYY`. With `save` the gateway keeps the card for
    /// reuse; the returned token must still be verified before payments.
    pub async fn create_card(
        &self,
        number: &str,
        expire: &str,
        save: bool,
    ) -> Result<GatewayResponse> {
        let params = json!({
            "card": {"number": number, "expire": expire},
            "save": save,
        });
        self.transport.send(Method::CardsCreate, params).await
    }

    /// Request an SMS verification code for a registered card
    ///
    /// On success the `result` object is augmented with the input `token`,
    /// so the caller can feed the response straight into
    /// [`verify_card`](Self::verify_card).
    pub async fn get_card_verify_code(&self, token: &str) -> Result<GatewayResponse> {
        let response = self
            .transport
            .send(Method::CardsGetVerifyCode, json!({"token": token}))
            .await?;

        Ok(match response {
            GatewayResponse::Success(mut result) => {
                if let Some(fields) = result.as_object_mut() {
                    fields.insert("token".to_string(), Value::String(token.to_string()));
                }
                GatewayResponse::Success(result)
            }
            error => error,
        })
    }

    /// Confirm a card with the SMS code sent to its owner
    pub async fn verify_card(&self, code: &str, token: &str) -> Result<GatewayResponse> {
        let params = json!({"token": token, "code": code});
        self.transport.send(Method::CardsVerify, params).await
    }

    /// Create a receipt for an order
    ///
    /// `amount` is in minor units (tiyin). The account object carries the
    /// order id and order type under the configured key names; an absent
    /// order type is sent as `null`.
    pub async fn create_receipt(
        &self,
        order_id: &str,
        amount: Decimal,
        order_type: Option<&str>,
    ) -> Result<GatewayResponse> {
        let mut account = Map::new();
        account.insert(self.config.account_key.clone(), json!(order_id));
        account.insert(self.config.order_type_key.clone(), json!(order_type));

        let params = json!({
            "amount": amount,
            "account": account,
        });
        self.transport.send(Method::ReceiptsCreate, params).await
    }

    /// Pay a receipt with a verified card token
    pub async fn pay_receipt(&self, receipt_id: &str, token: &str) -> Result<GatewayResponse> {
        let params = json!({"id": receipt_id, "token": token});
        self.transport.send(Method::ReceiptsPay, params).await
    }

    /// Cancel a receipt
    pub async fn cancel_receipt(&self, receipt_id: &str) -> Result<GatewayResponse> {
        let params = json!({"id": receipt_id});
        self.transport.send(Method::ReceiptsCancel, params).await
    }

    /// Build a hosted-checkout initialization link
    ///
    /// Pure function of the inputs and configuration; nothing is sent.
    /// The payload is
    /// `m=<merchant>;ac.<key>=<order>;a=<amount>;c=<returnUrl>[;ac.<typeKey>=<orderType>]`,
    /// base64-encoded and appended to the mode-selected checkout base.
    pub fn create_initialization_link(
        &self,
        amount: Decimal,
        order_id: &str,
        return_url: &str,
        order_type: Option<&str>,
    ) -> String {
        let mut payload = format!(
            "m={};ac.{}={};a={};c={}",
            self.config.merchant_token, self.config.account_key, order_id, amount, return_url
        );
        if let Some(order_type) = order_type {
            payload.push_str(&format!(";ac.{}={}", self.config.order_type_key, order_type));
        }

        let encoded = general_purpose::STANDARD.encode(payload);
        let link = format!("{}/{}", self.config.checkout_url(), encoded);
        tracing::debug!(%link, "generated initialization link");
        link
    }
}
