//! Gateway configuration

use std::env;

use super::constants::{endpoints, DEFAULT_ORDER_TYPE_KEY};

/// Immutable configuration for the gateway client
///
/// Built once and passed to the constructors; nothing here changes after
/// initialization. The merchant token authenticates card methods on its
/// own and is combined with the secret key for receipt methods.
#[derive(Clone)]
pub struct GatewayConfig {
    /// Whether to talk to the production gateway instead of the sandbox
    pub production: bool,
    /// Merchant identifier issued by the gateway
    pub merchant_token: String,
    /// Merchant secret key, used only for receipt-family methods
    pub secret_key: String,
    /// Name of the account field carrying the order identifier
    pub account_key: String,
    /// Name of the account field carrying the order type
    pub order_type_key: String,
    /// Endpoint override for stub servers and self-hosted sandboxes
    pub api_url: Option<String>,
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("production", &self.production)
            .field("merchant_token", &self.merchant_token)
            .field("secret_key", &"<redacted>")
            .field("account_key", &self.account_key)
            .field("order_type_key", &self.order_type_key)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl GatewayConfig {
    /// Create a sandbox configuration
    ///
    /// `account_key` is the merchant-defined name of the account field the
    /// gateway matches orders on. The order-type key defaults to
    /// `"order_type"`.
    pub fn new(
        merchant_token: impl Into<String>,
        secret_key: impl Into<String>,
        account_key: impl Into<String>,
    ) -> Self {
        Self {
            production: false,
            merchant_token: merchant_token.into(),
            secret_key: secret_key.into(),
            account_key: account_key.into(),
            order_type_key: DEFAULT_ORDER_TYPE_KEY.to_string(),
            api_url: None,
        }
    }

    /// Read configuration from `PAYME_*` environment variables
    ///
    /// `PAYME_TOKEN`, `PAYME_SECRET_KEY` and `PAYME_ACCOUNT_KEY_1` are
    /// required; `PAYME_ENV=true` selects production and
    /// `PAYME_ACCOUNT_KEY_2` overrides the order-type key.
    pub fn from_env() -> crate::Result<Self> {
        let require = |name: &str| {
            env::var(name)
                .map_err(|_| crate::PaymeError::config(format!("{name} must be set")))
        };

        let mut config = Self::new(
            require("PAYME_TOKEN")?,
            require("PAYME_SECRET_KEY")?,
            require("PAYME_ACCOUNT_KEY_1")?,
        );
        config.production = env::var("PAYME_ENV")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(false);
        if let Ok(key) = env::var("PAYME_ACCOUNT_KEY_2") {
            config.order_type_key = key;
        }
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> crate::Result<()> {
        if self.merchant_token.is_empty() {
            return Err(crate::PaymeError::config("merchant token cannot be empty"));
        }
        if self.secret_key.is_empty() {
            return Err(crate::PaymeError::config("secret key cannot be empty"));
        }
        if self.account_key.is_empty() {
            return Err(crate::PaymeError::config("account key cannot be empty"));
        }
        if let Some(url) = &self.api_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(crate::PaymeError::config(
                    "API URL must start with http:// or https://",
                ));
            }
        }
        Ok(())
    }

    /// Select the production gateway
    pub fn with_production(mut self, production: bool) -> Self {
        self.production = production;
        self
    }

    /// Set the order-type account key
    pub fn with_order_type_key(mut self, key: impl Into<String>) -> Self {
        self.order_type_key = key.into();
        self
    }

    /// Override the API endpoint
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// The API endpoint requests are sent to
    pub fn api_url(&self) -> &str {
        match &self.api_url {
            Some(url) => url,
            None if self.production => endpoints::PRODUCTION_API,
            None => endpoints::SANDBOX_API,
        }
    }

    /// The base URL checkout links are built on
    pub fn checkout_url(&self) -> &'static str {
        if self.production {
            endpoints::PRODUCTION_CHECKOUT
        } else {
            endpoints::SANDBOX_CHECKOUT
        }
    }
}
