//! Common constants for endpoints and the request pipeline

use std::time::Duration;

/// Gateway endpoints, production and sandbox
pub mod endpoints {
    /// Production API endpoint
    pub const PRODUCTION_API: &str = "https://checkout.paycom.uz/api";
    /// Sandbox API endpoint
    pub const SANDBOX_API: &str = "https://checkout.test.payme.uz/api";
    /// Production checkout-link base
    pub const PRODUCTION_CHECKOUT: &str = "https://checkout.paycom.uz";
    /// Sandbox checkout-link base
    pub const SANDBOX_CHECKOUT: &str = "https://checkout.test.payme.uz";
}

/// Total-request timeout applied to the HTTP client at construction
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Hard cap on send attempts when the connection cannot be established
pub const MAX_ATTEMPTS: u32 = 10;

/// Fixed delay between retry attempts
pub const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Account field name used when no explicit order-type key is configured
pub const DEFAULT_ORDER_TYPE_KEY: &str = "order_type";
