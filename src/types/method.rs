//! Typed RPC operations and their authorization classes
//!
//! The gateway exposes two method families with distinct credentials: card
//! methods authenticate with the merchant token alone, receipt methods with
//! the `token:secretKey` pair. Modeling the methods as an enum makes that
//! classification exhaustive; a method cannot be added without stating its
//! auth class, and callers never pick headers themselves.

/// Authorization header class attached to a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthClass {
    /// `X-Auth: <merchantToken>`
    Card,
    /// `X-Auth: <merchantToken>:<secretKey>`
    Receipt,
}

/// RPC methods supported by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Register a card
    CardsCreate,
    /// Request an SMS verification code for a registered card
    CardsGetVerifyCode,
    /// Confirm a card with the SMS code
    CardsVerify,
    /// Create a receipt to be paid
    ReceiptsCreate,
    /// Pay a previously created receipt with a card token
    ReceiptsPay,
    /// Cancel a receipt
    ReceiptsCancel,
}

impl Method {
    /// Get the wire name of this method
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::CardsCreate => "cards.create",
            Method::CardsGetVerifyCode => "cards.get_verify_code",
            Method::CardsVerify => "cards.verify",
            Method::ReceiptsCreate => "receipts.create",
            Method::ReceiptsPay => "receipts.pay",
            Method::ReceiptsCancel => "receipts.cancel",
        }
    }

    /// Get the authorization class this method requires
    pub fn auth_class(&self) -> AuthClass {
        match self {
            Method::CardsCreate | Method::CardsGetVerifyCode | Method::CardsVerify => {
                AuthClass::Card
            }
            Method::ReceiptsCreate | Method::ReceiptsPay | Method::ReceiptsCancel => {
                AuthClass::Receipt
            }
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_family_auth_class() {
        for method in [
            Method::CardsCreate,
            Method::CardsGetVerifyCode,
            Method::CardsVerify,
        ] {
            assert_eq!(method.auth_class(), AuthClass::Card);
        }
    }

    #[test]
    fn test_receipt_family_auth_class() {
        for method in [
            Method::ReceiptsCreate,
            Method::ReceiptsPay,
            Method::ReceiptsCancel,
        ] {
            assert_eq!(method.auth_class(), AuthClass::Receipt);
        }
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(Method::CardsCreate.as_str(), "cards.create");
        assert_eq!(Method::CardsGetVerifyCode.as_str(), "cards.get_verify_code");
        assert_eq!(Method::CardsVerify.as_str(), "cards.verify");
        assert_eq!(Method::ReceiptsCreate.as_str(), "receipts.create");
        assert_eq!(Method::ReceiptsPay.as_str(), "receipts.pay");
        assert_eq!(Method::ReceiptsCancel.as_str(), "receipts.cancel");
    }
}
