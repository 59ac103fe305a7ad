//! Catalog of gateway error codes
//!
//! Maps the numeric codes the gateway returns in `error.code` to named
//! kinds with fixed descriptions. Lookup never fails: codes outside the
//! catalog resolve to [`ErrorKind::Unknown`].
//!
//! Two codes are ambiguous on the wire: `-31101` is used for both an
//! expired and a blocked card, and `-31300` for both a processing-center
//! outage and an unsupported card type. The response code alone cannot
//! distinguish them, so resolution is lossy: [`ErrorKind::from_code`]
//! returns the first kind declared for a code.

/// Named kinds for gateway error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Payment amount is outside the allowed range
    InvalidAmount,
    /// Operation is not permitted for this transaction
    TransactionNotPermitted,
    /// Receipt does not exist
    ReceiptNotFound,
    /// Order referenced by the account fields does not exist
    OrderNotFound,
    /// Card balance is too low
    InsufficientFunds,
    /// Card token does not match a registered card
    CardNotFound,
    /// Card has expired
    CardExpired,
    /// Card is blocked; shares a wire code with [`ErrorKind::CardExpired`]
    CardBlocked,
    /// Card is already attached to another account
    CardAlreadyAttached,
    /// SMS verification code is wrong
    VerifyCodeInvalid,
    /// SMS verification code has expired
    VerifyCodeExpired,
    /// Card processing center is unavailable
    ProcessingUnavailable,
    /// Card type is not accepted; shares a wire code with
    /// [`ErrorKind::ProcessingUnavailable`]
    CardTypeNotSupported,
    /// Credentials lack access to the requested method
    InsufficientPrivileges,
    /// Method name is not recognized by the gateway
    MethodNotFound,
    /// Gateway could not parse the request
    ParseError,
    /// Internal gateway error
    SystemError,
    /// Code not present in the catalog
    Unknown,
}

/// Wire codes in declaration order; first declaration wins on collisions
const CATALOG: &[(i64, ErrorKind)] = &[
    (-31001, ErrorKind::InvalidAmount),
    (-31007, ErrorKind::TransactionNotPermitted),
    (-31008, ErrorKind::ReceiptNotFound),
    (-31050, ErrorKind::OrderNotFound),
    (-31051, ErrorKind::InsufficientFunds),
    (-31100, ErrorKind::CardNotFound),
    (-31101, ErrorKind::CardExpired),
    (-31101, ErrorKind::CardBlocked),
    (-31151, ErrorKind::CardAlreadyAttached),
    (-31200, ErrorKind::VerifyCodeInvalid),
    (-31201, ErrorKind::VerifyCodeExpired),
    (-31300, ErrorKind::ProcessingUnavailable),
    (-31300, ErrorKind::CardTypeNotSupported),
    (-32504, ErrorKind::InsufficientPrivileges),
    (-32601, ErrorKind::MethodNotFound),
    (-32700, ErrorKind::ParseError),
    (-32400, ErrorKind::SystemError),
];

impl ErrorKind {
    /// Resolve a wire code to a kind; undeclared codes yield `Unknown`
    pub fn from_code(code: i64) -> Self {
        CATALOG
            .iter()
            .find(|(wire, _)| *wire == code)
            .map(|(_, kind)| *kind)
            .unwrap_or(ErrorKind::Unknown)
    }

    /// Get the wire code this kind is declared under
    pub fn code(&self) -> Option<i64> {
        CATALOG
            .iter()
            .find(|(_, kind)| kind == self)
            .map(|(wire, _)| *wire)
    }

    /// Get the fixed human-readable description of this kind
    pub fn description(&self) -> &'static str {
        match self {
            ErrorKind::InvalidAmount => "Invalid payment amount",
            ErrorKind::TransactionNotPermitted => "Transaction is not permitted",
            ErrorKind::ReceiptNotFound => "Receipt not found",
            ErrorKind::OrderNotFound => "Order not found",
            ErrorKind::InsufficientFunds => "Insufficient funds on the card",
            ErrorKind::CardNotFound => "Card not found",
            ErrorKind::CardExpired => "Card has expired",
            ErrorKind::CardBlocked => "Card is blocked",
            ErrorKind::CardAlreadyAttached => "Card is already attached to an account",
            ErrorKind::VerifyCodeInvalid => "Invalid verification code",
            ErrorKind::VerifyCodeExpired => "Verification code has expired",
            ErrorKind::ProcessingUnavailable => "Card processing center is unavailable",
            ErrorKind::CardTypeNotSupported => "Card type is not supported",
            ErrorKind::InsufficientPrivileges => "Insufficient privileges for this method",
            ErrorKind::MethodNotFound => "Unknown method",
            ErrorKind::ParseError => "Request could not be parsed",
            ErrorKind::SystemError => "Internal gateway error",
            ErrorKind::Unknown => "Unknown gateway error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_declared_code_resolves() {
        for (code, _) in CATALOG {
            let kind = ErrorKind::from_code(*code);
            assert_ne!(kind, ErrorKind::Unknown, "code {code} fell through");
            assert!(!kind.description().is_empty());
        }
    }

    #[test]
    fn test_undeclared_code_is_unknown() {
        assert_eq!(ErrorKind::from_code(-99999), ErrorKind::Unknown);
        assert_eq!(ErrorKind::from_code(0), ErrorKind::Unknown);
    }

    #[test]
    fn test_invalid_amount_code() {
        assert_eq!(ErrorKind::from_code(-31001), ErrorKind::InvalidAmount);
    }

    #[test]
    fn test_collisions_resolve_by_declaration_order() {
        // -31101 and -31300 each carry two kinds; the first declared wins.
        assert_eq!(ErrorKind::from_code(-31101), ErrorKind::CardExpired);
        assert_eq!(ErrorKind::from_code(-31300), ErrorKind::ProcessingUnavailable);
        // The losing kinds still report their wire code.
        assert_eq!(ErrorKind::CardBlocked.code(), Some(-31101));
        assert_eq!(ErrorKind::CardTypeNotSupported.code(), Some(-31300));
    }

    #[test]
    fn test_unknown_has_no_code() {
        assert_eq!(ErrorKind::Unknown.code(), None);
    }
}
