use std::time::Duration;

use thiserror::Error;

/// Failure reasons the bridge reports back in `{"status": "failed", "reason": ...}`.
pub const REASON_URL_NOT_FOUND: &str = "url_not_found";
pub const REASON_INSUFFICIENT_FUNDS: &str = "insufficient_funds";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// The wallet extension declined to sign. Never surfaced to the user.
    #[error("signature declined by the wallet")]
    UserDeclined,

    #[error("wallet extension unavailable: {0}")]
    WalletUnavailable(String),

    #[error("metadata URL could not be fetched")]
    UrlNotFound,

    #[error("insufficient funds to cover the deposit and fees")]
    InsufficientFunds,

    #[error("transaction rejected: {0}")]
    Rejected(String),

    #[error("transaction not confirmed within {0:?}")]
    Timeout(Duration),

    #[error("bridge request failed: {0}")]
    Http(String),
}

impl BridgeError {
    /// Map a failure reason from the bridge onto a typed error.
    pub fn from_reason(reason: &str) -> Self {
        match reason {
            REASON_URL_NOT_FOUND => Self::UrlNotFound,
            REASON_INSUFFICIENT_FUNDS => Self::InsufficientFunds,
            other => Self::Rejected(other.to_string()),
        }
    }

    /// Whether this is the silent wallet-cancel case.
    pub fn is_user_declined(&self) -> bool {
        matches!(self, Self::UserDeclined)
    }

    /// Title for the error modal.
    pub fn user_title(&self) -> &'static str {
        match self {
            Self::UrlNotFound => "The URL you entered cannot be found",
            Self::Timeout(_) => "Transaction is taking longer than expected",
            _ => "Something went wrong",
        }
    }

    /// Body for the error modal.
    pub fn user_message(&self) -> String {
        match self {
            Self::UserDeclined => String::new(),
            Self::WalletUnavailable(_) => {
                "Your wallet could not be reached. Reconnect it and try again.".into()
            }
            Self::UrlNotFound => {
                "The URL you entered cannot be found. Check the link and the hosted file.".into()
            }
            Self::InsufficientFunds => {
                "Your wallet does not hold enough ada for the deposit and fees.".into()
            }
            Self::Rejected(reason) => format!("The transaction was rejected: {reason}"),
            Self::Timeout(_) => {
                "The transaction was not confirmed in time. Check its status later.".into()
            }
            Self::Http(_) => "The transaction service is unavailable. Try again later.".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_reasons_are_typed() {
        assert_eq!(BridgeError::from_reason("url_not_found"), BridgeError::UrlNotFound);
        assert_eq!(
            BridgeError::from_reason("insufficient_funds"),
            BridgeError::InsufficientFunds
        );
        assert_eq!(
            BridgeError::from_reason("bad witness"),
            BridgeError::Rejected("bad witness".into())
        );
    }

    #[test]
    fn url_not_found_message() {
        assert_eq!(
            BridgeError::UrlNotFound.user_title(),
            "The URL you entered cannot be found"
        );
        assert!(BridgeError::UrlNotFound
            .user_message()
            .starts_with("The URL you entered cannot be found"));
    }
}
