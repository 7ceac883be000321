//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment and gating errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Checkout request failed on the wire or returned an unreadable body
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Session endpoint answered without a usable redirect URL
    #[error("checkout session response had no redirect URL")]
    MissingRedirectUrl,

    /// Durable flag storage failed
    #[error("storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl PaymentError {
    /// User-facing copy for the blocking alert.
    pub fn user_message(&self) -> &str {
        match self {
            PaymentError::Network(_) | PaymentError::MissingRedirectUrl => {
                "Failed to start checkout. Please try again."
            }
            PaymentError::Storage(_) => "Could not read saved access.",
            PaymentError::Config(_) => "Checkout is not configured.",
        }
    }
}
