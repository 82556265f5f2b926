//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront domain operations.
///
/// The storefront's state transitions are total: removing an absent cart
/// line or toggling the wishlist never fails. The only fallible operations
/// are parses of enumerated wire values coming from the view layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Category slug not in the fixed set.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Payment method value not in the enumerated set.
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    /// Delivery time value not in the enumerated set.
    #[error("Unknown delivery time: {0}")]
    UnknownDeliveryTime(String),
}
