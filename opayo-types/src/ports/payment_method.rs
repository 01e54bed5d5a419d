//! Payment method port.
//!
//! Any payable instrument - a card, a stored token, a wallet - implements
//! this trait. Request messages only ever see the trait, so new instrument
//! kinds plug in without changes to the existing ones.

use serde_json::Value;

/// Port trait for payable instruments.
pub trait PaymentMethod {
    /// The body fragment this instrument contributes to a charge request.
    /// Merged into the outbound request body by the message layer.
    fn pay_data(&self) -> Value;
}
