//! Transaction request message: charge a payment instrument.

use serde_json::{json, Value};

use opayo_types::{Amount, PaymentMethod};

use crate::auth::AuthContext;
use crate::message::Request;

/// A Payment transaction against the `transactions` resource.
///
/// Built per outbound call. The instrument being charged is only seen
/// through the [`PaymentMethod`] trait, so a card token, a wallet or any
/// future instrument all plug in here unchanged.
pub struct TransactionRequest<'a> {
    auth: &'a dyn AuthContext,
    vendor_tx_code: String,
    amount: Amount,
    description: String,
    payment_method: &'a dyn PaymentMethod,
}

impl<'a> TransactionRequest<'a> {
    pub fn new(
        auth: &'a dyn AuthContext,
        vendor_tx_code: impl Into<String>,
        amount: Amount,
        description: impl Into<String>,
        payment_method: &'a dyn PaymentMethod,
    ) -> Self {
        Self {
            auth,
            vendor_tx_code: vendor_tx_code.into(),
            amount,
            description: description.into(),
            payment_method,
        }
    }

    /// The outbound request body, with the instrument's pay-data fragment
    /// merged in under `paymentMethod`.
    pub fn body(&self) -> Value {
        tracing::debug!(
            vendor_tx_code = %self.vendor_tx_code,
            amount = %self.amount,
            "assembling transaction request body"
        );

        json!({
            "transactionType": "Payment",
            "paymentMethod": self.payment_method.pay_data(),
            "vendorTxCode": self.vendor_tx_code,
            "amount": self.amount.minor_units(),
            "currency": self.amount.currency().code(),
            "description": self.description,
        })
    }
}

impl Request for TransactionRequest<'_> {
    fn auth(&self) -> &dyn AuthContext {
        self.auth
    }

    fn resource_path(&self) -> &'static [&'static str] {
        &["transactions"]
    }
}
