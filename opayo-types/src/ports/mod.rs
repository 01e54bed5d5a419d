//! Port traits (contracts for payment instruments).
//!
//! The message layer depends on these traits, not on concrete instruments.

mod payment_method;

pub use payment_method::PaymentMethod;
