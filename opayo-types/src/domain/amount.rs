//! Type-safe monetary value with embedded currency.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::currency::Currency;
use crate::error::DomainError;

/// A monetary amount paired with its currency.
///
/// The value is stored in the smallest unit of the currency (pence, cents)
/// to avoid floating-point precision issues, which is also the unit the
/// gateway expects on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    minor: i64,
    currency: Currency,
}

impl Amount {
    /// Creates a new Amount value.
    pub fn new(minor: i64, currency: Currency) -> Result<Self, DomainError> {
        if minor < 0 {
            return Err(DomainError::NegativeAmount);
        }
        Ok(Self { minor, currency })
    }

    /// Creates a zero-value Amount for the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self { minor: 0, currency }
    }

    /// Returns the value in the smallest currency unit.
    pub fn minor_units(&self) -> i64 {
        self.minor
    }

    /// Returns the currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Checked addition - returns an error if the currencies don't match.
    pub fn checked_add(&self, other: Amount) -> Result<Amount, DomainError> {
        if self.currency != other.currency {
            return Err(DomainError::CurrencyMismatch {
                expected: self.currency,
                got: other.currency,
            });
        }
        Ok(Amount {
            minor: self.minor.saturating_add(other.minor),
            currency: self.currency,
        })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.currency.digits() as u32;
        let divisor = 10_i64.pow(digits);
        let major = self.minor / divisor;
        let minor = self.minor % divisor;
        write!(
            f,
            "{}{}.{:0width$}",
            self.currency.symbol(),
            major,
            minor,
            width = digits as usize
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_creation() {
        let amount = Amount::new(1000, Currency::Gbp).unwrap();
        assert_eq!(amount.minor_units(), 1000);
        assert_eq!(amount.currency(), Currency::Gbp);
    }

    #[test]
    fn test_negative_amount_fails() {
        let result = Amount::new(-100, Currency::Gbp);
        assert!(matches!(result, Err(DomainError::NegativeAmount)));
    }

    #[test]
    fn test_amount_addition() {
        let a = Amount::new(100, Currency::Eur).unwrap();
        let b = Amount::new(50, Currency::Eur).unwrap();
        let sum = a.checked_add(b).unwrap();
        assert_eq!(sum.minor_units(), 150);
    }

    #[test]
    fn test_currency_mismatch() {
        let gbp = Amount::new(100, Currency::Gbp).unwrap();
        let eur = Amount::new(50, Currency::Eur).unwrap();
        let result = gbp.checked_add(eur);
        assert!(matches!(result, Err(DomainError::CurrencyMismatch { .. })));
    }

    #[test]
    fn test_amount_display() {
        let amount = Amount::new(1050, Currency::Gbp).unwrap();
        assert_eq!(format!("{}", amount), "£10.50");
    }

    #[test]
    fn test_zero() {
        let amount = Amount::zero(Currency::Zar);
        assert_eq!(amount.minor_units(), 0);
        assert_eq!(format!("{}", amount), "R0.00");
    }
}
