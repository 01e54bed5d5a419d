//! Currencies the gateway accepts, with precision and display metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A currency from the gateway's supported whitelist.
///
/// Amounts must never be built against a currency the gateway does not
/// accept, so construction from a code fails fast rather than defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    // The original three currencies.
    Gbp,
    Eur,
    Usd,
    // Support is expanding for further currencies.
    Cad,
    Aud,
    Nzd,
    Zar,
}

impl Currency {
    /// Every currency the gateway accepts.
    pub fn all() -> &'static [Currency] {
        &[
            Currency::Gbp,
            Currency::Eur,
            Currency::Usd,
            Currency::Cad,
            Currency::Aud,
            Currency::Nzd,
            Currency::Zar,
        ]
    }

    /// Looks up a currency by its ISO 4217 code.
    ///
    /// The whitelist is uppercase; the match is exact, so `"gbp"` is
    /// rejected the same way an unknown code is.
    pub fn from_code(code: &str) -> Result<Self, DomainError> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.code() == code)
            .ok_or_else(|| DomainError::UnsupportedCurrency(code.to_string()))
    }

    /// Returns the ISO 4217 three-character code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Gbp => "GBP",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
            Currency::Nzd => "NZD",
            Currency::Zar => "ZAR",
        }
    }

    /// Returns the number of digits in the decimal subunit.
    pub fn digits(&self) -> u8 {
        match self {
            Currency::Gbp
            | Currency::Eur
            | Currency::Usd
            | Currency::Cad
            | Currency::Aud
            | Currency::Nzd
            | Currency::Zar => 2,
        }
    }

    /// Returns the currency symbol, one or more UTF-8 characters.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Gbp => "£",
            Currency::Eur => "€",
            Currency::Usd | Currency::Cad | Currency::Aud | Currency::Nzd => "$",
            Currency::Zar => "R",
        }
    }

    /// Returns the display name of the currency.
    ///
    /// Name and symbol are handy for display and logging, but nothing in
    /// the wire format depends on them.
    pub fn name(&self) -> &'static str {
        match self {
            Currency::Gbp => "Pound sterling",
            Currency::Eur => "Euro",
            Currency::Usd => "US dollar",
            Currency::Cad => "Canadian dollar",
            Currency::Aud => "Australian dollar",
            Currency::Nzd => "New Zealand dollar",
            Currency::Zar => "South African rand",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}
