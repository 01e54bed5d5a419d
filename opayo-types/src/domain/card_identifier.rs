//! Card identifier value object, returned by the gateway when card details
//! are tokenised.

use chrono::{DateTime, FixedOffset, Utc};
use serde_json::{json, Value};

use crate::error::DomainError;
use crate::payload;

/// A time-limited reference token for card details held by the gateway.
///
/// Built by parsing a gateway response payload. The object is a plain
/// snapshot: it can be stored between pages of a multi-step flow (e.g. a
/// 3-D Secure redirect) via [`to_stored`](Self::to_stored) and rebuilt with
/// [`from_data`](Self::from_data).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardIdentifier {
    card_identifier: Option<String>,
    expiry: Option<DateTime<FixedOffset>>,
    card_type: Option<String>,
    http_code: Option<u16>,
}

impl CardIdentifier {
    /// Populates a card identifier from a gateway payload or a stored
    /// snapshot.
    ///
    /// The token arrives as `cardIdentifier` on most endpoints and as
    /// `card-identifier` on others; both spellings are accepted, in that
    /// order. Unknown keys are ignored. A missing `expiry` stays unset; a
    /// present but malformed one is an error.
    pub fn from_data(data: &Value) -> Result<Self, DomainError> {
        let card_identifier = payload::string_field(data, "cardIdentifier")
            .or_else(|| payload::string_field(data, "card-identifier"));

        let expiry = match payload::string_field(data, "expiry") {
            Some(raw) => Some(payload::parse_timestamp(&raw)?),
            None => None,
        };

        let card_type = payload::string_field(data, "cardType");

        let http_code = payload::integer_field(data, "httpCode")
            .and_then(|code| u16::try_from(code).ok());

        Ok(Self {
            card_identifier,
            expiry,
            card_type,
            http_code,
        })
    }

    /// Decodes a JSON string (e.g. one stored in a session) and populates
    /// from it.
    pub fn from_json(raw: &str) -> Result<Self, DomainError> {
        let data: Value = serde_json::from_str(raw)?;
        Self::from_data(&data)
    }

    /// Returns a copy carrying the HTTP status code of the response
    /// envelope this payload arrived in.
    pub fn with_http_code(mut self, http_code: u16) -> Self {
        self.http_code = Some(http_code);
        self
    }

    pub fn card_identifier(&self) -> Option<&str> {
        self.card_identifier.as_deref()
    }

    /// The expiry timestamp of the card identifier resource, not the
    /// expiry date of the card.
    pub fn expiry(&self) -> Option<&DateTime<FixedOffset>> {
        self.expiry.as_ref()
    }

    pub fn card_type(&self) -> Option<&str> {
        self.card_type.as_deref()
    }

    pub fn http_code(&self) -> Option<u16> {
        self.http_code
    }

    /// Whether the token looks expired from here.
    ///
    /// True when no expiry is known, or when the current instant is past
    /// it. The comparison is between instants, so the offset the gateway
    /// used is irrelevant. This is a local estimate only: the gateway is
    /// the authority, and the only real check is attempting to use the
    /// token. Some entry forms never supply an expiry at all, so their
    /// tokens always look expired here.
    pub fn is_expired(&self) -> bool {
        match self.expiry {
            Some(expiry) => Utc::now() > expiry.with_timezone(&Utc),
            None => true,
        }
    }

    /// Reduces the object to a flat map so it can be stored between pages.
    ///
    /// All four keys are always present; unset fields are `null`. Feeding
    /// the result back through [`from_data`](Self::from_data) reproduces an
    /// equivalent object.
    pub fn to_stored(&self) -> Value {
        json!({
            "cardIdentifier": self.card_identifier,
            "expiry": self.expiry.as_ref().map(payload::format_timestamp),
            "cardType": self.card_type,
            "httpCode": self.http_code,
        })
    }
}
