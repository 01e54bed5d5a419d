//! Card details value object: either fresh tokenised-card data or a
//! previously saved card reference.

use serde_json::{json, Map, Value};

use crate::error::DomainError;
use crate::payload;
use crate::ports::PaymentMethod;

/// Safe card details plus the token that stands in for the full card.
///
/// Every field is optional - gateway payloads are partial across endpoints
/// and versions - and unset is distinct from explicitly false. The object
/// is a value: [`with_save`](Self::with_save) returns a modified copy
/// rather than mutating in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    card_type: Option<String>,
    last_four_digits: Option<String>,
    expiry_date: Option<String>, // MMYY
    card_identifier: Option<String>,
    /// This identifier has been used before and can be charged again.
    reusable: Option<bool>,
    /// Caller's request to keep the card for future reuse. Request-only
    /// intent; the gateway never returns it.
    save: Option<bool>,
}

impl Card {
    /// Builds a card from raw parts, for assembling an outbound request.
    pub fn new(
        card_type: Option<String>,
        last_four_digits: Option<String>,
        expiry_date: Option<String>,
        card_identifier: Option<String>,
        reusable: Option<bool>,
        save: Option<bool>,
    ) -> Self {
        Self {
            card_type,
            last_four_digits,
            expiry_date,
            card_identifier,
            reusable,
            save,
        }
    }

    /// Builds a card from a gateway payload or a stored snapshot.
    ///
    /// The details normally sit inside a `card` wrapper element; it is
    /// unwrapped first when present. Missing fields never fail, and `save`
    /// is never taken from data.
    pub fn from_data(data: &Value) -> Self {
        let data = payload::field(data, "card").unwrap_or(data);

        Self {
            card_type: payload::string_field(data, "cardType"),
            last_four_digits: payload::string_field(data, "lastFourDigits"),
            expiry_date: payload::string_field(data, "expiryDate"),
            card_identifier: payload::string_field(data, "cardIdentifier"),
            reusable: payload::bool_field(data, "reusable"),
            save: None,
        }
    }

    /// Decodes a JSON string (e.g. a stored serialisation) and builds from
    /// it.
    pub fn from_json(raw: &str) -> Result<Self, DomainError> {
        let data: Value = serde_json::from_str(raw)?;
        Ok(Self::from_data(&data))
    }

    /// Serialisation for storage: `{"card": {…}}` with only the fields
    /// that are set, the same shape [`from_data`](Self::from_data) unwraps.
    pub fn to_stored(&self) -> Value {
        let mut card = Map::new();

        if let Some(card_type) = &self.card_type {
            card.insert("cardType".to_string(), json!(card_type));
        }
        if let Some(last_four_digits) = &self.last_four_digits {
            card.insert("lastFourDigits".to_string(), json!(last_four_digits));
        }
        if let Some(expiry_date) = &self.expiry_date {
            card.insert("expiryDate".to_string(), json!(expiry_date));
        }
        if let Some(card_identifier) = &self.card_identifier {
            card.insert("cardIdentifier".to_string(), json!(card_identifier));
        }
        if let Some(reusable) = self.reusable {
            card.insert("reusable".to_string(), json!(reusable));
        }

        json!({ "card": card })
    }

    /// Tells you if this is a reusable card token.
    pub fn is_reusable(&self) -> bool {
        self.reusable == Some(true)
    }

    /// Content of the reusable flag.
    pub fn reusable(&self) -> Option<bool> {
        self.reusable
    }

    /// Content of the save flag.
    pub fn save(&self) -> Option<bool> {
        self.save
    }

    /// Returns a copy with the save flag set or reset, e.g. after
    /// retrieving the card from storage. The original is untouched.
    pub fn with_save(&self, save: bool) -> Self {
        let mut clone = self.clone();
        clone.save = Some(save);
        clone
    }

    /// There is no definitive list of card types; "Visa", "MasterCard" and
    /// "American Express" are typical values.
    pub fn card_type(&self) -> Option<&str> {
        self.card_type.as_deref()
    }

    pub fn last_four_digits(&self) -> Option<&str> {
        self.last_four_digits.as_deref()
    }

    /// The raw expiry date, format MMYY.
    pub fn expiry_date(&self) -> Option<&str> {
        self.expiry_date.as_deref()
    }

    /// Month number, format MM. `None` unless the stored expiry date is
    /// exactly four digits.
    pub fn expiry_month(&self) -> Option<&str> {
        self.expiry_digits().map(|expiry| &expiry[..2])
    }

    /// Year number, format YY; no attempt is made to expand it to four
    /// digits. `None` unless the stored expiry date is exactly four digits.
    pub fn expiry_year(&self) -> Option<&str> {
        self.expiry_digits().map(|expiry| &expiry[2..])
    }

    pub fn card_identifier(&self) -> Option<&str> {
        self.card_identifier.as_deref()
    }

    fn expiry_digits(&self) -> Option<&str> {
        let expiry = self.expiry_date.as_deref()?;
        (expiry.len() == 4 && expiry.bytes().all(|b| b.is_ascii_digit())).then_some(expiry)
    }
}

impl PaymentMethod for Card {
    /// The minimal fragment needed to charge against the stored token.
    /// Display-only fields (type, last four digits, expiry date) are
    /// deliberately left out; the gateway does not want them back.
    fn pay_data(&self) -> Value {
        let mut card = Map::new();
        card.insert("cardIdentifier".to_string(), json!(self.card_identifier));

        if let Some(reusable) = self.reusable {
            card.insert("reusable".to_string(), json!(reusable));
        }
        if let Some(save) = self.save {
            card.insert("save".to_string(), json!(save));
        }

        json!({ "card": card })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_card() -> Card {
        Card::new(
            Some("Visa".to_string()),
            Some("0006".to_string()),
            Some("1225".to_string()),
            Some("tok_1".to_string()),
            Some(true),
            None,
        )
    }

    #[test]
    fn test_from_data_unwraps_card_envelope() {
        let card = Card::from_data(&json!({
            "card": {
                "cardType": "Visa",
                "lastFourDigits": "0006",
                "expiryDate": "1225",
                "cardIdentifier": "tok_1",
                "reusable": true,
            }
        }));

        assert_eq!(card.card_type(), Some("Visa"));
        assert_eq!(card.last_four_digits(), Some("0006"));
        assert_eq!(card.expiry_date(), Some("1225"));
        assert_eq!(card.card_identifier(), Some("tok_1"));
        assert_eq!(card.reusable(), Some(true));
    }

    #[test]
    fn test_from_data_without_envelope() {
        let card = Card::from_data(&json!({"cardType": "MasterCard"}));
        assert_eq!(card.card_type(), Some("MasterCard"));
    }

    #[test]
    fn test_from_data_never_populates_save() {
        let card = Card::from_data(&json!({"card": {"save": true}}));
        assert_eq!(card.save(), None);
    }

    #[test]
    fn test_from_data_tolerates_empty_payload() {
        let card = Card::from_data(&json!({}));
        assert_eq!(card, Card::default());
    }

    #[test]
    fn test_stored_round_trip() {
        let original = sample_card();
        let restored = Card::from_data(&original.to_stored());

        assert_eq!(restored.card_type(), original.card_type());
        assert_eq!(restored.last_four_digits(), original.last_four_digits());
        assert_eq!(restored.expiry_date(), original.expiry_date());
        assert_eq!(restored.card_identifier(), original.card_identifier());
        assert_eq!(restored.reusable(), original.reusable());
    }

    #[test]
    fn test_to_stored_omits_unset_fields() {
        let card = Card::new(None, None, None, Some("tok_1".to_string()), None, None);
        assert_eq!(card.to_stored(), json!({"card": {"cardIdentifier": "tok_1"}}));
    }

    #[test]
    fn test_save_does_not_survive_storage() {
        let card = sample_card().with_save(true);
        let restored = Card::from_data(&card.to_stored());
        assert_eq!(restored.save(), None);
    }

    #[test]
    fn test_from_json_string() {
        let card = Card::from_json(r#"{"card": {"cardIdentifier": "tok_9"}}"#).unwrap();
        assert_eq!(card.card_identifier(), Some("tok_9"));

        assert!(matches!(
            Card::from_json("{broken"),
            Err(DomainError::Json(_))
        ));
    }

    #[test]
    fn test_is_reusable_only_on_explicit_true() {
        assert!(sample_card().is_reusable());

        let unset = Card::default();
        assert!(!unset.is_reusable());

        let explicit_false = Card::new(None, None, None, None, Some(false), None);
        assert!(!explicit_false.is_reusable());
    }

    #[test]
    fn test_expiry_month_and_year() {
        assert_eq!(sample_card().expiry_month(), Some("12"));
        assert_eq!(sample_card().expiry_year(), Some("25"));
    }

    #[test]
    fn test_expiry_accessors_defensive_on_malformed_dates() {
        for bad in ["", "1", "abcd", "12256", "12a5"] {
            let card = Card::new(None, None, Some(bad.to_string()), None, None, None);
            assert_eq!(card.expiry_month(), None, "expiryDate {:?}", bad);
            assert_eq!(card.expiry_year(), None, "expiryDate {:?}", bad);
        }

        let unset = Card::default();
        assert_eq!(unset.expiry_month(), None);
        assert_eq!(unset.expiry_year(), None);
    }

    #[test]
    fn test_pay_data_is_minimal() {
        let pay_data = sample_card().pay_data();
        assert_eq!(
            pay_data,
            json!({"card": {"cardIdentifier": "tok_1", "reusable": true}})
        );
    }

    #[test]
    fn test_pay_data_includes_save_when_set() {
        let pay_data = sample_card().with_save(true).pay_data();
        assert_eq!(
            pay_data,
            json!({"card": {"cardIdentifier": "tok_1", "reusable": true, "save": true}})
        );
    }

    #[test]
    fn test_pay_data_keeps_null_identifier_key() {
        let pay_data = Card::default().pay_data();
        assert_eq!(pay_data, json!({"card": {"cardIdentifier": null}}));
    }

    #[test]
    fn test_with_save_leaves_original_untouched() {
        let original = sample_card();
        let saved = original.with_save(true);

        assert_eq!(original.save(), None);
        assert_eq!(saved.save(), Some(true));
        assert_eq!(saved.card_identifier(), original.card_identifier());
    }
}
