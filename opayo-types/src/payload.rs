//! Defensive field extraction from gateway payloads.
//!
//! Gateway JSON is loosely typed: key spellings vary across endpoints and
//! API versions, and most fields are optional. These helpers keep that
//! variability out of the typed value objects. Lookups are total - a
//! missing, null, or wrong-typed field resolves to `None`, never an error.
//! Key aliases are enumerated explicitly at each call site rather than
//! guessed here.

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use crate::error::DomainError;

/// The gateway's canonical timestamp shape, e.g.
/// `2017-12-09T12:14:17.145+00:00`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

/// Output shape for stored snapshots; fixed six-digit fraction so the
/// emitted string always re-parses under [`TIMESTAMP_FORMAT`].
const TIMESTAMP_OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f%:z";

/// Returns the value at `key`, treating JSON `null` as absent.
///
/// Only direct, case-sensitive key lookup on an object; no deep path
/// traversal. Non-object payloads have no fields.
pub fn field<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    data.as_object()
        .and_then(|map| map.get(key))
        .filter(|value| !value.is_null())
}

/// Returns the string at `key`, if present and actually a string.
pub fn string_field(data: &Value, key: &str) -> Option<String> {
    field(data, key)
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Returns the boolean at `key`, if present and actually a boolean.
pub fn bool_field(data: &Value, key: &str) -> Option<bool> {
    field(data, key).and_then(Value::as_bool)
}

/// Returns the integer at `key`, if present and actually an integer.
pub fn integer_field(data: &Value, key: &str) -> Option<i64> {
    field(data, key).and_then(Value::as_i64)
}

/// Parses a timestamp string against the gateway's fixed format.
///
/// A string that does not match is an error; silently falling back to an
/// epoch would make a token look expired (or not) for the wrong reason.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>, DomainError> {
    DateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|source| {
        DomainError::MalformedTimestamp {
            value: value.to_string(),
            source,
        }
    })
}

/// Formats a timestamp back into the gateway's shape.
pub fn format_timestamp(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.format(TIMESTAMP_OUTPUT_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_direct_hit() {
        let data = json!({"cardType": "Visa"});
        assert_eq!(field(&data, "cardType"), Some(&json!("Visa")));
    }

    #[test]
    fn test_field_is_case_sensitive() {
        let data = json!({"cardType": "Visa"});
        assert_eq!(field(&data, "cardtype"), None);
    }

    #[test]
    fn test_null_is_absent() {
        let data = json!({"expiry": null});
        assert_eq!(field(&data, "expiry"), None);
    }

    #[test]
    fn test_non_object_has_no_fields() {
        assert_eq!(field(&json!("scalar"), "key"), None);
        assert_eq!(field(&json!([1, 2]), "key"), None);
    }

    #[test]
    fn test_typed_projections() {
        let data = json!({"name": "x", "reusable": true, "httpCode": 201});
        assert_eq!(string_field(&data, "name"), Some("x".to_string()));
        assert_eq!(bool_field(&data, "reusable"), Some(true));
        assert_eq!(integer_field(&data, "httpCode"), Some(201));
    }

    #[test]
    fn test_wrong_type_is_absent() {
        let data = json!({"reusable": "yes", "httpCode": "201"});
        assert_eq!(bool_field(&data, "reusable"), None);
        assert_eq!(integer_field(&data, "httpCode"), None);
    }

    #[test]
    fn test_parse_timestamp_gateway_shape() {
        let ts = parse_timestamp("2017-12-09T12:14:17.145+00:00").unwrap();
        assert_eq!(ts.timestamp_subsec_millis(), 145);
    }

    #[test]
    fn test_parse_timestamp_keeps_offset_instant() {
        let utc = parse_timestamp("2017-12-09T12:14:17.145+00:00").unwrap();
        let bst = parse_timestamp("2017-12-09T13:14:17.145+01:00").unwrap();
        assert_eq!(utc, bst);
    }

    #[test]
    fn test_parse_timestamp_rejects_date_only() {
        let result = parse_timestamp("2017-12-09");
        assert!(matches!(
            result,
            Err(DomainError::MalformedTimestamp { value, .. }) if value == "2017-12-09"
        ));
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("not a timestamp").is_err());
    }

    #[test]
    fn test_format_parse_round_trip() {
        let original = parse_timestamp("2017-12-09T12:14:17.145+01:00").unwrap();
        let reparsed = parse_timestamp(&format_timestamp(&original)).unwrap();
        assert_eq!(original, reparsed);
    }
}
