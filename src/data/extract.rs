//! Extraction of the latest reading from a LibreLinkUp graph response.
//!
//! The expected body shape is:
//!
//! ```json
//! { "data": { "connection": { "glucoseMeasurement": {
//!     "Value": 6.5, "Timestamp": "...", "TrendArrow": 3
//! } } } }
//! ```

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use super::reading::Reading;

/// Path from the response root to the measurement object.
const MEASUREMENT_PATH: [&str; 3] = ["data", "connection", "glucoseMeasurement"];

/// Reasons a response body could not be turned into a [`Reading`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// No body was available (the fetch failed).
    #[error("no response body")]
    NoBody,

    /// A key along the expected path is absent or null.
    #[error("missing key '{0}' - check the API response structure")]
    MissingKey(&'static str),

    /// A key is present but holds the wrong JSON type.
    #[error("unexpected type for '{key}': expected {expected}")]
    WrongType {
        key: &'static str,
        expected: &'static str,
    },
}

/// Extract a reading from a response body.
///
/// Returns `None` when there is no body or the structure does not match;
/// the reason is logged. No partially filled reading is ever returned.
pub fn extract_reading(body: Option<&Value>) -> Option<Reading> {
    match try_extract(body) {
        Ok(reading) => Some(reading),
        Err(ExtractError::NoBody) => None,
        Err(e) => {
            warn!("Failed to extract glucose reading: {}", e);
            None
        }
    }
}

/// Extract a reading, returning the reason on failure.
pub fn try_extract(body: Option<&Value>) -> Result<Reading, ExtractError> {
    let mut node = body.ok_or(ExtractError::NoBody)?;
    for key in MEASUREMENT_PATH {
        node = field(node, key)?;
    }

    let value = field(node, "Value")?
        .as_f64()
        .ok_or(ExtractError::WrongType {
            key: "Value",
            expected: "number",
        })?;
    let timestamp = field(node, "Timestamp")?
        .as_str()
        .ok_or(ExtractError::WrongType {
            key: "Timestamp",
            expected: "string",
        })?;
    let trend_code = trend_code(field(node, "TrendArrow")?);

    Ok(Reading::new(value, timestamp, trend_code))
}

/// Code a trend value that is not in the 1..=5 table is stored as.
const UNKNOWN_TREND: i64 = 0;

/// Read a trend code, accepting whole-number floats.
///
/// Anything else is kept as [`UNKNOWN_TREND`] rather than failing the reading.
fn trend_code(value: &Value) -> i64 {
    if let Some(code) = value.as_i64() {
        return code;
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => f as i64,
        _ => {
            warn!("Unrecognised TrendArrow {}, labelling as Unknown", value);
            UNKNOWN_TREND
        }
    }
}

/// Look up a non-null key in a JSON object.
fn field<'a>(node: &'a Value, key: &'static str) -> Result<&'a Value, ExtractError> {
    match node.get(key) {
        Some(Value::Null) | None => Err(ExtractError::MissingKey(key)),
        Some(v) => Ok(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_body() -> Value {
        json!({
            "status": 0,
            "data": {
                "connection": {
                    "patientId": "abc",
                    "glucoseMeasurement": {
                        "Value": 6.5,
                        "Timestamp": "10/18/2026 9:14:00 AM",
                        "TrendArrow": 3,
                        "isHigh": false
                    }
                },
                "graphData": []
            }
        })
    }

    #[test]
    fn test_extract_valid_body() {
        let reading = extract_reading(Some(&sample_body())).unwrap();
        assert_eq!(reading.value, 6.5);
        assert_eq!(reading.timestamp, "10/18/2026 9:14:00 AM");
        assert_eq!(reading.trend_code, 3);
    }

    #[test]
    fn test_integer_value_is_accepted() {
        let body = json!({
            "data": { "connection": { "glucoseMeasurement": {
                "Value": 7, "Timestamp": "T", "TrendArrow": 4
            } } }
        });
        assert_eq!(extract_reading(Some(&body)).unwrap().value, 7.0);
    }

    #[test]
    fn test_missing_measurement_returns_none() {
        let body = json!({ "data": { "connection": {} } });
        assert!(extract_reading(Some(&body)).is_none());
        assert_eq!(
            try_extract(Some(&body)),
            Err(ExtractError::MissingKey("glucoseMeasurement"))
        );
    }

    #[test]
    fn test_no_body_returns_none() {
        assert!(extract_reading(None).is_none());
        assert_eq!(try_extract(None), Err(ExtractError::NoBody));
    }

    #[test]
    fn test_null_field_is_missing() {
        let body = json!({
            "data": { "connection": { "glucoseMeasurement": {
                "Value": 5.1, "Timestamp": null, "TrendArrow": 3
            } } }
        });
        assert!(extract_reading(Some(&body)).is_none());
        assert_eq!(
            try_extract(Some(&body)),
            Err(ExtractError::MissingKey("Timestamp"))
        );
    }

    #[test]
    fn test_wrong_value_type_is_rejected() {
        let body = json!({
            "data": { "connection": { "glucoseMeasurement": {
                "Value": "high", "Timestamp": "T", "TrendArrow": 3
            } } }
        });
        assert!(matches!(
            try_extract(Some(&body)),
            Err(ExtractError::WrongType { key: "Value", .. })
        ));
    }

    #[test]
    fn test_non_object_body() {
        assert_eq!(
            try_extract(Some(&json!([1, 2, 3]))),
            Err(ExtractError::MissingKey("data"))
        );
        assert!(extract_reading(Some(&json!("not an object"))).is_none());
    }

    #[test]
    fn test_out_of_range_trend_is_kept() {
        let body = json!({
            "data": { "connection": { "glucoseMeasurement": {
                "Value": 5.0, "Timestamp": "T", "TrendArrow": 99
            } } }
        });
        assert_eq!(extract_reading(Some(&body)).unwrap().trend_code, 99);
    }

    #[test]
    fn test_non_integer_trend_is_stored_as_unknown() {
        let body = json!({
            "data": { "connection": { "glucoseMeasurement": {
                "Value": 6.5, "Timestamp": "T1", "TrendArrow": "3"
            } } }
        });
        let reading = try_extract(Some(&body)).unwrap();
        assert_eq!(reading.value, 6.5);
        assert_eq!(reading.trend().label(), "Unknown");

        let body = json!({
            "data": { "connection": { "glucoseMeasurement": {
                "Value": 6.5, "Timestamp": "T1", "TrendArrow": 2.5
            } } }
        });
        assert_eq!(try_extract(Some(&body)).unwrap().trend().label(), "Unknown");
    }

    #[test]
    fn test_whole_float_trend_is_accepted() {
        let body = json!({
            "data": { "connection": { "glucoseMeasurement": {
                "Value": 6.5, "Timestamp": "T1", "TrendArrow": 3.0
            } } }
        });
        let reading = try_extract(Some(&body)).unwrap();
        assert_eq!(reading.trend_code, 3);
        assert_eq!(reading.trend().label(), "Stable");
    }
}
