//! Reusable argument checks.
//!
//! Every check takes the message to report so each operation keeps its own
//! wording. Optional checks treat `null` like an absent keyword; required
//! checks reject it with the supplied message.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::rest::args::Args;

impl Args {
    /// Fails with [`ApiError::MissingRequiredField`] listing every key in
    /// `keys` that was not supplied at all, in the given order.
    ///
    /// # Errors
    ///
    /// Returns an error when at least one key is absent.
    pub fn require(&self, keys: &[&'static str]) -> Result<(), ApiError> {
        let fields: Vec<&'static str> = keys
            .iter()
            .copied()
            .filter(|key| !self.contains(key))
            .collect();
        if fields.is_empty() {
            Ok(())
        } else {
            Err(ApiError::MissingRequiredField { fields })
        }
    }

    /// Returns a non-blank value.
    ///
    /// # Errors
    ///
    /// Returns `message` when the value is absent, `null` or `""`.
    pub fn required(&self, key: &'static str, message: &str) -> Result<&Value, ApiError> {
        if self.is_blank(key) {
            return Err(ApiError::invalid(key, message));
        }
        self.value(key).ok_or_else(|| ApiError::invalid(key, message))
    }

    /// Returns an identifier as a percent-encoded path segment.
    ///
    /// Strings and integers are accepted.
    ///
    /// # Errors
    ///
    /// Returns `message` when the value is blank or not a string or number.
    pub fn id(&self, key: &'static str, message: &str) -> Result<String, ApiError> {
        match self.required(key, message)? {
            Value::String(s) => Ok(urlencoding::encode(s).into_owned()),
            Value::Number(n) => Ok(n.to_string()),
            _ => Err(ApiError::invalid(key, message)),
        }
    }

    /// Checks an optional enumerated string.
    ///
    /// # Errors
    ///
    /// Returns `message` when the value is present and not in `allowed`.
    pub fn one_of(
        &self,
        key: &'static str,
        allowed: &[&str],
        message: &str,
    ) -> Result<Option<&str>, ApiError> {
        match self.value(key) {
            None => Ok(None),
            Some(Value::String(s)) if allowed.contains(&s.as_str()) => Ok(Some(s.as_str())),
            Some(_) => Err(ApiError::invalid(key, message)),
        }
    }

    /// Checks a required enumerated string; `null` is rejected.
    ///
    /// # Errors
    ///
    /// Returns `message` when the value is `null` or not in `allowed`.
    pub fn required_one_of(
        &self,
        key: &'static str,
        allowed: &[&str],
        message: &str,
    ) -> Result<&str, ApiError> {
        self.one_of(key, allowed, message)?
            .ok_or_else(|| ApiError::invalid(key, message))
    }

    /// Checks an enumerated string, falling back to `default` when omitted.
    ///
    /// # Errors
    ///
    /// Returns `message` when the value is present and not in `allowed`.
    pub fn one_of_or<'a>(
        &'a self,
        key: &'static str,
        allowed: &[&str],
        default: &'a str,
        message: &str,
    ) -> Result<&'a str, ApiError> {
        Ok(self.one_of(key, allowed, message)?.unwrap_or(default))
    }

    /// Checks an optional boolean.
    ///
    /// # Errors
    ///
    /// Returns `message` when the value is present and not `true`/`false`.
    pub fn bool_opt(&self, key: &'static str, message: &str) -> Result<Option<bool>, ApiError> {
        match self.value(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(ApiError::invalid(key, message)),
        }
    }

    /// Checks a required boolean; `null` is rejected.
    ///
    /// # Errors
    ///
    /// Returns `message` unless the value is literally `true` or `false`.
    pub fn bool_required(&self, key: &'static str, message: &str) -> Result<bool, ApiError> {
        self.bool_opt(key, message)?
            .ok_or_else(|| ApiError::invalid(key, message))
    }

    /// Checks a required integer inside `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns `message` for non-integers and out-of-range values.
    pub fn int_between(
        &self,
        key: &'static str,
        min: i64,
        max: i64,
        message: &str,
    ) -> Result<i64, ApiError> {
        self.value(key)
            .and_then(Value::as_i64)
            .filter(|n| (min..=max).contains(n))
            .ok_or_else(|| ApiError::invalid(key, message))
    }

    /// Checks a required array, which may be empty.
    ///
    /// # Errors
    ///
    /// Returns `message` when the value is `null` or not an array.
    pub fn list(&self, key: &'static str, message: &str) -> Result<&Vec<Value>, ApiError> {
        self.value(key)
            .and_then(Value::as_array)
            .ok_or_else(|| ApiError::invalid(key, message))
    }

    /// Checks a required non-empty array.
    ///
    /// # Errors
    ///
    /// Returns `message` when the value is not an array or is empty.
    pub fn non_empty_list(
        &self,
        key: &'static str,
        message: &str,
    ) -> Result<&Vec<Value>, ApiError> {
        let items = self.list(key, message)?;
        if items.is_empty() {
            return Err(ApiError::invalid(key, message));
        }
        Ok(items)
    }

    /// Checks an optional non-empty array.
    ///
    /// # Errors
    ///
    /// Returns `message` when the value is present and not a non-empty array.
    pub fn non_empty_list_opt(
        &self,
        key: &'static str,
        message: &str,
    ) -> Result<Option<&Vec<Value>>, ApiError> {
        if self.value(key).is_none() {
            return Ok(None);
        }
        self.non_empty_list(key, message).map(Some)
    }

    /// Checks a required JSON object, which may be empty.
    ///
    /// # Errors
    ///
    /// Returns `message` when the value is `null` or not an object.
    pub fn object(
        &self,
        key: &'static str,
        message: &str,
    ) -> Result<&Map<String, Value>, ApiError> {
        self.value(key)
            .and_then(Value::as_object)
            .ok_or_else(|| ApiError::invalid(key, message))
    }

    /// Checks an optional JSON object.
    ///
    /// # Errors
    ///
    /// Returns `message` when the value is present and not an object.
    pub fn object_opt(
        &self,
        key: &'static str,
        message: &str,
    ) -> Result<Option<&Map<String, Value>>, ApiError> {
        if self.value(key).is_none() {
            return Ok(None);
        }
        self.object(key, message).map(Some)
    }

    /// Checks an optional ISO-8601 timestamp such as `2016-11-11T12:00:00Z`.
    ///
    /// Local times without an offset and plain dates are accepted too.
    ///
    /// # Errors
    ///
    /// Returns `message` when the value is present and does not parse.
    pub fn iso8601_opt(&self, key: &'static str, message: &str) -> Result<Option<&str>, ApiError> {
        match self.value(key) {
            None => Ok(None),
            Some(Value::String(s)) if is_iso8601(s) => Ok(Some(s.as_str())),
            Some(_) => Err(ApiError::invalid(key, message)),
        }
    }

    /// Checks a required ISO-8601 timestamp; `null` is rejected.
    ///
    /// # Errors
    ///
    /// Returns `message` when the value is `null` or does not parse.
    pub fn iso8601(&self, key: &'static str, message: &str) -> Result<&str, ApiError> {
        self.iso8601_opt(key, message)?
            .ok_or_else(|| ApiError::invalid(key, message))
    }

    /// Checks an optional Unix timestamp, given as a non-negative integer or
    /// a string of digits.
    ///
    /// # Errors
    ///
    /// Returns `message` when the value is present and not a timestamp.
    pub fn unix_timestamp_opt(
        &self,
        key: &'static str,
        message: &str,
    ) -> Result<Option<i64>, ApiError> {
        let parsed = match self.value(key) {
            None => return Ok(None),
            Some(Value::Number(n)) => n.as_i64(),
            Some(Value::String(s)) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
                s.parse::<i64>().ok()
            }
            Some(_) => None,
        };
        parsed
            .filter(|ts| *ts >= 0)
            .map(Some)
            .ok_or_else(|| ApiError::invalid(key, message))
    }

    /// Checks a required Unix timestamp; `null` is rejected.
    ///
    /// # Errors
    ///
    /// Returns `message` when the value is `null` or not a timestamp.
    pub fn unix_timestamp(&self, key: &'static str, message: &str) -> Result<i64, ApiError> {
        self.unix_timestamp_opt(key, message)?
            .ok_or_else(|| ApiError::invalid(key, message))
    }
}

/// Accepts RFC 3339, an offset-less local date-time, or a calendar date.
fn is_iso8601(text: &str) -> bool {
    DateTime::parse_from_rfc3339(text).is_ok()
        || NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
        || NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ========================================================================
    // Structural checks
    // ========================================================================

    #[test]
    fn test_require_lists_absent_keys_in_declared_order() {
        let args = Args::new().set("name", "x");
        let error = args.require(&["zone_id", "name", "type"]).unwrap_err();
        assert!(matches!(
            &error,
            ApiError::MissingRequiredField { fields } if fields == &vec!["zone_id", "type"]
        ));
        assert_eq!(error.to_string(), "missing keywords: zone_id, type");
    }

    #[test]
    fn test_require_accepts_null() {
        let args = Args::new().set("zone_id", Value::Null);
        assert!(args.require(&["zone_id"]).is_ok());
    }

    // ========================================================================
    // Identifiers and required values
    // ========================================================================

    #[test]
    fn test_id_rejects_blank() {
        for value in [Value::Null, json!("")] {
            let args = Args::new().set("zone_id", value);
            let error = args.id("zone_id", "zone_id required").unwrap_err();
            assert_eq!(error.to_string(), "zone_id required");
        }
    }

    #[test]
    fn test_id_accepts_numbers_and_encodes_strings() {
        let args = Args::new().set("id", 1234).set("name", "a b/c");
        assert_eq!(args.id("id", "id required").unwrap(), "1234");
        assert_eq!(args.id("name", "name required").unwrap(), "a%20b%2Fc");
    }

    #[test]
    fn test_id_rejects_objects() {
        let args = Args::new().set("id", json!({"id": 1}));
        assert!(args.id("id", "id required").is_err());
    }

    // ========================================================================
    // Enumerations and booleans
    // ========================================================================

    #[test]
    fn test_one_of() {
        let allowed = ["asc", "desc"];
        let args = Args::new()
            .set("direction", "asc")
            .set("bad", "up")
            .set("null", Value::Null);

        assert_eq!(args.one_of("direction", &allowed, "m").unwrap(), Some("asc"));
        assert_eq!(args.one_of("null", &allowed, "m").unwrap(), None);
        assert_eq!(args.one_of("missing", &allowed, "m").unwrap(), None);
        assert_eq!(args.one_of("bad", &allowed, "m").unwrap_err().to_string(), "m");
        assert!(args.required_one_of("null", &allowed, "m").is_err());
        assert_eq!(args.one_of_or("missing", &allowed, "desc", "m").unwrap(), "desc");
    }

    #[test]
    fn test_bool_checks() {
        let args = Args::new()
            .set("yes", true)
            .set("word", "true")
            .set("null", Value::Null);

        assert_eq!(args.bool_opt("yes", "m").unwrap(), Some(true));
        assert_eq!(args.bool_opt("missing", "m").unwrap(), None);
        assert!(args.bool_opt("word", "m").is_err());
        assert!(args.bool_required("null", "m").is_err());
        assert!(args.bool_required("yes", "m").unwrap());
    }

    // ========================================================================
    // Numbers, collections and timestamps
    // ========================================================================

    #[test]
    fn test_int_between_bounds() {
        let message = "threshold must be between 1 86400";
        for ok in [1, 86400] {
            let args = Args::new().set("threshold", ok);
            assert_eq!(args.int_between("threshold", 1, 86400, message).unwrap(), ok);
        }
        for bad in [json!(0), json!(-5), json!(86401), json!("10"), json!(1.5)] {
            let args = Args::new().set("threshold", bad);
            let error = args.int_between("threshold", 1, 86400, message).unwrap_err();
            assert_eq!(error.to_string(), message);
        }
    }

    #[test]
    fn test_list_checks() {
        let args = Args::new()
            .set("empty", json!([]))
            .set("full", json!(["a"]))
            .set("string", "a");

        assert!(args.list("empty", "m").unwrap().is_empty());
        assert!(args.non_empty_list("empty", "m").is_err());
        assert_eq!(args.non_empty_list("full", "m").unwrap().len(), 1);
        assert!(args.list("string", "m").is_err());
        assert_eq!(args.non_empty_list_opt("missing", "m").unwrap(), None);
        assert!(args.non_empty_list_opt("empty", "m").is_err());
    }

    #[test]
    fn test_object_checks() {
        let args = Args::new().set("obj", json!({})).set("arr", json!([]));
        assert!(args.object("obj", "m").unwrap().is_empty());
        assert!(args.object("arr", "m").is_err());
        assert!(args.object_opt("missing", "m").unwrap().is_none());
    }

    #[test]
    fn test_iso8601() {
        let args = Args::new()
            .set("good", "2016-11-11T12:00:00Z")
            .set("offset", "2016-11-11T12:00:00+02:00")
            .set("bad", "yesterday");

        assert!(args.iso8601("good", "m").is_ok());
        assert!(args.iso8601_opt("offset", "m").unwrap().is_some());
        assert!(args.iso8601_opt("missing", "m").unwrap().is_none());
        assert!(args.iso8601("bad", "m").is_err());
        assert!(args.iso8601("missing", "m").is_err());
    }

    #[test]
    fn test_iso8601_local_time_and_date() {
        let args = Args::new()
            .set("local", "2016-11-11T12:00:00")
            .set("fraction", "2016-11-11T12:00:00.250")
            .set("date", "2016-11-11")
            .set("month", "2016-13-01")
            .set("number", 1_478_865_600);

        assert_eq!(args.iso8601("local", "m").unwrap(), "2016-11-11T12:00:00");
        assert!(args.iso8601("fraction", "m").is_ok());
        assert_eq!(args.iso8601("date", "m").unwrap(), "2016-11-11");
        assert!(args.iso8601("month", "m").is_err());
        assert!(args.iso8601("number", "m").is_err());
    }

    #[test]
    fn test_unix_timestamp() {
        let args = Args::new()
            .set("int", 1_495_825_365)
            .set("digits", "1495825365")
            .set("negative", -1)
            .set("text", "now");

        assert_eq!(args.unix_timestamp("int", "m").unwrap(), 1_495_825_365);
        assert_eq!(args.unix_timestamp("digits", "m").unwrap(), 1_495_825_365);
        assert!(args.unix_timestamp("negative", "m").is_err());
        assert!(args.unix_timestamp("text", "m").is_err());
        assert_eq!(args.unix_timestamp_opt("missing", "m").unwrap(), None);
    }
}
