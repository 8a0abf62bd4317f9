//! Keyword arguments for endpoint operations.

use serde_json::{Map, Value};

/// A bag of named arguments passed to an endpoint operation.
///
/// Operations distinguish three states for every keyword: absent, present
/// but `null`, and present with a value. Absent required keywords produce
/// [`ApiError::MissingRequiredField`](crate::ApiError::MissingRequiredField);
/// a `null` required keyword fails that field's own validation instead.
///
/// # Example
///
/// ```rust
/// use cloudflare_api::Args;
/// use serde_json::{json, Value};
///
/// let args = Args::new()
///     .set("zone_id", "023e105f4ecef8ad9ca31a8372d0c353")
///     .set("per_page", 20)
///     .set("proxied", true)
///     .set("ttl", Value::Null);
///
/// assert!(args.contains("ttl"));
/// assert!(args.value("ttl").is_none());
///
/// let same: Args = json!({"zone_id": "023e105f4ecef8ad9ca31a8372d0c353"}).into();
/// assert_eq!(same.value("zone_id"), args.value("zone_id"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Args(Map<String, Value>);

impl Args {
    /// Creates an empty argument bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a keyword, replacing any previous value.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Inserts a keyword in place, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns `true` if the keyword was supplied, even as `null`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the raw value, including `null`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the value when it was supplied and is not `null`.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// Returns `true` when the keyword is absent, `null` or an empty string.
    #[must_use]
    pub fn is_blank(&self, key: &str) -> bool {
        match self.0.get(key) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(_) => false,
        }
    }

    /// Returns the number of supplied keywords.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no keywords were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrows the underlying map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Args {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Objects become keyword bags; any other JSON value yields an empty bag.
impl From<Value> for Args {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}

impl From<&Args> for Args {
    fn from(args: &Args) -> Self {
        args.clone()
    }
}

impl<K, V> FromIterator<(K, V)> for Args
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_null_and_present_are_distinct() {
        let args = Args::new().set("a", Value::Null).set("b", "x");

        assert!(!args.contains("missing"));
        assert!(args.contains("a"));
        assert_eq!(args.get("a"), Some(&Value::Null));
        assert!(args.value("a").is_none());
        assert_eq!(args.value("b"), Some(&json!("x")));
    }

    #[test]
    fn test_is_blank() {
        let args = Args::new()
            .set("empty", "")
            .set("null", Value::Null)
            .set("zero", 0)
            .set("flag", false);

        assert!(args.is_blank("empty"));
        assert!(args.is_blank("null"));
        assert!(args.is_blank("missing"));
        assert!(!args.is_blank("zero"));
        assert!(!args.is_blank("flag"));
    }

    #[test]
    fn test_from_json_object() {
        let args: Args = json!({"zone_id": "abc", "page": 2}).into();
        assert_eq!(args.len(), 2);
        assert_eq!(args.value("page"), Some(&json!(2)));
    }

    #[test]
    fn test_from_non_object_is_empty() {
        let args: Args = json!(["zone_id"]).into();
        assert!(args.is_empty());
    }

    #[test]
    fn test_from_iterator() {
        let args: Args = [("zone_id", "abc"), ("id", "123")].into_iter().collect();
        assert_eq!(args.value("id"), Some(&json!("123")));
    }
}
