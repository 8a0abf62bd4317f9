//! Request assembly from validated arguments.

use serde_json::{Map, Value};

use crate::clients::HttpRequestBuilder;
use crate::rest::args::Args;

/// Default page size for paginated listings.
pub const DEFAULT_PER_PAGE: u32 = 50;

/// Default first page for paginated listings.
pub const DEFAULT_PAGE: u32 = 1;

/// Renders a JSON scalar as a query-string value.
pub(crate) fn query_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Copies the supplied, non-null keywords in `keys` into a JSON object.
pub(crate) fn body_fields(args: &Args, keys: &[&str]) -> Map<String, Value> {
    keys.iter()
        .filter_map(|key| args.value(key).map(|v| ((*key).to_string(), v.clone())))
        .collect()
}

/// Query helpers for builders fed from an [`Args`] bag.
pub(crate) trait ArgsQuery: Sized {
    /// Adds `page` and `per_page`, defaulting to 1 and 50.
    #[must_use]
    fn paginate(self, args: &Args) -> Self;

    /// Adds `key` when it was supplied and is not `null`.
    #[must_use]
    fn query_opt(self, args: &Args, key: &str) -> Self;

    /// Adds `name` from the keyword `key` when supplied.
    #[must_use]
    fn query_opt_as(self, args: &Args, key: &str, name: &str) -> Self;
}

impl ArgsQuery for HttpRequestBuilder {
    fn paginate(self, args: &Args) -> Self {
        let page = args
            .value("page")
            .map_or_else(|| DEFAULT_PAGE.to_string(), query_text);
        let per_page = args
            .value("per_page")
            .map_or_else(|| DEFAULT_PER_PAGE.to_string(), query_text);
        self.query_param("page", page).query_param("per_page", per_page)
    }

    fn query_opt(self, args: &Args, key: &str) -> Self {
        self.query_opt_as(args, key, key)
    }

    fn query_opt_as(self, args: &Args, key: &str, name: &str) -> Self {
        match args.value(key) {
            Some(value) => self.query_param(name, query_text(value)),
            None => self,
        }
    }
}
