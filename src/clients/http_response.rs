//! Response types.
//!
//! Cloudflare wraps every answer in the same envelope:
//!
//! ```json
//! {"success": true, "errors": [], "messages": [], "result": {...}, "result_info": {...}}
//! ```
//!
//! [`HttpResponse`] keeps the raw body and exposes the envelope pieces the
//! client needs: the first error for failures and [`ResultInfo`] for paging.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Fallback message when a failed response carries no usable `errors` entry.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Paging metadata from an envelope's `result_info` object.
///
/// # Example
///
/// ```rust
/// use cloudflare_api::ResultInfo;
/// use serde_json::json;
///
/// let body = json!({"result": [], "result_info": {"page": 2, "per_page": 20, "count": 20, "total_count": 45}});
/// let info = ResultInfo::from_envelope(&body).unwrap();
/// assert_eq!(info.page, Some(2));
/// assert!(info.has_next_page());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ResultInfo {
    /// Current page, starting at 1.
    pub page: Option<u64>,
    /// Page size.
    pub per_page: Option<u64>,
    /// Items on this page.
    pub count: Option<u64>,
    /// Items across all pages.
    pub total_count: Option<u64>,
    /// Number of pages, when the API reports it.
    pub total_pages: Option<u64>,
}

impl ResultInfo {
    /// Reads `result_info` from a response body.
    #[must_use]
    pub fn from_envelope(body: &Value) -> Option<Self> {
        body.get("result_info")
            .and_then(|info| Self::deserialize(info).ok())
    }

    /// Returns `true` when more pages follow this one.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        let page = self.page.unwrap_or(1);
        if let Some(total_pages) = self.total_pages {
            return page < total_pages;
        }
        match (self.per_page, self.total_count) {
            (Some(per_page), Some(total)) if per_page > 0 => page * per_page < total,
            _ => false,
        }
    }
}

/// A response from the Cloudflare API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased, possibly multi-valued.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed body, or `Value::Null` when it was not JSON.
    pub body: Value,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Value) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` only for HTTP 200; Cloudflare uses no other success code.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code == 200
    }

    /// Returns the `cf-ray` header, if present.
    #[must_use]
    pub fn ray_id(&self) -> Option<&str> {
        self.headers
            .get("cf-ray")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the envelope's paging metadata, if present.
    #[must_use]
    pub fn result_info(&self) -> Option<ResultInfo> {
        ResultInfo::from_envelope(&self.body)
    }

    fn first_error(&self) -> Option<&Value> {
        self.body.get("errors").and_then(|errors| match errors {
            Value::Array(items) => items.first(),
            _ => None,
        })
    }

    /// Extracts a human readable message from a failed response.
    ///
    /// The first `errors` entry is rendered as its `message` when it is an
    /// object, verbatim when it is a string and as compact JSON otherwise.
    #[must_use]
    pub fn error_message(&self) -> String {
        match self.first_error() {
            Some(Value::Object(map)) => match map.get("message") {
                Some(Value::String(message)) => message.clone(),
                Some(other) => other.to_string(),
                None => Value::Object(map.clone()).to_string(),
            },
            Some(Value::String(message)) => message.clone(),
            Some(other) => other.to_string(),
            None => UNKNOWN_ERROR.to_string(),
        }
    }

    /// Returns the numeric `code` of the first `errors` entry.
    #[must_use]
    pub fn error_code(&self) -> Option<i64> {
        self.first_error()
            .and_then(|error| error.get("code"))
            .and_then(Value::as_i64)
    }
}
