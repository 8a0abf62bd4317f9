//! Request descriptors.
//!
//! Every endpoint operation reduces to an [`HttpRequest`]: a verb, a path
//! relative to the API root, an optional JSON body, query pairs and extra
//! headers. Descriptors are plain data and can be inspected without I/O.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP verbs used by the Cloudflare API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// A request to be sent to the Cloudflare API.
///
/// # Example
///
/// ```rust
/// use cloudflare_api::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Post, "zones/abc/dns_records")
///     .body(json!({"name": "www", "type": "A", "content": "1.2.3.4"}))
///     .build()
///     .unwrap();
///
/// let listing = HttpRequest::builder(HttpMethod::Get, "zones")
///     .query_param("per_page", "50")
///     .query_param("page", "1")
///     .build()
///     .unwrap();
/// assert_eq!(listing.query[0].0, "page");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP verb.
    pub http_method: HttpMethod,
    /// Path relative to the API root, without a leading `/`.
    pub path: String,
    /// JSON body, if any.
    pub body: Option<Value>,
    /// Query pairs, sorted stably by key.
    pub query: Vec<(String, String)>,
    /// Headers merged over the client defaults.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a builder for the given verb and path.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Returns `true` when a body should be serialized onto the wire.
    ///
    /// Bodies are never sent with GET, and empty objects or arrays are
    /// treated as absent.
    #[must_use]
    pub fn has_payload(&self) -> bool {
        if self.http_method == HttpMethod::Get {
            return false;
        }
        match &self.body {
            None | Some(Value::Null) => false,
            Some(Value::Object(map)) => !map.is_empty(),
            Some(Value::Array(items)) => !items.is_empty(),
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }

    /// Returns the first value of a query parameter.
    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBody`] for a POST without a
    /// non-empty body.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.http_method == HttpMethod::Post && !self.has_payload() {
            return Err(InvalidHttpRequestError::MissingBody);
        }
        Ok(())
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<Value>,
    query: Vec<(String, String)>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: Vec::new(),
            extra_headers: None,
        }
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Adds a query pair.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds one `key[]` pair per value.
    #[must_use]
    pub fn query_array<I, S>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = format!("{key}[]");
        for value in values {
            self.query.push((name.clone(), value.into()));
        }
        self
    }

    /// Adds a header merged over the client defaults.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds and validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails
    /// [`HttpRequest::verify`].
    pub fn build(mut self) -> Result<HttpRequest, InvalidHttpRequestError> {
        // stable: repeated `key[]` pairs keep their caller order
        self.query.sort_by(|a, b| a.0.cmp(&b.0));
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}
