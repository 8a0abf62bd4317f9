//! Transport error types.
//!
//! - [`HttpResponseError`]: the API answered with a status other than 200
//! - [`InvalidHttpRequestError`]: a request descriptor was rejected before sending
//! - [`HttpError`]: the union of everything the transport can fail with
//!
//! # Example
//!
//! ```rust,ignore
//! use cloudflare_api::{ApiError, HttpError};
//!
//! match client.zone(Args::new().set("zone_id", "abc")).await {
//!     Ok(body) => println!("{}", body["result"]["name"]),
//!     Err(ApiError::Transport(HttpError::Response(e))) => {
//!         println!("Cloudflare said {} ({}): {}", e.code, e.ray_id.unwrap_or_default(), e.message);
//!     }
//!     Err(other) => println!("{other}"),
//! }
//! ```

use thiserror::Error;

/// A non-200 response from the API.
///
/// `message` is taken from the first entry of the envelope's `errors` array,
/// or `"Unknown error"` when none could be extracted.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code.
    pub code: u16,
    /// The extracted error message.
    pub message: String,
    /// Cloudflare's numeric error code from the first `errors` entry.
    pub error_code: Option<i64>,
    /// The `cf-ray` header, for support requests.
    pub ray_id: Option<String>,
}

/// A request descriptor that cannot be sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST was built without a body, or with an empty one.
    #[error("No data to post")]
    MissingBody,
}

/// Unified transport error.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The API answered with a status other than 200.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The request failed validation before sending.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Connection, TLS or timeout failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A 200 response whose body is not JSON.
    #[error("Invalid JSON response: {message}")]
    Decode {
        /// The parser's description of the problem.
        message: String,
    },
}

impl HttpError {
    /// Returns the HTTP status when the API answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
