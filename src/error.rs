//! Error types for the Cloudflare API client.
//!
//! Two families live here:
//!
//! - [`ConfigError`]: raised while building a [`CloudflareConfig`](crate::CloudflareConfig)
//!   or a [`CloudflareClient`](crate::CloudflareClient). A client that failed
//!   to configure is never handed out.
//! - [`ApiError`]: the single error type returned by every endpoint
//!   operation. It separates structural argument errors, field validation
//!   errors, cross-field violations, transport failures and configuration
//!   failures, while its `Display` output reproduces the exact message
//!   callers have historically matched against.
//!
//! # Example
//!
//! ```rust
//! use cloudflare_api::{ApiError, Args};
//! use cloudflare_api::rest::resources::dns;
//!
//! let err = dns::create_dns_record(&Args::new()).unwrap_err();
//! assert!(matches!(err, ApiError::MissingRequiredField { .. }));
//! assert_eq!(err.to_string(), "missing keywords: zone_id, name, type, content");
//! ```

use thiserror::Error;

use crate::clients::{HttpError, InvalidHttpRequestError};

/// Errors that can occur while configuring the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No auth key was supplied, or it was empty.
    #[error("Missing auth_key")]
    MissingAuthKey,

    /// No account email was supplied, or it was empty.
    #[error("missing email")]
    MissingEmail,

    /// The API base URL is not an absolute http(s) URL.
    #[error("Invalid base URL '{url}'. Expected an absolute URL such as 'https://api.cloudflare.com/client/v4'.")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
    },

    /// The underlying HTTP client could not be initialized.
    #[error("Failed to create HTTP client: {message}")]
    TransportInit {
        /// Description of the failure.
        message: String,
    },
}

/// Errors returned by endpoint operations.
///
/// Validation variants are produced before any network I/O takes place, so
/// receiving one guarantees that no request was sent.
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more structurally required keywords were not supplied at all.
    ///
    /// Fields are listed in the order the operation declares them.
    #[error("missing {}: {}", keyword_label(.fields), .fields.join(", "))]
    MissingRequiredField {
        /// Names of the absent keywords.
        fields: Vec<&'static str>,
    },

    /// A supplied field is null, of the wrong type, or outside its allowed values.
    #[error("{message}")]
    InvalidValue {
        /// The offending field.
        field: &'static str,
        /// Human-readable message, worded per operation.
        message: String,
    },

    /// A rule spanning several fields was violated.
    #[error("{message}")]
    CrossFieldViolation {
        /// Human-readable message, worded per operation.
        message: String,
    },

    /// The request was sent and failed, or could not be sent.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// Client configuration was invalid.
    #[error(transparent)]
    Configuration(#[from] ConfigError),
}

impl ApiError {
    /// Builds an [`ApiError::InvalidValue`].
    #[must_use]
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }

    /// Builds an [`ApiError::CrossFieldViolation`].
    #[must_use]
    pub fn cross_field(message: impl Into<String>) -> Self {
        Self::CrossFieldViolation {
            message: message.into(),
        }
    }

    /// Returns `true` when the error was raised before any request was sent.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingRequiredField { .. }
                | Self::InvalidValue { .. }
                | Self::CrossFieldViolation { .. }
        )
    }
}

impl From<InvalidHttpRequestError> for ApiError {
    fn from(error: InvalidHttpRequestError) -> Self {
        Self::Transport(HttpError::InvalidRequest(error))
    }
}

fn keyword_label(fields: &[&'static str]) -> &'static str {
    if fields.len() == 1 {
        "keyword"
    } else {
        "keywords"
    }
}
