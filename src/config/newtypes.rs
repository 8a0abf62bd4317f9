//! Validated newtype wrappers for configuration values.
//!
//! Credentials and the API root are checked once, when they are constructed,
//! so the client never has to re-validate them per request.

use crate::error::ConfigError;
use std::fmt;

/// A validated Cloudflare API auth key, sent as `X-Auth-Key`.
///
/// The `Debug` implementation masks the value so the key cannot leak through
/// logs or panic messages.
///
/// # Example
///
/// ```rust
/// use cloudflare_api::AuthKey;
///
/// let key = AuthKey::new("c2547eb745079dac9320b638f5e225cf483cc5cfdda41").unwrap();
/// assert_eq!(format!("{:?}", key), "AuthKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthKey(String);

impl AuthKey {
    /// Creates a new auth key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAuthKey`] if the key is empty or blank.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::MissingAuthKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for AuthKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthKey(*****)")
    }
}

/// The account email, sent as `X-Auth-Email`.
///
/// # Example
///
/// ```rust
/// use cloudflare_api::AuthEmail;
///
/// let email = AuthEmail::new("user@example.com").unwrap();
/// assert_eq!(email.as_ref(), "user@example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthEmail(String);

impl AuthEmail {
    /// Creates a new account email.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEmail`] if the email is empty or blank.
    pub fn new(email: impl Into<String>) -> Result<Self, ConfigError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(ConfigError::MissingEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for AuthEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated REST API root such as `https://api.cloudflare.com/client/v4`.
///
/// Trailing slashes are stripped so paths can be appended with a single `/`.
///
/// # Example
///
/// ```rust
/// use cloudflare_api::BaseUrl;
///
/// let url = BaseUrl::new("http://127.0.0.1:8080/client/v4/").unwrap();
/// assert_eq!(url.as_ref(), "http://127.0.0.1:8080/client/v4");
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), "127.0.0.1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// The public Cloudflare v4 API root.
    pub const CLOUDFLARE_V4: &'static str = "https://api.cloudflare.com/client/v4";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] unless the URL has an `http` or
    /// `https` scheme and a non-empty host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        let url = Self::CLOUDFLARE_V4.to_string();
        Self {
            scheme_end: 5,
            host_start: 8,
            host_end: 26,
            url,
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
