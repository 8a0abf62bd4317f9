//! Configuration types for the Cloudflare API client.
//!
//! # Overview
//!
//! - [`CloudflareConfig`]: credentials, API root and transport settings
//! - [`CloudflareConfigBuilder`]: a builder for [`CloudflareConfig`]
//! - [`AuthKey`]: a validated API key with masked debug output
//! - [`AuthEmail`]: a validated account email
//! - [`BaseUrl`]: a validated API root URL
//!
//! # Example
//!
//! ```rust
//! use cloudflare_api::{AuthEmail, AuthKey, CloudflareConfig};
//!
//! let config = CloudflareConfig::builder()
//!     .auth_key(AuthKey::new("somefakekey").unwrap())
//!     .email(AuthEmail::new("foo@bar.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.cloudflare.com/client/v4");
//! ```

mod newtypes;

pub use newtypes::{AuthEmail, AuthKey, BaseUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for a [`CloudflareClient`](crate::CloudflareClient).
///
/// `CloudflareConfig` is `Clone`, `Send` and `Sync`. Build one with
/// [`CloudflareConfig::builder`].
#[derive(Clone, Debug)]
pub struct CloudflareConfig {
    auth_key: AuthKey,
    email: AuthEmail,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl CloudflareConfig {
    /// Creates a new builder for constructing a `CloudflareConfig`.
    #[must_use]
    pub fn builder() -> CloudflareConfigBuilder {
        CloudflareConfigBuilder::new()
    }

    /// Returns the auth key.
    #[must_use]
    pub const fn auth_key(&self) -> &AuthKey {
        &self.auth_key
    }

    /// Returns the account email.
    #[must_use]
    pub const fn email(&self) -> &AuthEmail {
        &self.email
    }

    /// Returns the API root every request path is appended to.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CloudflareConfig>();
};

/// Builder for [`CloudflareConfig`].
///
/// `auth_key` and `email` are required. The base URL defaults to
/// [`BaseUrl::CLOUDFLARE_V4`]; no timeout is applied unless one is set.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use cloudflare_api::{AuthEmail, AuthKey, BaseUrl, CloudflareConfig};
///
/// let config = CloudflareConfig::builder()
///     .auth_key(AuthKey::new("key").unwrap())
///     .email(AuthEmail::new("ops@example.com").unwrap())
///     .base_url(BaseUrl::new("http://127.0.0.1:9000/client/v4").unwrap())
///     .user_agent_prefix("dns-sync/2.1")
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.user_agent_prefix(), Some("dns-sync/2.1"));
/// ```
#[derive(Debug, Default)]
pub struct CloudflareConfigBuilder {
    auth_key: Option<AuthKey>,
    email: Option<AuthEmail>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl CloudflareConfigBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the auth key (required).
    #[must_use]
    pub fn auth_key(mut self, key: AuthKey) -> Self {
        self.auth_key = Some(key);
        self
    }

    /// Sets the account email (required).
    #[must_use]
    pub fn email(mut self, email: AuthEmail) -> Self {
        self.email = Some(email);
        self
    }

    /// Overrides the API root.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets a prefix prepended to the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a total request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`CloudflareConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAuthKey`] when no key was set, then
    /// [`ConfigError::MissingEmail`] when no email was set.
    pub fn build(self) -> Result<CloudflareConfig, ConfigError> {
        let auth_key = self.auth_key.ok_or(ConfigError::MissingAuthKey)?;
        let email = self.email.ok_or(ConfigError::MissingEmail)?;

        Ok(CloudflareConfig {
            auth_key,
            email,
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
