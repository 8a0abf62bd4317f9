//! The Cloudflare API client.
//!
//! [`CloudflareClient`] owns an authenticated transport and exposes one async
//! method per endpoint operation. The methods are defined next to their
//! request builders in [`rest::resources`](crate::rest::resources).

use serde_json::Value;

use crate::clients::{HttpClient, HttpRequest};
use crate::config::{AuthEmail, AuthKey, CloudflareConfig};
use crate::error::{ApiError, ConfigError};
use crate::rest::Args;

/// An authenticated client for the Cloudflare v4 API.
///
/// The client is immutable after construction. Every operation validates its
/// arguments locally, sends at most one request and returns the decoded
/// response envelope unchanged.
///
/// # Thread Safety
///
/// `CloudflareClient` is `Send + Sync`; wrap it in an `Arc` to share it
/// across tasks.
///
/// # Example
///
/// ```rust,ignore
/// use cloudflare_api::{Args, CloudflareClient};
///
/// let client = CloudflareClient::with_credentials(Some("somefakekey"), Some("foo@bar.com"))?;
///
/// let record = client
///     .create_dns_record(
///         Args::new()
///             .set("zone_id", "023e105f4ecef8ad9ca31a8372d0c353")
///             .set("name", "www.example.com")
///             .set("type", "A")
///             .set("content", "198.51.100.4"),
///     )
///     .await?;
/// println!("{}", record["result"]["id"]);
/// ```
#[derive(Debug)]
pub struct CloudflareClient {
    http: HttpClient,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CloudflareClient>();
};

impl CloudflareClient {
    /// Creates a client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TransportInit`] if the HTTP client cannot be
    /// initialized.
    pub fn new(config: &CloudflareConfig) -> Result<Self, ConfigError> {
        let http = HttpClient::new(config)?;
        tracing::debug!(base_url = %http.base_url(), "created Cloudflare client");
        Ok(Self { http })
    }

    /// Creates a client against the public API from raw credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAuthKey`] when `auth_key` is `None` or
    /// empty, checked before [`ConfigError::MissingEmail`] for `email`.
    pub fn with_credentials(
        auth_key: Option<&str>,
        email: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let auth_key = AuthKey::new(auth_key.ok_or(ConfigError::MissingAuthKey)?)?;
        let email = AuthEmail::new(email.ok_or(ConfigError::MissingEmail)?)?;
        let config = CloudflareConfig::builder()
            .auth_key(auth_key)
            .email(email)
            .build()?;
        Self::new(&config)
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http
    }

    /// Sends a prebuilt request and returns the response body.
    ///
    /// Use this for endpoints without a dedicated method, or to send a
    /// descriptor produced by one of the pure builders in
    /// [`rest::resources`](crate::rest::resources).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the request cannot be sent or the
    /// API answers with a status other than 200.
    pub async fn send(&self, request: HttpRequest) -> Result<Value, ApiError> {
        let response = self.http.request(request).await?;
        Ok(response.body)
    }

    /// Validates `args` with `build` and sends the resulting request.
    pub(crate) async fn dispatch<F>(&self, args: Args, build: F) -> Result<Value, ApiError>
    where
        F: FnOnce(&Args) -> Result<HttpRequest, ApiError>,
    {
        let request = build(&args)?;
        self.send(request).await
    }
}
