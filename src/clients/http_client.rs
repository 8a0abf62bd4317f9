//! HTTP client for Cloudflare API communication.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::CloudflareConfig;
use crate::error::ConfigError;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Authenticated HTTP client for the Cloudflare v4 API.
///
/// Every call performs exactly one exchange. There are no retries and
/// nothing is cached between calls.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    default_headers: HashMap<String, String>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TransportInit`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &CloudflareConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Cloudflare API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert(
            "X-Auth-Key".to_string(),
            config.auth_key().as_ref().to_string(),
        );
        default_headers.insert(
            "X-Auth-Email".to_string(),
            config.email().as_ref().to_string(),
        );
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("User-Agent".to_string(), user_agent);

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ConfigError::TransportInit {
            message: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: config.base_url().as_ref().to_string(),
            default_headers,
        })
    }

    /// Returns the API root.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request and returns the response on HTTP 200.
    ///
    /// # Errors
    ///
    /// - [`HttpError::InvalidRequest`] if the descriptor fails validation
    /// - [`HttpError::Network`] on connection or timeout failure
    /// - [`HttpError::Response`] for any status other than 200
    /// - [`HttpError::Decode`] when a 200 body is not JSON
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}/{}", self.base_url, request.path);

        let mut headers = self.default_headers.clone();
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if request.has_payload() {
            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }
        }

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            query_params = request.query.len(),
            "sending Cloudflare API request"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;
        let parsed = serde_json::from_str::<Value>(&body_text);

        let response = HttpResponse::new(
            code,
            res_headers,
            parsed.as_ref().map_or(Value::Null, Clone::clone),
        );

        tracing::debug!(
            status = code,
            ray_id = response.ray_id().unwrap_or("-"),
            path = %request.path,
            "received Cloudflare API response"
        );

        if response.is_ok() {
            return match parsed {
                Ok(_) => Ok(response),
                Err(e) => Err(HttpError::Decode {
                    message: e.to_string(),
                }),
            };
        }

        let message = response.error_message();
        tracing::warn!(
            status = code,
            path = %request.path,
            error = %message,
            "Cloudflare API request failed"
        );

        Err(HttpError::Response(HttpResponseError {
            code,
            message,
            error_code: response.error_code(),
            ray_id: response.ray_id().map(String::from),
        }))
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthEmail, AuthKey, BaseUrl};

    fn create_test_config() -> CloudflareConfig {
        CloudflareConfig::builder()
            .auth_key(AuthKey::new("somefakekey").unwrap())
            .email(AuthEmail::new("foo@bar.com").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_uses_default_base_url() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(client.base_url(), "https://api.cloudflare.com/client/v4");
    }

    #[test]
    fn test_client_uses_configured_base_url() {
        let config = CloudflareConfig::builder()
            .auth_key(AuthKey::new("somefakekey").unwrap())
            .email(AuthEmail::new("foo@bar.com").unwrap())
            .base_url(BaseUrl::new("http://127.0.0.1:4000/client/v4/").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:4000/client/v4");
    }

    #[test]
    fn test_auth_headers_injected() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let headers = client.default_headers();

        assert_eq!(headers.get("X-Auth-Key"), Some(&"somefakekey".to_string()));
        assert_eq!(headers.get("X-Auth-Email"), Some(&"foo@bar.com".to_string()));
        assert_eq!(
            headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
        assert_eq!(headers.get("Accept"), Some(&"application/json".to_string()));
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Cloudflare API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = CloudflareConfig::builder()
            .auth_key(AuthKey::new("somefakekey").unwrap())
            .email(AuthEmail::new("foo@bar.com").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("Cloudflare API Library"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
