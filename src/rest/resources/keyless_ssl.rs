//! Keyless SSL configurations (`keyless_certificates`).

use serde_json::{Map, Value};

use crate::client::CloudflareClient;
use crate::clients::{HttpMethod, HttpRequest};
use crate::error::ApiError;
use crate::rest::params::body_fields;
use crate::rest::resources::{zone_path, BUNDLE_MESSAGE, BUNDLE_METHODS};
use crate::rest::Args;

fn keyless_path(args: &Args) -> Result<String, ApiError> {
    let zone = zone_path(args)?;
    let id = args.id("id", "id required")?;
    Ok(format!("{zone}/keyless_certificates/{id}"))
}

/// Registers a keyless SSL server.
///
/// # Errors
///
/// Returns an error when `host` or `certificate` is blank, or the bundle
/// method is unknown.
pub fn create_keyless_ssl_config(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "host", "port", "certificate"])?;
    let zone = zone_path(args)?;
    let host = args.required("host", "host required")?;
    let certificate = args.required("certificate", "certificate required")?;
    let bundle_method =
        args.one_of_or("bundle_method", &BUNDLE_METHODS, "ubiquitous", BUNDLE_MESSAGE)?;

    let mut body = Map::new();
    body.insert("host".to_string(), host.clone());
    body.extend(body_fields(args, &["port"]));
    body.insert("certificate".to_string(), certificate.clone());
    body.insert("bundle_method".to_string(), Value::from(bundle_method));
    body.extend(body_fields(args, &["name"]));

    Ok(
        HttpRequest::builder(HttpMethod::Post, format!("{zone}/keyless_certificates"))
            .body(Value::Object(body))
            .build()?,
    )
}

/// Lists the keyless SSL configurations of a zone.
///
/// # Errors
///
/// Returns an error when `zone_id` is absent or blank.
pub fn keyless_ssl_configs(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let zone = zone_path(args)?;
    Ok(HttpRequest::builder(HttpMethod::Get, format!("{zone}/keyless_certificates")).build()?)
}

/// Fetches one keyless SSL configuration.
///
/// # Errors
///
/// Returns an error when `zone_id` or `id` is blank.
pub fn keyless_ssl_config(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "id"])?;
    Ok(HttpRequest::builder(HttpMethod::Get, keyless_path(args)?).build()?)
}

/// Updates host, name, port or enabled flag of a keyless configuration.
///
/// # Errors
///
/// Returns an error when an id is blank or `enabled` is not a boolean.
pub fn update_keyless_ssl_config(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "id"])?;
    let path = keyless_path(args)?;
    args.bool_opt("enabled", "enabled must be true||false")?;

    Ok(HttpRequest::builder(HttpMethod::Patch, path)
        .body(Value::Object(body_fields(
            args,
            &["host", "name", "port", "enabled"],
        )))
        .build()?)
}

/// Deletes a keyless SSL configuration.
///
/// # Errors
///
/// Returns an error when `zone_id` or `id` is blank.
pub fn delete_keyless_ssl_config(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "id"])?;
    Ok(HttpRequest::builder(HttpMethod::Delete, keyless_path(args)?).build()?)
}

impl CloudflareClient {
    /// Registers a keyless SSL server. See [`create_keyless_ssl_config`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn create_keyless_ssl_config(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), create_keyless_ssl_config).await
    }

    /// Lists keyless SSL configurations. See [`keyless_ssl_configs`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn keyless_ssl_configs(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), keyless_ssl_configs).await
    }

    /// Fetches a keyless SSL configuration. See [`keyless_ssl_config`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn keyless_ssl_config(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), keyless_ssl_config).await
    }

    /// Updates a keyless SSL configuration. See [`update_keyless_ssl_config`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn update_keyless_ssl_config(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), update_keyless_ssl_config).await
    }

    /// Deletes a keyless SSL configuration. See [`delete_keyless_ssl_config`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn delete_keyless_ssl_config(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), delete_keyless_ssl_config).await
    }
}
