//! Custom SSL certificates uploaded to a zone (`custom_certificates`).

use serde_json::{json, Map, Value};

use crate::client::CloudflareClient;
use crate::clients::{HttpMethod, HttpRequest};
use crate::error::ApiError;
use crate::rest::params::{body_fields, ArgsQuery};
use crate::rest::resources::{zone_path, BUNDLE_MESSAGE, BUNDLE_METHODS};
use crate::rest::Args;

const ORDERS: [&str; 4] = ["status", "issuer", "priority", "expires_on"];
const ORDER_MESSAGE: &str = r#"order must be one of ["status", "issuer", "priority", "expires_on"]"#;

fn certificate_path(args: &Args, key: &'static str, message: &str) -> Result<String, ApiError> {
    let zone = zone_path(args)?;
    let id = args.id(key, message)?;
    Ok(format!("{zone}/custom_certificates/{id}"))
}

/// Uploads a certificate and private key.
///
/// `bundle_method` defaults to `ubiquitous`.
///
/// # Errors
///
/// Returns an error when the key or certificate is blank, or the bundle
/// method is unknown.
pub fn create_custom_ssl(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "certificate", "private_key"])?;
    let zone = zone_path(args)?;
    let private_key = args.required("private_key", "private_key required")?;
    let certificate = args.required("certificate", "certificate required")?;
    let bundle_method =
        args.one_of_or("bundle_method", &BUNDLE_METHODS, "ubiquitous", BUNDLE_MESSAGE)?;

    Ok(
        HttpRequest::builder(HttpMethod::Post, format!("{zone}/custom_certificates"))
            .body(json!({
                "certificate": certificate,
                "private_key": private_key,
                "bundle_method": bundle_method,
            }))
            .build()?,
    )
}

/// Lists custom certificates.
///
/// # Errors
///
/// Returns an error for an unknown `order`, `direction` or `match`.
pub fn ssl_configurations(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let zone = zone_path(args)?;
    args.one_of("order", &ORDERS, ORDER_MESSAGE)?;
    let direction = args.one_of_or(
        "direction",
        &["asc", "desc"],
        "asc",
        "direction must be asc || desc",
    )?;
    let matching = args.one_of_or("match", &["all", "any"], "all", "match must be all || any")?;

    Ok(
        HttpRequest::builder(HttpMethod::Get, format!("{zone}/custom_certificates"))
            .query_opt(args, "order")
            .query_param("direction", direction)
            .query_param("match", matching)
            .paginate(args)
            .build()?,
    )
}

/// Fetches one custom certificate by `configuration_id`.
///
/// # Errors
///
/// Returns an error when `zone_id` or `configuration_id` is blank.
pub fn ssl_configuration(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "configuration_id"])?;
    let path = certificate_path(args, "configuration_id", "ssl configuration id required")?;
    Ok(HttpRequest::builder(HttpMethod::Get, path).build()?)
}

/// Replaces the key, certificate or bundle method of a custom certificate.
///
/// # Errors
///
/// Returns an error when an id is blank or the bundle method is unknown.
pub fn update_ssl_configuration(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "id"])?;
    let path = certificate_path(args, "id", "id required")?;
    args.one_of("bundle_method", &BUNDLE_METHODS, BUNDLE_MESSAGE)?;

    let body: Map<String, Value> =
        body_fields(args, &["private_key", "certificate", "bundle_method"]);
    Ok(HttpRequest::builder(HttpMethod::Patch, path)
        .body(Value::Object(body))
        .build()?)
}

/// Reorders custom certificates.
///
/// `data` is an array of `{id, priority}` objects.
///
/// # Errors
///
/// Returns an error when `data` is not a non-empty array.
pub fn prioritize_ssl_configurations(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let zone = zone_path(args)?;
    let data =
        args.non_empty_list("data", "must provide an array of certifiates and priorities")?;

    Ok(
        HttpRequest::builder(HttpMethod::Put, format!("{zone}/custom_certificates/prioritize"))
            .body(json!({ "certificates": data }))
            .build()?,
    )
}

/// Deletes a custom certificate.
///
/// # Errors
///
/// Returns an error when `zone_id` or `id` is blank.
pub fn delete_ssl_configuration(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "id"])?;
    let path = certificate_path(args, "id", "id required")?;
    Ok(HttpRequest::builder(HttpMethod::Delete, path).build()?)
}

impl CloudflareClient {
    /// Uploads a custom certificate. See [`create_custom_ssl`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn create_custom_ssl(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), create_custom_ssl).await
    }

    /// Lists custom certificates. See [`ssl_configurations`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn ssl_configurations(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), ssl_configurations).await
    }

    /// Fetches a custom certificate. See [`ssl_configuration`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn ssl_configuration(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), ssl_configuration).await
    }

    /// Updates a custom certificate. See [`update_ssl_configuration`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn update_ssl_configuration(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), update_ssl_configuration).await
    }

    /// Reorders custom certificates. See [`prioritize_ssl_configurations`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn prioritize_ssl_configurations(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), prioritize_ssl_configurations).await
    }

    /// Deletes a custom certificate. See [`delete_ssl_configuration`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn delete_ssl_configuration(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), delete_ssl_configuration).await
    }
}
