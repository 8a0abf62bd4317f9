//! Zone SSL: certificate analysis, certificate packs and verification.

use serde_json::{json, Map, Value};

use crate::client::CloudflareClient;
use crate::clients::{HttpMethod, HttpRequest};
use crate::error::ApiError;
use crate::rest::params::body_fields;
use crate::rest::resources::{zone_path, BUNDLE_MESSAGE, BUNDLE_METHODS};
use crate::rest::Args;

/// Checks how a certificate would be bundled.
///
/// # Errors
///
/// Returns an error for an unknown bundle method.
pub fn analyze_certificate(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let zone = zone_path(args)?;
    let bundle_method =
        args.one_of_or("bundle_method", &BUNDLE_METHODS, "ubiquitous", BUNDLE_MESSAGE)?;

    let mut body: Map<String, Value> = body_fields(args, &["certificate"]);
    body.insert("bundle_method".to_string(), Value::from(bundle_method));
    Ok(HttpRequest::builder(HttpMethod::Post, format!("{zone}/ssl/analyze"))
        .body(Value::Object(body))
        .build()?)
}

/// Lists the certificate packs of a zone.
///
/// # Errors
///
/// Returns an error when `zone_id` is absent or blank.
pub fn certificate_packs(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let zone = zone_path(args)?;
    Ok(HttpRequest::builder(HttpMethod::Get, format!("{zone}/ssl/certificate_packs")).build()?)
}

/// Orders a dedicated certificate pack for `hosts`.
///
/// # Errors
///
/// Returns an error unless `hosts` is a non-empty array.
pub fn order_certificate_packs(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let zone = zone_path(args)?;
    let hosts = args.non_empty_list("hosts", "hosts must be an array of hostnames")?;
    Ok(
        HttpRequest::builder(HttpMethod::Post, format!("{zone}/ssl/certificate_packs"))
            .body(json!({ "hosts": hosts }))
            .build()?,
    )
}

/// Replaces the hosts of a certificate pack.
///
/// # Errors
///
/// Returns an error when `id` is blank or `hosts` is not a non-empty array.
pub fn update_certificate_pack(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "id", "hosts"])?;
    let zone = zone_path(args)?;
    let id = args.id("id", "id required")?;
    let hosts = args.non_empty_list("hosts", "hosts must be an array of hosts")?;
    Ok(
        HttpRequest::builder(HttpMethod::Patch, format!("{zone}/ssl/certificate_packs/{id}"))
            .body(json!({ "hosts": hosts }))
            .build()?,
    )
}

/// Reads SSL verification status, asking for a retry when
/// `retry_verification` is `true`.
///
/// # Errors
///
/// Returns an error when `zone_id` is blank or `retry_verification` is not
/// a boolean.
pub fn ssl_verification(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let zone = zone_path(args)?;
    let retry = args.bool_opt(
        "retry_verification",
        "retry_verification must be true or false",
    )?;

    let mut builder = HttpRequest::builder(HttpMethod::Get, format!("{zone}/ssl/verification"));
    if retry == Some(true) {
        builder = builder.query_param("retry", "true");
    }
    Ok(builder.build()?)
}

impl CloudflareClient {
    /// Analyzes a certificate. See [`analyze_certificate`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn analyze_certificate(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), analyze_certificate).await
    }

    /// Lists certificate packs. See [`certificate_packs`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn certificate_packs(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), certificate_packs).await
    }

    /// Orders a certificate pack. See [`order_certificate_packs`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn order_certificate_packs(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), order_certificate_packs).await
    }

    /// Updates a certificate pack. See [`update_certificate_pack`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn update_certificate_pack(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), update_certificate_pack).await
    }

    /// Reads SSL verification status. See [`ssl_verification`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn ssl_verification(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), ssl_verification).await
    }
}
