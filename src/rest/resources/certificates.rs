//! Origin CA certificates (`certificates`).

use serde_json::{Map, Value};

use crate::client::CloudflareClient;
use crate::clients::{HttpMethod, HttpRequest};
use crate::error::ApiError;
use crate::rest::params::{body_fields, ArgsQuery};
use crate::rest::Args;

/// Validity periods, in days, the CA will issue for.
pub const VALIDITY_DAYS: [i64; 7] = [7, 30, 90, 365, 730, 1095, 5475];

/// Key types the CA will issue.
pub const REQUEST_TYPES: [&str; 3] = ["origin-rsa", "origin-ecc", "keyless-certificate"];

const DEFAULT_VALIDITY: i64 = 5475;

fn certificate_path(args: &Args) -> Result<String, ApiError> {
    Ok(format!("certificates/{}", args.id("id", "id required")?))
}

/// Lists origin certificates, optionally for one `zone_id`.
///
/// # Errors
///
/// Returns an error only when the request descriptor fails its own checks.
pub fn certificates(args: &Args) -> Result<HttpRequest, ApiError> {
    Ok(HttpRequest::builder(HttpMethod::Get, "certificates")
        .query_opt(args, "zone_id")
        .build()?)
}

/// Issues an origin certificate for `hostnames`.
///
/// Validity defaults to 5475 days and the request type to `origin-rsa`.
///
/// # Errors
///
/// Returns an error when `hostnames` is not a non-empty array, or the
/// validity or request type is not recognised.
pub fn create_certificate(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["hostnames"])?;
    let hostnames = args.list("hostnames", "hostnames must be an array")?;
    if hostnames.is_empty() {
        return Err(ApiError::invalid("hostnames", "hostnames cannot be empty"));
    }

    let validity = match args.value("requested_validity") {
        None => DEFAULT_VALIDITY,
        Some(value) => value
            .as_i64()
            .filter(|days| VALIDITY_DAYS.contains(days))
            .ok_or_else(|| {
                ApiError::invalid(
                    "requested_validity",
                    "requested_validity must be one of [7, 30, 90, 365, 730, 1095, 5475]",
                )
            })?,
    };
    let request_type = args.one_of_or(
        "request_type",
        &REQUEST_TYPES,
        "origin-rsa",
        r#"request type must be one of ["origin-rsa", "origin-ecc", "keyless-certificate"]"#,
    )?;

    let mut body = Map::new();
    body.insert("hostnames".to_string(), Value::Array(hostnames.clone()));
    body.insert("requested_validity".to_string(), Value::from(validity));
    body.insert("request_type".to_string(), Value::from(request_type));
    body.extend(body_fields(args, &["csr"]));
    Ok(HttpRequest::builder(HttpMethod::Post, "certificates")
        .body(Value::Object(body))
        .build()?)
}

/// Fetches one origin certificate.
///
/// # Errors
///
/// Returns an error when `id` is absent or blank.
pub fn certificate(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["id"])?;
    Ok(HttpRequest::builder(HttpMethod::Get, certificate_path(args)?).build()?)
}

/// Revokes an origin certificate.
///
/// # Errors
///
/// Returns an error when `id` is absent or blank.
pub fn revoke_certificate(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["id"])?;
    Ok(HttpRequest::builder(HttpMethod::Delete, certificate_path(args)?).build()?)
}

impl CloudflareClient {
    /// Lists origin certificates. See [`certificates`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on a failed request.
    pub async fn certificates(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), certificates).await
    }

    /// Issues an origin certificate. See [`create_certificate`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn create_certificate(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), create_certificate).await
    }

    /// Fetches an origin certificate. See [`certificate`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn certificate(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), certificate).await
    }

    /// Revokes an origin certificate. See [`revoke_certificate`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn revoke_certificate(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), revoke_certificate).await
    }
}
