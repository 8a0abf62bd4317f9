//! Rate limits of a zone.

use serde_json::{Map, Value};

use crate::client::CloudflareClient;
use crate::clients::{HttpMethod, HttpRequest};
use crate::error::ApiError;
use crate::rest::params::{body_fields, ArgsQuery};
use crate::rest::resources::zone_path;
use crate::rest::Args;

const MATCH_MESSAGE: &str = "match must be a match object https://api.cloudflare.com/#rate-limits-for-a-zone-create-a-ratelimit";
const ACTION_MESSAGE: &str = "action must be a action object https://api.cloudflare.com/#rate-limits-for-a-zone-create-a-ratelimit";

/// Bounds, in seconds and requests, for `threshold` and `period`.
const MIN_LIMIT: i64 = 1;
const MAX_LIMIT: i64 = 86_400;

fn limit_body(args: &Args) -> Result<Map<String, Value>, ApiError> {
    let matching = args.object("match", MATCH_MESSAGE)?;
    let threshold =
        args.int_between("threshold", MIN_LIMIT, MAX_LIMIT, "threshold must be between 1 86400")?;
    let action = args.object("action", ACTION_MESSAGE)?;
    let period = args.int_between("period", MIN_LIMIT, MAX_LIMIT, "period must be between 1 86400")?;
    args.bool_opt("disabled", "disabled must be true || false")?;

    let mut body = Map::new();
    body.insert("match".to_string(), Value::Object(matching.clone()));
    body.insert("threshold".to_string(), Value::from(threshold));
    body.insert("period".to_string(), Value::from(period));
    body.insert("action".to_string(), Value::Object(action.clone()));
    body.extend(body_fields(args, &["disabled", "description", "bypass"]));
    Ok(body)
}

/// Lists the rate limits of a zone.
///
/// # Errors
///
/// Returns an error when `zone_id` is absent or blank.
pub fn zone_rate_limits(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let zone = zone_path(args)?;
    Ok(HttpRequest::builder(HttpMethod::Get, format!("{zone}/rate_limits"))
        .paginate(args)
        .build()?)
}

/// Creates a rate limit.
///
/// # Errors
///
/// Returns an error when `match` or `action` is not an object, or
/// `threshold`/`period` falls outside 1..=86400.
pub fn create_zone_rate_limit(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "match", "threshold", "period", "action"])?;
    let zone = zone_path(args)?;
    let body = limit_body(args)?;
    Ok(HttpRequest::builder(HttpMethod::Post, format!("{zone}/rate_limits"))
        .body(Value::Object(body))
        .build()?)
}

/// Fetches one rate limit.
///
/// # Errors
///
/// Returns an error when `zone_id` or `id` is blank.
pub fn zone_rate_limit(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "id"])?;
    let zone = zone_path(args)?;
    let id = args.id("id", "id required")?;
    Ok(HttpRequest::builder(HttpMethod::Get, format!("{zone}/rate_limits/{id}")).build()?)
}

/// Replaces a rate limit.
///
/// # Errors
///
/// Returns an error under the same rules as [`create_zone_rate_limit`].
pub fn update_zone_rate_limit(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "id", "match", "threshold", "period", "action"])?;
    let zone = zone_path(args)?;
    let id = args.id("id", "id required")?;
    let body = limit_body(args)?;
    Ok(
        HttpRequest::builder(HttpMethod::Put, format!("{zone}/rate_limits/{id}"))
            .body(Value::Object(body))
            .build()?,
    )
}

/// Deletes a rate limit.
///
/// # Errors
///
/// Returns an error when `zone_id` or `id` is blank.
pub fn delete_zone_rate_limit(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "id"])?;
    let zone = zone_path(args)?;
    let id = args.id("id", "zone rate limit id required")?;
    Ok(HttpRequest::builder(HttpMethod::Delete, format!("{zone}/rate_limits/{id}")).build()?)
}

impl CloudflareClient {
    /// Lists rate limits. See [`zone_rate_limits`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn zone_rate_limits(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), zone_rate_limits).await
    }

    /// Creates a rate limit. See [`create_zone_rate_limit`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn create_zone_rate_limit(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), create_zone_rate_limit).await
    }

    /// Fetches a rate limit. See [`zone_rate_limit`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn zone_rate_limit(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), zone_rate_limit).await
    }

    /// Replaces a rate limit. See [`update_zone_rate_limit`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn update_zone_rate_limit(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), update_zone_rate_limit).await
    }

    /// Deletes a rate limit. See [`delete_zone_rate_limit`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn delete_zone_rate_limit(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), delete_zone_rate_limit).await
    }
}
