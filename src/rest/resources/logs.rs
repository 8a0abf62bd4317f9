//! Enterprise request logs (`zones/{id}/logs/requests`).
//!
//! The listing endpoints stream large payloads, so they ask for gzip.

use serde_json::Value;

use crate::client::CloudflareClient;
use crate::clients::{HttpMethod, HttpRequest, HttpRequestBuilder};
use crate::error::ApiError;
use crate::rest::params::ArgsQuery;
use crate::rest::resources::zone_path;
use crate::rest::Args;

fn requests_path(args: &Args) -> Result<String, ApiError> {
    Ok(format!("{}/logs/requests", zone_path(args)?))
}

fn gzip(builder: HttpRequestBuilder) -> HttpRequestBuilder {
    builder.header("Accept-Encoding", "gzip")
}

/// Lists logs between `start_time` and an optional `end_time`.
///
/// # Errors
///
/// Returns an error when either bound is not a Unix timestamp.
pub fn get_logs_by_time(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "start_time"])?;
    let path = requests_path(args)?;
    args.required("start_time", "start_time required")?;
    let start = args.unix_timestamp("start_time", "start_time must be a valid unix timestamp")?;
    let end = args.unix_timestamp_opt("end_time", "end_time must be a valid unix timestamp")?;

    let mut builder = gzip(HttpRequest::builder(HttpMethod::Get, path))
        .query_param("start", start.to_string());
    if let Some(end) = end {
        builder = builder.query_param("end", end.to_string());
    }
    Ok(builder.query_opt(args, "count").build()?)
}

/// Fetches the log entry of one ray id.
///
/// # Errors
///
/// Returns an error when `ray_id` is absent or blank.
pub fn get_log(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "ray_id"])?;
    let path = requests_path(args)?;
    let ray_id = args.id("ray_id", "ray_id required")?;
    Ok(HttpRequest::builder(HttpMethod::Get, format!("{path}/{ray_id}")).build()?)
}

/// Lists logs recorded after `ray_id`.
///
/// # Errors
///
/// Returns an error when `ray_id` is blank or `end_time` is not a Unix
/// timestamp.
pub fn get_logs_since(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "ray_id"])?;
    let path = requests_path(args)?;
    let ray_id = args.id("ray_id", "ray_id required")?;
    let end = args.unix_timestamp_opt("end_time", "end time must be a valid unix timestamp")?;

    let mut builder = gzip(HttpRequest::builder(HttpMethod::Get, format!("{path}/{ray_id}")))
        .query_opt_as(args, "ray_id", "start_id");
    if let Some(end) = end {
        builder = builder.query_param("end", end.to_string());
    }
    Ok(builder.query_opt(args, "count").build()?)
}

impl CloudflareClient {
    /// Lists request logs by time. See [`get_logs_by_time`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn get_logs_by_time(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), get_logs_by_time).await
    }

    /// Fetches one request log. See [`get_log`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn get_log(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), get_log).await
    }

    /// Lists request logs after a ray id. See [`get_logs_since`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn get_logs_since(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), get_logs_since).await
    }
}
