//! Virtual DNS clusters, owned by the user or by an organization.

use std::fmt;

use serde_json::{Map, Value};

use crate::client::CloudflareClient;
use crate::clients::{HttpMethod, HttpRequest};
use crate::error::ApiError;
use crate::rest::params::{body_fields, query_text, ArgsQuery};
use crate::rest::resources::org_path;
use crate::rest::Args;

const ORIGIN_IPS_MESSAGE: &str = "origin_ips must be an array of ips (v4 or v6)";
const DEPRECATE_MESSAGE: &str = "deprecate_any_request must be boolean";
const OPTIONAL_FIELDS: [&str; 4] = [
    "deprecate_any_request",
    "minimum_cache_ttl",
    "maximum_cache_ttl",
    "ratelimit",
];

/// Owner of a virtual DNS cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// Clusters under `user/virtual_dns`.
    User,
    /// Clusters under `organizations/{org_id}/virtual_dns`.
    Organization,
}

impl Scope {
    /// Reads `scope` from the arguments.
    ///
    /// # Errors
    ///
    /// Returns an error unless `scope` is `user` or `organization`.
    pub fn from_args(args: &Args) -> Result<Self, ApiError> {
        match args.value("scope").and_then(Value::as_str) {
            Some("user") => Ok(Self::User),
            Some("organization") => Ok(Self::Organization),
            _ => Err(ApiError::invalid("scope", "scope must be user or organization")),
        }
    }

    /// Collection path for this scope; organization scope needs `org_id`.
    fn path(self, args: &Args) -> Result<String, ApiError> {
        match self {
            Self::User => Ok("user/virtual_dns".to_string()),
            Self::Organization => Ok(format!("{}/virtual_dns", org_path(args)?)),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Organization => write!(f, "organization"),
        }
    }
}

fn cluster_id(args: &Args) -> Result<String, ApiError> {
    args.id("id", "id required")
}

/// Lists virtual DNS clusters.
///
/// # Errors
///
/// Returns an error for an unknown scope or a missing organization id.
pub fn virtual_dns_clusters(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["scope"])?;
    let path = Scope::from_args(args)?.path(args)?;
    Ok(HttpRequest::builder(HttpMethod::Get, path).build()?)
}

/// Creates a virtual DNS cluster in front of `origin_ips`.
///
/// # Errors
///
/// Returns an error when `name` is blank, `origin_ips` is not an array,
/// `deprecate_any_request` is not a boolean, or the scope is invalid.
pub fn create_virtual_dns_cluster(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["name", "origin_ips", "scope"])?;
    let name = args.required("name", "name required")?;
    let origin_ips = args.list("origin_ips", ORIGIN_IPS_MESSAGE)?;
    args.bool_opt("deprecate_any_request", DEPRECATE_MESSAGE)?;
    let path = Scope::from_args(args)?.path(args)?;

    let mut body = Map::new();
    body.insert("name".to_string(), name.clone());
    body.insert("origin_ips".to_string(), Value::Array(origin_ips.clone()));
    body.extend(body_fields(args, &OPTIONAL_FIELDS));
    Ok(HttpRequest::builder(HttpMethod::Post, path)
        .body(Value::Object(body))
        .build()?)
}

/// Fetches one cluster.
///
/// # Errors
///
/// Returns an error when `id` is blank or the scope is invalid.
pub fn virtual_dns_cluster(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["id", "scope"])?;
    let id = cluster_id(args)?;
    let path = Scope::from_args(args)?.path(args)?;
    Ok(HttpRequest::builder(HttpMethod::Get, format!("{path}/{id}")).build()?)
}

/// Deletes a cluster.
///
/// # Errors
///
/// Returns an error when `id` is blank or the scope is invalid.
pub fn delete_virtual_dns_cluster(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["id", "scope"])?;
    let id = cluster_id(args)?;
    let path = Scope::from_args(args)?.path(args)?;
    Ok(HttpRequest::builder(HttpMethod::Delete, format!("{path}/{id}")).build()?)
}

/// Modifies a cluster; only supplied fields are sent.
///
/// # Errors
///
/// Returns an error when `id` is blank, `origin_ips` is not an array,
/// `deprecate_any_request` is not a boolean, or the scope is invalid.
pub fn update_virtual_dns_cluster(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["id", "scope"])?;
    let id = cluster_id(args)?;
    if args.value("origin_ips").is_some() {
        args.list("origin_ips", ORIGIN_IPS_MESSAGE)?;
    }
    args.bool_opt("deprecate_any_request", DEPRECATE_MESSAGE)?;
    let path = Scope::from_args(args)?.path(args)?;

    let mut body = body_fields(args, &["origin_ips"]);
    body.extend(body_fields(args, &OPTIONAL_FIELDS));
    Ok(HttpRequest::builder(HttpMethod::Patch, format!("{path}/{id}"))
        .body(Value::Object(body))
        .build()?)
}

/// Fetches a summarized analytics report for a cluster.
///
/// `dimensions` and `metrics` are sent as repeated `dimensions[]` and
/// `metrics[]` pairs; `limit` defaults to 100.
///
/// # Errors
///
/// Returns an error when a list or timestamp is malformed, or the scope is
/// invalid.
pub fn virtual_dns_analytics(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["id", "scope", "dimensions", "metrics", "since_ts", "until_ts"])?;
    let id = cluster_id(args)?;
    let scope = Scope::from_args(args)?;
    let dimensions = args.list(
        "dimensions",
        "dimensions must ba an array of possible dimensions",
    )?;
    let metrics = args.list("metrics", "metrics must ba an array of possible metrics")?;
    let since = args.iso8601("since_ts", "since_ts must be a valid iso8601 timestamp")?;
    let until = args.iso8601("until_ts", "until_ts must be a valid iso8601 timestamp")?;
    let path = scope.path(args)?;

    let limit = args
        .value("limit")
        .map_or_else(|| "100".to_string(), query_text);
    Ok(
        HttpRequest::builder(HttpMethod::Get, format!("{path}/{id}/dns_analytics/report"))
            .query_array("dimensions", dimensions.iter().map(query_text))
            .query_array("metrics", metrics.iter().map(query_text))
            .query_param("limit", limit)
            .query_param("since", since)
            .query_param("until", until)
            .query_opt(args, "sort")
            .query_opt(args, "filters")
            .build()?,
    )
}

impl CloudflareClient {
    /// Lists virtual DNS clusters. See [`virtual_dns_clusters`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn virtual_dns_clusters(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), virtual_dns_clusters).await
    }

    /// Creates a virtual DNS cluster. See [`create_virtual_dns_cluster`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn create_virtual_dns_cluster(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), create_virtual_dns_cluster).await
    }

    /// Fetches a virtual DNS cluster. See [`virtual_dns_cluster`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn virtual_dns_cluster(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), virtual_dns_cluster).await
    }

    /// Deletes a virtual DNS cluster. See [`delete_virtual_dns_cluster`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn delete_virtual_dns_cluster(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), delete_virtual_dns_cluster).await
    }

    /// Updates a virtual DNS cluster. See [`update_virtual_dns_cluster`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn update_virtual_dns_cluster(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), update_virtual_dns_cluster).await
    }

    /// Fetches virtual DNS analytics. See [`virtual_dns_analytics`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn virtual_dns_analytics(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), virtual_dns_analytics).await
    }
}
