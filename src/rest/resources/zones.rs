//! Zones, zone settings and cache purging.
//!
//! `zones/*` endpoints. A zone is a domain managed by Cloudflare; every other
//! zone-scoped resource hangs off `zones/{zone_id}`.

use serde_json::{json, Value};

use crate::client::CloudflareClient;
use crate::clients::{HttpMethod, HttpRequest};
use crate::error::ApiError;
use crate::rest::params::{body_fields, ArgsQuery};
use crate::rest::resources::zone_path;
use crate::rest::Args;

/// Zone states accepted by the `status` filter.
pub const ZONE_STATUSES: [&str; 7] = [
    "active",
    "pending",
    "initializing",
    "moved",
    "deleted",
    "deactivated",
    "read only",
];

/// Setting names accepted under `zones/{zone_id}/settings`.
pub const ZONE_SETTINGS: [&str; 36] = [
    "advanced_ddos",
    "always_online",
    "always_use_https",
    "automatic_https_rewrites",
    "browser_cache_ttl",
    "browser_check",
    "cache_level",
    "challenge_ttl",
    "development_mode",
    "email_obfuscation",
    "hotlink_protection",
    "ip_geolocation",
    "ipv6",
    "minify",
    "mobile_redirect",
    "mirage",
    "origin_error_page_pass_thru",
    "opportunistic_encryption",
    "polish",
    "webp",
    "prefetch_preload",
    "response_buffering",
    "rocket_loader",
    "security_header",
    "security_level",
    "server_side_exclude",
    "sort_query_string_for_cache",
    "ssl",
    "tls_1_2_only",
    "tls_1_3",
    "tls_client_auth",
    "true_client_ip_header",
    "waf",
    "http2",
    "pseudo_ipv4",
    "websockets",
];

/// Lists or searches zones.
///
/// Optional `name`, `status`, `page` (1) and `per_page` (50).
///
/// # Errors
///
/// Returns [`ApiError::InvalidValue`] for an unknown `status`.
pub fn zones(args: &Args) -> Result<HttpRequest, ApiError> {
    args.one_of(
        "status",
        &ZONE_STATUSES,
        r#"status must be one of ["active", "pending", "initializing", "moved", "deleted", "deactivated", "read only"]"#,
    )?;

    Ok(HttpRequest::builder(HttpMethod::Get, "zones")
        .query_opt(args, "name")
        .query_opt(args, "status")
        .paginate(args)
        .build()?)
}

/// Creates a zone.
///
/// Requires `name` and an `organization` object holding an `id`.
/// `jump_start` defaults to `true`.
///
/// # Errors
///
/// Returns an error when `name` is absent or blank, or when the organization
/// id is missing.
pub fn create_zone(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["name"])?;
    let name = args.required("name", "Zone name required")?;

    let mut organization = args
        .value("organization")
        .and_then(Value::as_object)
        .filter(|org| org.get("id").is_some_and(|id| !id.is_null()))
        .cloned()
        .ok_or_else(|| ApiError::invalid("organization", "Org information  required"))?;
    organization.insert("status".to_string(), json!("active"));
    organization.insert("permissions".to_string(), json!(["#zones:read"]));

    let jump_start = args.value("jump_start").cloned().unwrap_or(Value::Bool(true));

    Ok(HttpRequest::builder(HttpMethod::Post, "zones")
        .body(json!({
            "name": name,
            "jump_start": jump_start,
            "organization": organization,
        }))
        .build()?)
}

/// Requests another activation check for a pending zone.
///
/// # Errors
///
/// Returns an error when `zone_id` is absent or blank.
pub fn zone_activation_check(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let zone = zone_path(args)?;
    Ok(HttpRequest::builder(HttpMethod::Put, format!("{zone}/activation_check")).build()?)
}

/// Fetches a single zone.
///
/// # Errors
///
/// Returns an error when `zone_id` is absent or blank.
pub fn zone(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let zone = zone_path(args)?;
    Ok(HttpRequest::builder(HttpMethod::Get, zone).build()?)
}

/// Edits zone properties.
///
/// Optional `paused`, `vanity_name_servers` and `plan`. Several of these
/// require an enterprise plan upstream.
///
/// # Errors
///
/// Returns an error when `zone_id` is blank or an optional field has the
/// wrong shape.
pub fn edit_zone(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let zone = zone_path(args)?;
    args.bool_opt("paused", "paused must be true or false")?;
    args.non_empty_list_opt(
        "vanity_name_servers",
        "vanity_name_servers must be an array",
    )?;
    if let Some(plan) = args.value("plan") {
        let has_id = plan.get("id").is_some_and(|id| !id.is_null());
        if !plan.is_object() || !has_id {
            return Err(ApiError::invalid("plan", "plan must be an object with an id"));
        }
    }

    let body = body_fields(args, &["paused", "vanity_name_servers", "plan"]);
    Ok(HttpRequest::builder(HttpMethod::Patch, zone)
        .body(Value::Object(body))
        .build()?)
}

/// Purges cached content for a zone.
///
/// At least one of `purge_everything`, `tags` or `files` must be given.
///
/// # Errors
///
/// Returns [`ApiError::CrossFieldViolation`] when none is given.
pub fn purge_zone_cache(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let zone = zone_path(args)?;

    let non_empty = |key: &str| {
        args.value(key)
            .and_then(Value::as_array)
            .is_some_and(|items| !items.is_empty())
    };
    let purge_everything = args.value("purge_everything").is_some();
    if !purge_everything && !non_empty("tags") && !non_empty("files") {
        return Err(ApiError::cross_field(
            "specify a combination tags[], files[] or purge_everything",
        ));
    }

    let mut body = body_fields(args, &["purge_everything"]);
    for key in ["tags", "files"] {
        if non_empty(key) {
            if let Some(items) = args.value(key) {
                body.insert(key.to_string(), items.clone());
            }
        }
    }

    Ok(HttpRequest::builder(HttpMethod::Delete, format!("{zone}/purge_cache"))
        .body(Value::Object(body))
        .build()?)
}

/// Deletes a zone.
///
/// # Errors
///
/// Returns an error when `zone_id` is absent or blank.
pub fn delete_zone(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let zone = zone_path(args)?;
    Ok(HttpRequest::builder(HttpMethod::Delete, zone).build()?)
}

/// Lists every setting of a zone.
///
/// # Errors
///
/// Returns an error when `zone_id` is absent or blank.
pub fn zone_settings(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let zone = zone_path(args)?;
    Ok(HttpRequest::builder(HttpMethod::Get, format!("{zone}/settings")).build()?)
}

/// Fetches one named setting of a zone.
///
/// # Errors
///
/// Returns an error when `name` is not one of [`ZONE_SETTINGS`].
pub fn zone_setting(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "name"])?;
    let zone = zone_path(args)?;
    let name = args.required_one_of("name", &ZONE_SETTINGS, "setting_name not valid")?;
    Ok(HttpRequest::builder(HttpMethod::Get, format!("{zone}/settings/{name}")).build()?)
}

/// Updates several settings at once.
///
/// `settings` is an array of `{name, value}` objects.
///
/// # Errors
///
/// Returns an error naming the first unknown setting.
pub fn update_zone_settings(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let zone = zone_path(args)?;
    let settings = args.list("settings", "settings must be an array of settings")?;

    for setting in settings {
        let name = setting.get("name").unwrap_or(&Value::Null);
        let known = name.as_str().is_some_and(|n| ZONE_SETTINGS.contains(&n));
        if !known {
            let shown = name.as_str().map_or_else(|| name.to_string(), |n| format!("{n:?}"));
            return Err(ApiError::invalid(
                "settings",
                format!("setting_name {shown} not valid"),
            ));
        }
    }

    Ok(HttpRequest::builder(HttpMethod::Patch, format!("{zone}/settings"))
        .body(json!({ "items": settings }))
        .build()?)
}

impl CloudflareClient {
    /// Lists or searches zones. See [`zones`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn zones(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), zones).await
    }

    /// Creates a zone. See [`create_zone`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn create_zone(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), create_zone).await
    }

    /// Requests a zone activation check. See [`zone_activation_check`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn zone_activation_check(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), zone_activation_check).await
    }

    /// Fetches a zone. See [`zone`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn zone(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), zone).await
    }

    /// Edits a zone. See [`edit_zone`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn edit_zone(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), edit_zone).await
    }

    /// Purges a zone's cache. See [`purge_zone_cache`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn purge_zone_cache(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), purge_zone_cache).await
    }

    /// Deletes a zone. See [`delete_zone`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn delete_zone(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), delete_zone).await
    }

    /// Lists a zone's settings. See [`zone_settings`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn zone_settings(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), zone_settings).await
    }

    /// Fetches one zone setting. See [`zone_setting`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn zone_setting(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), zone_setting).await
    }

    /// Updates zone settings. See [`update_zone_settings`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn update_zone_settings(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), update_zone_settings).await
    }
}
