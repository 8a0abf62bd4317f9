//! Web application firewall packages, rule groups and rules.
//!
//! Everything lives under `zones/{zone_id}/firewall/waf/packages`.

use serde_json::{json, Value};

use crate::client::CloudflareClient;
use crate::clients::{HttpMethod, HttpRequest};
use crate::error::ApiError;
use crate::rest::params::{body_fields, ArgsQuery};
use crate::rest::resources::zone_path;
use crate::rest::Args;

/// Modes a single WAF rule can be switched to.
pub const RULE_MODES: [&str; 7] = [
    "default", "disable", "simulate", "block", "challenge", "on", "off",
];

const MATCH_MESSAGE: &str = "match must be either all or any";

fn packages_path(args: &Args) -> Result<String, ApiError> {
    Ok(format!("{}/firewall/waf/packages", zone_path(args)?))
}

fn package_path(args: &Args) -> Result<String, ApiError> {
    let packages = packages_path(args)?;
    let package = args.id("package_id", "package_id required")?;
    Ok(format!("{packages}/{package}"))
}

// ============================================================================
// Packages
// ============================================================================

/// Lists WAF rule packages.
///
/// # Errors
///
/// Returns an error for an unknown `order`, `direction` or `match`.
pub fn waf_rule_packages(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let path = packages_path(args)?;
    args.one_of("order", &["status", "name"], "order must be either status or name")?;
    args.one_of("direction", &["asc", "desc"], "direction must be either asc or desc")?;
    args.one_of("match", &["all", "any"], MATCH_MESSAGE)?;

    Ok(HttpRequest::builder(HttpMethod::Get, path)
        .query_opt(args, "name")
        .query_opt(args, "order")
        .query_opt(args, "direction")
        .query_opt(args, "match")
        .paginate(args)
        .build()?)
}

/// Fetches one WAF rule package.
///
/// # Errors
///
/// Returns an error when `zone_id` or `id` is blank.
pub fn waf_rule_package(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "id"])?;
    let packages = packages_path(args)?;
    let id = args.id("id", "id required")?;
    Ok(HttpRequest::builder(HttpMethod::Get, format!("{packages}/{id}")).build()?)
}

/// Changes the anomaly detection sensitivity or action of a package.
///
/// # Errors
///
/// Returns an error for an unknown `sensitivity` or `action_mode`.
pub fn change_waf_rule_anomoly_detection(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "id"])?;
    let packages = packages_path(args)?;
    let id = args.id("id", "id required")?;
    args.one_of(
        "sensitivity",
        &["high", "low", "off"],
        "sensitivity must be one of high, low, off",
    )?;
    args.one_of(
        "action_mode",
        &["simulate", "block", "challenge"],
        "action_mode must be one of simulate, block or challenge",
    )?;

    Ok(HttpRequest::builder(HttpMethod::Patch, format!("{packages}/{id}"))
        .body(Value::Object(body_fields(args, &["sensitivity", "action_mode"])))
        .build()?)
}

// ============================================================================
// Rule groups
// ============================================================================

/// Lists the rule groups of a package.
///
/// Defaults: `mode=on`, `order=mode`, `direction=desc`, `match=all`.
///
/// # Errors
///
/// Returns an error when `package_id` is blank or a filter is unknown.
pub fn waf_rule_groups(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "package_id"])?;
    let package = package_path(args)?;
    let mode = args.one_of_or("mode", &["on", "off"], "on", "mode must be one of on or off")?;
    let order = args.one_of_or(
        "order",
        &["mode", "rules_count"],
        "mode",
        "order must be one of mode or rules_count",
    )?;
    let direction = args.one_of_or(
        "direction",
        &["asc", "desc"],
        "desc",
        "direction must be one of asc or desc",
    )?;
    let matching = args.one_of_or("match", &["all", "any"], "all", MATCH_MESSAGE)?;

    Ok(HttpRequest::builder(HttpMethod::Get, format!("{package}/groups"))
        .query_param("mode", mode)
        .query_param("order", order)
        .query_param("direction", direction)
        .query_param("match", matching)
        .paginate(args)
        .build()?)
}

/// Fetches one rule group.
///
/// # Errors
///
/// Returns an error when `zone_id`, `package_id` or `id` is blank.
pub fn waf_rule_group(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "package_id", "id"])?;
    let package = package_path(args)?;
    let id = args.id("id", "id required")?;
    Ok(HttpRequest::builder(HttpMethod::Get, format!("{package}/groups/{id}")).build()?)
}

/// Turns a rule group on or off.
///
/// # Errors
///
/// Returns an error unless `mode` is `on` or `off`.
pub fn update_waf_rule_group(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "package_id", "id"])?;
    let package = package_path(args)?;
    let id = args.id("id", "id required")?;
    let mode = args.required_one_of("mode", &["on", "off"], "mode must be either on or off")?;

    Ok(HttpRequest::builder(HttpMethod::Patch, format!("{package}/groups/{id}"))
        .body(json!({ "mode": mode }))
        .build()?)
}

// ============================================================================
// Rules
// ============================================================================

/// Lists the rules of a package.
///
/// Defaults: `match=all`, `order=priority`, `direction=desc`.
///
/// # Errors
///
/// Returns an error when `package_id` is blank or a filter is unknown.
pub fn waf_rules(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "package_id"])?;
    let package = package_path(args)?;
    let matching = args.one_of_or("match", &["all", "any"], "all", MATCH_MESSAGE)?;
    let order = args.one_of_or(
        "order",
        &["priority", "group_id", "description"],
        "priority",
        "order must be one of priority, group_id, description",
    )?;
    let direction = args.one_of_or(
        "direction",
        &["asc", "desc"],
        "desc",
        "direction must be either asc or desc",
    )?;

    Ok(HttpRequest::builder(HttpMethod::Get, format!("{package}/rules"))
        .query_param("match", matching)
        .query_param("order", order)
        .query_param("direction", direction)
        .paginate(args)
        .build()?)
}

/// Fetches one WAF rule.
///
/// # Errors
///
/// Returns an error when `zone_id`, `package_id` or `id` is blank.
pub fn waf_rule(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "package_id", "id"])?;
    let package = package_path(args)?;
    let id = args.id("id", "id required")?;
    Ok(HttpRequest::builder(HttpMethod::Get, format!("{package}/rules/{id}")).build()?)
}

/// Switches the mode of a WAF rule.
///
/// # Errors
///
/// Returns an error unless `mode` is one of [`RULE_MODES`].
pub fn update_waf_rule(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "package_id", "id"])?;
    let package = package_path(args)?;
    let id = args.id("id", "id required")?;
    let mode = args.required_one_of(
        "mode",
        &RULE_MODES,
        "mode must be one of default, disable, simulate, block, challenge, on, off",
    )?;

    Ok(HttpRequest::builder(HttpMethod::Patch, format!("{package}/rules/{id}"))
        .body(json!({ "mode": mode }))
        .build()?)
}

impl CloudflareClient {
    /// Lists WAF packages. See [`waf_rule_packages`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn waf_rule_packages(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), waf_rule_packages).await
    }

    /// Fetches a WAF package. See [`waf_rule_package`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn waf_rule_package(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), waf_rule_package).await
    }

    /// Changes a package's anomaly detection.
    /// See [`change_waf_rule_anomoly_detection`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn change_waf_rule_anomoly_detection(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), change_waf_rule_anomoly_detection)
            .await
    }

    /// Lists WAF rule groups. See [`waf_rule_groups`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn waf_rule_groups(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), waf_rule_groups).await
    }

    /// Fetches a WAF rule group. See [`waf_rule_group`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn waf_rule_group(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), waf_rule_group).await
    }

    /// Turns a WAF rule group on or off. See [`update_waf_rule_group`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn update_waf_rule_group(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), update_waf_rule_group).await
    }

    /// Lists WAF rules. See [`waf_rules`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn waf_rules(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), waf_rules).await
    }

    /// Fetches a WAF rule. See [`waf_rule`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn waf_rule(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), waf_rule).await
    }

    /// Switches a WAF rule's mode. See [`update_waf_rule`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn update_waf_rule(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), update_waf_rule).await
    }
}
