//! IP firewall access rules, at zone and organization level.

use serde_json::{json, Map, Value};

use crate::client::CloudflareClient;
use crate::clients::{HttpMethod, HttpRequest, HttpRequestBuilder};
use crate::error::ApiError;
use crate::rest::params::{body_fields, ArgsQuery};
use crate::rest::resources::{org_path, zone_path};
use crate::rest::Args;

/// Actions an access rule can take.
pub const RULE_MODES: [&str; 3] = ["block", "challenge", "whitelist"];

/// What an access rule's configuration matches on.
pub const CONFIGURATION_TARGETS: [&str; 3] = ["ip", "ip_range", "country"];

const CASCADES: [&str; 3] = ["none", "basic", "aggressive"];
const TARGET_MESSAGE: &str = r#"configuration_target can only be one ["ip", "ip_range", "country"]"#;
const ZONE_MODE_MESSAGE: &str = "mode must be one of block, challenge, whitlist";

/// Validates the listing filters shared by zone and organization rules.
fn rule_filters(
    builder: HttpRequestBuilder,
    args: &Args,
    with_scope: bool,
) -> Result<HttpRequestBuilder, ApiError> {
    args.one_of(
        "mode",
        &RULE_MODES,
        "mode can only be one of block, challenge, whitelist",
    )?;
    args.one_of("match", &["all", "any"], "match can only be one either all || any")?;
    if with_scope {
        args.one_of(
            "scope_type",
            &["user", "organization", "zone"],
            "scope_type can only be one of user, organization, zone",
        )?;
    }
    args.one_of("configuration_target", &CONFIGURATION_TARGETS, TARGET_MESSAGE)?;
    args.one_of("direction", &["asc", "desc"], "direction must be either asc || desc")?;

    let mut builder = builder
        .query_opt(args, "mode")
        .query_opt(args, "match")
        .query_opt(args, "configuration_target")
        .query_opt(args, "configuration_value")
        .query_opt(args, "direction")
        .query_opt(args, "order")
        .query_opt(args, "notes");
    if with_scope {
        builder = builder.query_opt(args, "scope_type");
    }
    Ok(builder.paginate(args))
}

// ============================================================================
// Zone rules
// ============================================================================

fn zone_rules_path(args: &Args) -> Result<String, ApiError> {
    Ok(format!("{}/firewall/access_rules/rules", zone_path(args)?))
}

/// Lists the access rules of a zone.
///
/// # Errors
///
/// Returns an error when a filter value is unknown.
pub fn firewall_access_rules(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let path = zone_rules_path(args)?;
    let builder = rule_filters(HttpRequest::builder(HttpMethod::Get, path), args, true)?;
    Ok(builder.build()?)
}

/// Creates an access rule.
///
/// `configuration` must hold a `target` and a `value`.
///
/// # Errors
///
/// Returns an error for an unknown `mode` or an incomplete configuration.
pub fn create_firewall_access_rule(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "mode", "configuration"])?;
    let path = zone_rules_path(args)?;
    let mode = args.required_one_of("mode", &RULE_MODES, ZONE_MODE_MESSAGE)?;
    let configuration = args.object(
        "configuration",
        "configuration must be a valid configuration object",
    )?;
    if !configuration.contains_key("target") || !configuration.contains_key("value") {
        return Err(ApiError::invalid(
            "configuration",
            "configuration must contain valid a valid target and value",
        ));
    }

    let mut body = Map::new();
    body.insert("mode".to_string(), Value::from(mode));
    body.insert("configuration".to_string(), Value::Object(configuration.clone()));
    body.extend(body_fields(args, &["notes"]));
    Ok(HttpRequest::builder(HttpMethod::Post, path)
        .body(Value::Object(body))
        .build()?)
}

/// Changes the mode or notes of an access rule.
///
/// # Errors
///
/// Returns an error when an id is blank or `mode` is unknown.
pub fn update_firewall_access_rule(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "id"])?;
    let rules = zone_rules_path(args)?;
    let id = args.id("id", "id required")?;
    args.one_of("mode", &RULE_MODES, ZONE_MODE_MESSAGE)?;

    Ok(HttpRequest::builder(HttpMethod::Patch, format!("{rules}/{id}"))
        .body(Value::Object(body_fields(args, &["mode", "notes"])))
        .build()?)
}

/// Deletes an access rule, cascading to child zones per `cascade`
/// (`none` unless given).
///
/// # Errors
///
/// Returns an error when an id is blank or `cascade` is unknown.
pub fn delete_firewall_access_rule(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "id"])?;
    let rules = zone_rules_path(args)?;
    let id = args.id("id", "id required")?;
    let cascade = args.one_of_or(
        "cascade",
        &CASCADES,
        "none",
        "cascade must be one of none, basic, aggressive",
    )?;

    Ok(HttpRequest::builder(HttpMethod::Delete, format!("{rules}/{id}"))
        .body(json!({ "cascade": cascade }))
        .build()?)
}

// ============================================================================
// Organization rules
// ============================================================================

fn org_rules_path(args: &Args) -> Result<String, ApiError> {
    Ok(format!("{}/firewall/access_rules/rules", org_path(args)?))
}

/// Lists the access rules of an organization.
///
/// # Errors
///
/// Returns an error when `org_id` is blank or a filter value is unknown.
pub fn org_level_firewall_rules(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["org_id"])?;
    let path = org_rules_path(args)?;
    let builder = rule_filters(HttpRequest::builder(HttpMethod::Get, path), args, false)?;
    Ok(builder.build()?)
}

/// Creates an organization access rule.
///
/// # Errors
///
/// Returns an error when `mode` is missing or unknown, or `configuration`
/// is not a non-empty object.
pub fn create_org_access_rule(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["org_id"])?;
    let path = org_rules_path(args)?;
    let mode = args.required_one_of(
        "mode",
        &RULE_MODES,
        "mode must be one of block, challenge, whitelist",
    )?;
    let configuration = args.object("configuration", "configuration must be a hash")?;
    if configuration.is_empty() {
        return Err(ApiError::invalid(
            "configuration",
            "configuration cannot be empty",
        ));
    }

    let mut body = Map::new();
    body.insert("mode".to_string(), Value::from(mode));
    body.insert("configuration".to_string(), Value::Object(configuration.clone()));
    body.extend(body_fields(args, &["notes"]));
    Ok(HttpRequest::builder(HttpMethod::Post, path)
        .body(Value::Object(body))
        .build()?)
}

/// Deletes an organization access rule.
///
/// # Errors
///
/// Returns an error when `org_id` or `id` is blank.
pub fn delete_org_access_rule(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["org_id", "id"])?;
    let rules = org_rules_path(args)?;
    let id = args.id("id", "id required")?;
    Ok(HttpRequest::builder(HttpMethod::Delete, format!("{rules}/{id}")).build()?)
}

impl CloudflareClient {
    /// Lists zone access rules. See [`firewall_access_rules`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn firewall_access_rules(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), firewall_access_rules).await
    }

    /// Creates a zone access rule. See [`create_firewall_access_rule`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn create_firewall_access_rule(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), create_firewall_access_rule).await
    }

    /// Updates a zone access rule. See [`update_firewall_access_rule`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn update_firewall_access_rule(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), update_firewall_access_rule).await
    }

    /// Deletes a zone access rule. See [`delete_firewall_access_rule`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn delete_firewall_access_rule(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), delete_firewall_access_rule).await
    }

    /// Lists organization access rules. See [`org_level_firewall_rules`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn org_level_firewall_rules(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), org_level_firewall_rules).await
    }

    /// Creates an organization access rule. See [`create_org_access_rule`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn create_org_access_rule(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), create_org_access_rule).await
    }

    /// Deletes an organization access rule. See [`delete_org_access_rule`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn delete_org_access_rule(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), delete_org_access_rule).await
    }
}
