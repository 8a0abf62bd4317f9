//! Page rules of a zone (`pagerules`).

use serde_json::{Map, Value};

use crate::client::CloudflareClient;
use crate::clients::{HttpMethod, HttpRequest};
use crate::error::ApiError;
use crate::rest::params::body_fields;
use crate::rest::resources::zone_path;
use crate::rest::Args;

const TARGETS_MESSAGE: &str = "targets must be an array of targes https://api.cloudflare.com/#page-rules-for-a-zone-create-a-page-rule";
const ACTIONS_MESSAGE: &str = "actions must be an array of actions https://api.cloudflare.com/#page-rules-for-a-zone-create-a-page-rule";
const STATUSES: [&str; 2] = ["active", "disabled"];
const STATUS_MESSAGE: &str = "status must be disabled||active";

/// Validated `{targets, actions, status, priority?}` body shared by create
/// and update.
fn rule_body(args: &Args) -> Result<Map<String, Value>, ApiError> {
    let targets = args.non_empty_list("targets", TARGETS_MESSAGE)?;
    let actions = args.non_empty_list("actions", ACTIONS_MESSAGE)?;
    let status = args.one_of_or("status", &STATUSES, "disabled", STATUS_MESSAGE)?;

    let mut body = Map::new();
    body.insert("targets".to_string(), Value::Array(targets.clone()));
    body.insert("actions".to_string(), Value::Array(actions.clone()));
    body.insert("status".to_string(), Value::from(status));
    body.extend(body_fields(args, &["priority"]));
    Ok(body)
}

fn rule_path(args: &Args, message: &str) -> Result<String, ApiError> {
    let zone = zone_path(args)?;
    let id = args.id("id", message)?;
    Ok(format!("{zone}/pagerules/{id}"))
}

/// Creates a page rule. New rules are `disabled` unless `status` says
/// otherwise.
///
/// # Errors
///
/// Returns an error when `targets` or `actions` is not a non-empty array,
/// or `status` is unknown.
pub fn create_zone_page_rule(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "targets", "actions"])?;
    let zone = zone_path(args)?;
    let body = rule_body(args)?;
    Ok(HttpRequest::builder(HttpMethod::Post, format!("{zone}/pagerules"))
        .body(Value::Object(body))
        .build()?)
}

/// Lists page rules.
///
/// Filters default to `status=disabled`, `order=priority`,
/// `direction=desc` and `match=all`.
///
/// # Errors
///
/// Returns an error when a filter value is unknown.
pub fn zone_page_rules(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let zone = zone_path(args)?;
    let status = args.one_of_or(
        "status",
        &STATUSES,
        "disabled",
        "status must be either active||disabled",
    )?;
    let order = args.one_of_or(
        "order",
        &["status", "priority"],
        "priority",
        "order must be either status||priority",
    )?;
    let direction = args.one_of_or(
        "direction",
        &["asc", "desc"],
        "desc",
        "direction must be either asc||desc",
    )?;
    let matching = args.one_of_or("match", &["any", "all"], "all", "match must be either any||all")?;

    Ok(HttpRequest::builder(HttpMethod::Get, format!("{zone}/pagerules"))
        .query_param("status", status)
        .query_param("order", order)
        .query_param("direction", direction)
        .query_param("match", matching)
        .build()?)
}

/// Fetches one page rule.
///
/// # Errors
///
/// Returns an error when `zone_id` or `id` is blank.
pub fn zone_page_rule(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "id"])?;
    Ok(HttpRequest::builder(HttpMethod::Get, rule_path(args, "id required")?).build()?)
}

/// Replaces the targets and actions of a page rule.
///
/// # Errors
///
/// Returns an error under the same rules as [`create_zone_page_rule`].
pub fn update_zone_page_rule(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "id"])?;
    let path = rule_path(args, "id required")?;
    let body = rule_body(args)?;
    Ok(HttpRequest::builder(HttpMethod::Patch, path)
        .body(Value::Object(body))
        .build()?)
}

/// Deletes a page rule.
///
/// # Errors
///
/// Returns an error when `zone_id` or `id` is blank.
pub fn delete_zone_page_rule(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "id"])?;
    let path = rule_path(args, "zone page rule id required")?;
    Ok(HttpRequest::builder(HttpMethod::Delete, path).build()?)
}

impl CloudflareClient {
    /// Creates a page rule. See [`create_zone_page_rule`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn create_zone_page_rule(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), create_zone_page_rule).await
    }

    /// Lists page rules. See [`zone_page_rules`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn zone_page_rules(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), zone_page_rules).await
    }

    /// Fetches a page rule. See [`zone_page_rule`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn zone_page_rule(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), zone_page_rule).await
    }

    /// Updates a page rule. See [`update_zone_page_rule`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn update_zone_page_rule(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), update_zone_page_rule).await
    }

    /// Deletes a page rule. See [`delete_zone_page_rule`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn delete_zone_page_rule(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), delete_zone_page_rule).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(result: Result<HttpRequest, ApiError>) -> String {
        result.unwrap_err().to_string()
    }

    fn zone() -> Args {
        Args::new().set("zone_id", "abc1234")
    }

    #[test]
    fn test_create_zone_page_rule_messages() {
        assert_eq!(
            message(create_zone_page_rule(&Args::new())),
            "missing keywords: zone_id, targets, actions"
        );
        let rule = zone()
            .set("targets", json!([{"foo": "bar"}]))
            .set("actions", json!([{"foo": "bar"}]));
        assert_eq!(
            message(create_zone_page_rule(&rule.clone().set("targets", "foo"))),
            TARGETS_MESSAGE
        );
        assert_eq!(
            message(create_zone_page_rule(&rule.clone().set("targets", json!([])))),
            TARGETS_MESSAGE
        );
        assert_eq!(
            message(create_zone_page_rule(&rule.clone().set("actions", json!([])))),
            ACTIONS_MESSAGE
        );
        assert_eq!(
            message(create_zone_page_rule(&rule.set("status", "boo"))),
            STATUS_MESSAGE
        );
    }

    #[test]
    fn test_create_zone_page_rule_defaults_to_disabled() {
        let rule = zone()
            .set("targets", json!([{"foo": "bar"}]))
            .set("actions", json!([{"foo": "bar"}]));
        let request = create_zone_page_rule(&rule).unwrap();
        assert_eq!(request.path, "zones/abc1234/pagerules");
        assert_eq!(
            request.body.unwrap(),
            json!({
                "targets": [{"foo": "bar"}],
                "actions": [{"foo": "bar"}],
                "status": "disabled",
            })
        );
    }

    #[test]
    fn test_zone_page_rules_filters() {
        assert_eq!(
            message(zone_page_rules(&zone().set("status", "foo"))),
            "status must be either active||disabled"
        );
        assert_eq!(
            message(zone_page_rules(&zone().set("order", "foo"))),
            "order must be either status||priority"
        );
        assert_eq!(
            message(zone_page_rules(&zone().set("direction", "foo"))),
            "direction must be either asc||desc"
        );
        assert_eq!(
            message(zone_page_rules(&zone().set("match", "foo"))),
            "match must be either any||all"
        );

        let args = zone()
            .set("status", "active")
            .set("order", "status")
            .set("direction", "asc")
            .set("match", "any");
        let request = zone_page_rules(&args).unwrap();
        let pairs: Vec<(&str, &str)> = request
            .query
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("direction", "asc"),
                ("match", "any"),
                ("order", "status"),
                ("status", "active"),
            ]
        );
    }

    #[test]
    fn test_update_zone_page_rule_requires_targets_first() {
        let args = zone().set("id", "foobar");
        assert_eq!(message(update_zone_page_rule(&args)), TARGETS_MESSAGE);
        assert_eq!(
            message(update_zone_page_rule(&args.clone().set("targets", json!([{"blah": "blah"}])))),
            ACTIONS_MESSAGE
        );
        assert_eq!(
            message(update_zone_page_rule(&zone().set("id", Value::Null))),
            "id required"
        );
    }

    #[test]
    fn test_delete_zone_page_rule_message() {
        let args = zone().set("id", Value::Null);
        assert_eq!(message(delete_zone_page_rule(&args)), "zone page rule id required");
        assert_eq!(message(zone_page_rule(&args)), "id required");
    }

    // ========================================================================
    // Missing keywords
    // ========================================================================

    #[test]
    fn test_every_operation_names_missing_keywords() {
        let cases: &[(fn(&Args) -> Result<HttpRequest, ApiError>, &str)] = &[
            (create_zone_page_rule, "missing keywords: zone_id, targets, actions"),
            (zone_page_rules, "missing keyword: zone_id"),
            (zone_page_rule, "missing keywords: zone_id, id"),
            (update_zone_page_rule, "missing keywords: zone_id, id"),
            (delete_zone_page_rule, "missing keywords: zone_id, id"),
        ];
        for (build, expected) in cases {
            let err = build(&Args::new()).unwrap_err();
            assert!(matches!(err, ApiError::MissingRequiredField { .. }));
            assert_eq!(err.to_string(), *expected);
        }
    }
}
