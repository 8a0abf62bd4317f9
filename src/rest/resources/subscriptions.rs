//! Zone plan subscriptions.

use serde_json::Value;

use crate::client::CloudflareClient;
use crate::clients::{HttpMethod, HttpRequest};
use crate::error::ApiError;
use crate::rest::params::body_fields;
use crate::rest::resources::zone_path;
use crate::rest::Args;

/// Billing states a subscription may be created in.
pub const SUBSCRIPTION_STATES: [&str; 7] = [
    "Trial",
    "Provisioned",
    "Paid",
    "AwaitingPayment",
    "Cancelled",
    "Failed",
    "Expired",
];

/// Billing frequencies.
pub const FREQUENCIES: [&str; 4] = ["weekly", "monthly", "quarterly", "yearly"];

/// Fetches the subscription of a zone.
///
/// # Errors
///
/// Returns an error when `zone_id` is absent or blank.
pub fn zone_subscription(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let zone = zone_path(args)?;
    Ok(HttpRequest::builder(HttpMethod::Get, format!("{zone}/subscription")).build()?)
}

/// Creates a zone subscription from the supplied `state`, `frequency`,
/// `rate_plan` and `component_values`.
///
/// # Errors
///
/// Returns an error for an unknown `state` or `frequency`.
pub fn create_zone_subscription(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let zone = zone_path(args)?;
    args.one_of(
        "state",
        &SUBSCRIPTION_STATES,
        r#"state must be one of ["Trial", "Provisioned", "Paid", "AwaitingPayment", "Cancelled", "Failed", "Expired"]"#,
    )?;
    args.one_of(
        "frequency",
        &FREQUENCIES,
        r#"frequency must be one of ["weekly", "monthly", "quarterly", "yearly"]"#,
    )?;

    let body = body_fields(
        args,
        &["state", "frequency", "rate_plan", "component_values"],
    );
    Ok(HttpRequest::builder(HttpMethod::Post, format!("{zone}/subscription"))
        .body(Value::Object(body))
        .build()?)
}

impl CloudflareClient {
    /// Fetches a zone subscription. See [`zone_subscription`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn zone_subscription(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), zone_subscription).await
    }

    /// Creates a zone subscription. See [`create_zone_subscription`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn create_zone_subscription(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), create_zone_subscription).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::InvalidHttpRequestError;
    use crate::clients::HttpError;
    use serde_json::json;

    fn message(result: Result<HttpRequest, ApiError>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn test_create_zone_subscription_enumerations() {
        let zone = Args::new().set("zone_id", "abc1234");
        assert_eq!(
            message(create_zone_subscription(&zone.clone().set("state", "foo"))),
            format!("state must be one of {SUBSCRIPTION_STATES:?}")
        );
        assert_eq!(
            message(create_zone_subscription(
                &zone.clone().set("state", "Failed").set("frequency", "foo")
            )),
            format!("frequency must be one of {FREQUENCIES:?}")
        );

        let request = create_zone_subscription(
            &zone.set("state", "Failed").set("frequency", "weekly"),
        )
        .unwrap();
        assert_eq!(request.path, "zones/abc1234/subscription");
        assert_eq!(
            request.body.unwrap(),
            json!({"state": "Failed", "frequency": "weekly"})
        );
    }

    #[test]
    fn test_create_zone_subscription_without_fields_has_no_body() {
        let err = create_zone_subscription(&Args::new().set("zone_id", "abc1234")).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Transport(HttpError::InvalidRequest(InvalidHttpRequestError::MissingBody))
        ));
    }

    #[test]
    fn test_zone_subscription_requires_zone_id() {
        assert_eq!(
            message(zone_subscription(&Args::new())),
            "missing keyword: zone_id"
        );
    }

    // ========================================================================
    // Missing keywords
    // ========================================================================

    #[test]
    fn test_every_operation_names_missing_keywords() {
        let cases: &[(fn(&Args) -> Result<HttpRequest, ApiError>, &str)] = &[
            (zone_subscription, "missing keyword: zone_id"),
            (create_zone_subscription, "missing keyword: zone_id"),
        ];
        for (build, expected) in cases {
            let err = build(&Args::new()).unwrap_err();
            assert!(matches!(err, ApiError::MissingRequiredField { .. }));
            assert_eq!(err.to_string(), *expected);
        }
    }

    // ========================================================================
    // Enumerated values
    // ========================================================================

    #[test]
    fn test_every_state_and_frequency_accepted() {
        for state in SUBSCRIPTION_STATES {
            for frequency in FREQUENCIES {
                let args = Args::new()
                    .set("zone_id", "abc1234")
                    .set("state", state)
                    .set("frequency", frequency);
                let body = create_zone_subscription(&args).unwrap().body.unwrap();
                assert_eq!(body, json!({"state": state, "frequency": frequency}));
            }
        }
    }
}
