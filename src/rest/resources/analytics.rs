//! Zone and DNS analytics.

use serde_json::Value;

use crate::client::CloudflareClient;
use crate::clients::{HttpMethod, HttpRequest, HttpRequestBuilder};
use crate::error::ApiError;
use crate::rest::params::query_text;
use crate::rest::resources::zone_path;
use crate::rest::Args;

const SINCE_MESSAGE: &str = "since_ts must be a valid timestamp";
const UNTIL_MESSAGE: &str = "until_ts must be a valid timestamp";

/// Validates `since_ts`/`until_ts` and sends them as `since`/`until`.
fn time_window(builder: HttpRequestBuilder, args: &Args) -> Result<HttpRequestBuilder, ApiError> {
    let since = args.iso8601_opt("since_ts", SINCE_MESSAGE)?;
    let until = args.iso8601_opt("until_ts", UNTIL_MESSAGE)?;

    let mut builder = builder;
    if let Some(since) = since {
        builder = builder.query_param("since", since);
    }
    if let Some(until) = until {
        builder = builder.query_param("until", until);
    }
    Ok(builder)
}

fn continuous(builder: HttpRequestBuilder, args: &Args) -> Result<HttpRequestBuilder, ApiError> {
    let flag = args.bool_opt("continuous", "continuous must be true or false")?;
    Ok(match flag {
        Some(flag) => builder.query_param("continuous", flag.to_string()),
        None => builder,
    })
}

/// Fetches the analytics dashboard of a zone.
///
/// Optional ISO-8601 `since_ts`/`until_ts` and boolean `continuous`.
///
/// # Errors
///
/// Returns an error when `zone_id` is blank or a timestamp does not parse.
pub fn zone_analytics_dashboard(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let zone = zone_path(args)?;
    let builder = HttpRequest::builder(HttpMethod::Get, format!("{zone}/analytics/dashboard"));
    let builder = continuous(time_window(builder, args)?, args)?;
    Ok(builder.build()?)
}

/// Fetches analytics broken down by Cloudflare data center.
///
/// # Errors
///
/// Returns an error when `zone_id` is blank or a timestamp does not parse.
pub fn colo_analytics(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let zone = zone_path(args)?;
    let builder = HttpRequest::builder(HttpMethod::Get, format!("{zone}/analytics/colos"));
    let builder = continuous(time_window(builder, args)?, args)?;
    Ok(builder.build()?)
}

/// Fetches the DNS analytics summary table.
///
/// # Errors
///
/// Returns an error when `zone_id` is absent or blank.
pub fn dns_analytics_table(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let zone = zone_path(args)?;
    Ok(HttpRequest::builder(HttpMethod::Get, format!("{zone}/dns_analytics/report")).build()?)
}

/// Fetches DNS analytics as a time series.
///
/// `limit` defaults to 100 and `time_delta` to `hour`. Optional
/// `dimensions` and `metrics` arrays go out as `dimensions[]`/`metrics[]`.
///
/// # Errors
///
/// Returns an error when `zone_id` is blank, `dimensions` or `metrics` is
/// not an array, or a timestamp does not parse.
pub fn dns_analytics_bytime(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let zone = zone_path(args)?;
    let limit = args.value("limit").map_or_else(|| "100".to_string(), query_text);
    let time_delta = args
        .value("time_delta")
        .map_or_else(|| "hour".to_string(), query_text);

    let mut builder = HttpRequest::builder(
        HttpMethod::Get,
        format!("{zone}/dns_analytics/report/bytime"),
    )
    .query_param("limit", limit)
    .query_param("time_delta", time_delta);
    for key in ["dimensions", "metrics"] {
        if args.value(key).is_some() {
            let values = args.list(key, &format!("{key} must be an array"))?;
            builder = builder.query_array(key, values.iter().map(query_text));
        }
    }
    Ok(time_window(builder, args)?.build()?)
}

impl CloudflareClient {
    /// Fetches a zone's analytics dashboard. See [`zone_analytics_dashboard`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn zone_analytics_dashboard(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), zone_analytics_dashboard).await
    }

    /// Fetches per-colo analytics. See [`colo_analytics`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn colo_analytics(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), colo_analytics).await
    }

    /// Fetches the DNS analytics table. See [`dns_analytics_table`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn dns_analytics_table(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), dns_analytics_table).await
    }

    /// Fetches DNS analytics by time. See [`dns_analytics_bytime`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn dns_analytics_bytime(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), dns_analytics_bytime).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(result: Result<HttpRequest, ApiError>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn test_dashboard_requires_zone_id() {
        assert_eq!(
            message(zone_analytics_dashboard(&Args::new())),
            "missing keyword: zone_id"
        );
        let request = zone_analytics_dashboard(&Args::new().set("zone_id", "abc1234")).unwrap();
        assert_eq!(request.path, "zones/abc1234/analytics/dashboard");
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_colo_analytics_timestamps() {
        let args = Args::new().set("zone_id", "abc1234");
        assert_eq!(
            message(colo_analytics(&args.clone().set("since_ts", "blah"))),
            SINCE_MESSAGE
        );
        assert_eq!(
            message(colo_analytics(
                &args
                    .clone()
                    .set("since_ts", "2015-01-01T12:23:00Z")
                    .set("until_ts", "blah")
            )),
            UNTIL_MESSAGE
        );

        let request = colo_analytics(
            &args
                .set("since_ts", "2015-01-01T12:23:00Z")
                .set("until_ts", "2015-02-01T12:23:00Z"),
        )
        .unwrap();
        assert_eq!(request.path, "zones/abc1234/analytics/colos");
        assert_eq!(request.query_value("since"), Some("2015-01-01T12:23:00Z"));
        assert_eq!(request.query_value("until"), Some("2015-02-01T12:23:00Z"));
    }

    #[test]
    fn test_colo_analytics_accepts_local_time_and_date() {
        let args = Args::new().set("zone_id", "abc1234");
        let request = colo_analytics(&args.clone().set("since_ts", "2016-11-11T12:00:00")).unwrap();
        assert_eq!(request.query_value("since"), Some("2016-11-11T12:00:00"));

        let request = colo_analytics(&args.set("since_ts", "2016-11-11")).unwrap();
        assert_eq!(request.query_value("since"), Some("2016-11-11"));
    }

    #[test]
    fn test_dns_analytics_bytime_query() {
        let args = Args::new()
            .set("zone_id", "abc1234")
            .set("since_ts", "2015-01-01T12:23:00Z")
            .set("until_ts", "2017-01-01T12:23:00Z");
        let request = dns_analytics_bytime(&args).unwrap();
        assert_eq!(request.path, "zones/abc1234/dns_analytics/report/bytime");
        assert_eq!(
            request.query,
            vec![
                ("limit".to_string(), "100".to_string()),
                ("since".to_string(), "2015-01-01T12:23:00Z".to_string()),
                ("time_delta".to_string(), "hour".to_string()),
                ("until".to_string(), "2017-01-01T12:23:00Z".to_string()),
            ]
        );
    }

    #[test]
    fn test_dns_analytics_bytime_dimensions_and_metrics() {
        let zone = Args::new().set("zone_id", "abc1234");
        assert_eq!(
            message(dns_analytics_bytime(&zone.clone().set("dimensions", "queryName"))),
            "dimensions must be an array"
        );
        assert_eq!(
            message(dns_analytics_bytime(&zone.clone().set("metrics", json!({"a": 1})))),
            "metrics must be an array"
        );

        let request = dns_analytics_bytime(
            &zone
                .set("dimensions", json!(["queryName", "responseCode"]))
                .set("metrics", json!(["queryCount"])),
        )
        .unwrap();
        let pairs: Vec<(&str, &str)> = request
            .query
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("dimensions[]", "queryName"),
                ("dimensions[]", "responseCode"),
                ("limit", "100"),
                ("metrics[]", "queryCount"),
                ("time_delta", "hour"),
            ]
        );
    }

    #[test]
    fn test_dns_analytics_bytime_rejects_bad_since() {
        let args = Args::new().set("zone_id", "abc1234").set("since_ts", "foo");
        assert_eq!(message(dns_analytics_bytime(&args)), SINCE_MESSAGE);
    }

    // ========================================================================
    // Missing keywords
    // ========================================================================

    #[test]
    fn test_every_operation_names_missing_keywords() {
        let cases: &[(fn(&Args) -> Result<HttpRequest, ApiError>, &str)] = &[
            (zone_analytics_dashboard, "missing keyword: zone_id"),
            (colo_analytics, "missing keyword: zone_id"),
            (dns_analytics_table, "missing keyword: zone_id"),
            (dns_analytics_bytime, "missing keyword: zone_id"),
        ];
        for (build, expected) in cases {
            let err = build(&Args::new()).unwrap_err();
            assert!(matches!(err, ApiError::MissingRequiredField { .. }));
            assert_eq!(err.to_string(), *expected);
        }
    }
}
