//! Custom hostnames (SSL for SaaS) of a zone.

use serde_json::{json, Map, Value};

use crate::client::CloudflareClient;
use crate::clients::{HttpMethod, HttpRequest};
use crate::error::ApiError;
use crate::rest::params::{query_text, ArgsQuery};
use crate::rest::resources::zone_path;
use crate::rest::Args;

/// Validation methods for hostname certificates.
pub const SSL_METHODS: [&str; 3] = ["http", "email", "cname"];

const METHOD_MESSAGE: &str = r#"method must be one of ["http", "email", "cname"]"#;
const UPDATE_TYPES: [&str; 2] = ["read only", "dv"];
const UPDATE_TYPE_MESSAGE: &str = r#"type must be one of ["read only", "dv"]"#;

fn hostname_path(args: &Args) -> Result<String, ApiError> {
    let zone = zone_path(args)?;
    let id = args.id("id", "id required")?;
    Ok(format!("{zone}/custom_hostnames/{id}"))
}

/// Creates a custom hostname with a DV certificate.
///
/// `method` defaults to `http` and `type` to `dv`.
///
/// # Errors
///
/// Returns an error when `hostname` is blank or `method`/`type` is unknown.
pub fn create_custom_hostname(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "hostname"])?;
    let zone = zone_path(args)?;
    let hostname = args.required("hostname", "hostname required")?;
    let method = args.one_of_or("method", &SSL_METHODS, "http", METHOD_MESSAGE)?;
    let ssl_type = args.one_of_or("type", &["dv"], "dv", "type must be either dv or read only")?;

    Ok(
        HttpRequest::builder(HttpMethod::Post, format!("{zone}/custom_hostnames"))
            .body(json!({
                "hostname": hostname,
                "ssl": { "method": method, "type": ssl_type },
            }))
            .build()?,
    )
}

/// Lists custom hostnames, filtered by `hostname` or `id` but not both.
///
/// # Errors
///
/// Returns an error when both `hostname` and `id` are given.
pub fn custom_hostnames(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let zone = zone_path(args)?;
    if args.value("hostname").is_some() && args.value("id").is_some() {
        return Err(ApiError::cross_field("cannot use hostname and id"));
    }

    let text_or = |key: &str, default: &str| {
        args.value(key)
            .map_or_else(|| default.to_string(), query_text)
    };
    Ok(
        HttpRequest::builder(HttpMethod::Get, format!("{zone}/custom_hostnames"))
            .query_opt(args, "hostname")
            .query_opt(args, "id")
            .query_param("order", text_or("order", "ssl"))
            .query_param("direction", text_or("direction", "desc"))
            .query_param("ssl", text_or("ssl", "0"))
            .paginate(args)
            .build()?,
    )
}

/// Fetches one custom hostname.
///
/// # Errors
///
/// Returns an error when `zone_id` or `id` is blank.
pub fn custom_hostname(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "id"])?;
    Ok(HttpRequest::builder(HttpMethod::Get, hostname_path(args)?).build()?)
}

/// Changes the certificate settings or origin metadata of a custom hostname.
///
/// # Errors
///
/// Returns an error for an unknown `method` or `type`, or a non-object
/// `custom_metadata`.
pub fn update_custom_hostname(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "id"])?;
    let path = hostname_path(args)?;
    let method = args.one_of("method", &SSL_METHODS, METHOD_MESSAGE)?;
    let ssl_type = args.one_of("type", &UPDATE_TYPES, UPDATE_TYPE_MESSAGE)?;
    let metadata = args.object_opt("custom_metadata", "custom_metadata must be an object")?;

    let mut ssl = Map::new();
    if let Some(method) = method {
        ssl.insert("method".to_string(), Value::from(method));
    }
    if let Some(ssl_type) = ssl_type {
        ssl.insert("type".to_string(), Value::from(ssl_type));
    }

    let mut body = Map::new();
    if !ssl.is_empty() {
        body.insert("ssl".to_string(), Value::Object(ssl));
    }
    if let Some(metadata) = metadata {
        body.insert("custom_metadata".to_string(), Value::Object(metadata.clone()));
    }

    Ok(HttpRequest::builder(HttpMethod::Patch, path)
        .body(Value::Object(body))
        .build()?)
}

/// Deletes a custom hostname.
///
/// # Errors
///
/// Returns an error when `zone_id` or `id` is blank.
pub fn delete_custom_hostname(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "id"])?;
    Ok(HttpRequest::builder(HttpMethod::Delete, hostname_path(args)?).build()?)
}

impl CloudflareClient {
    /// Creates a custom hostname. See [`create_custom_hostname`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn create_custom_hostname(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), create_custom_hostname).await
    }

    /// Lists custom hostnames. See [`custom_hostnames`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn custom_hostnames(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), custom_hostnames).await
    }

    /// Fetches a custom hostname. See [`custom_hostname`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn custom_hostname(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), custom_hostname).await
    }

    /// Updates a custom hostname. See [`update_custom_hostname`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn update_custom_hostname(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), update_custom_hostname).await
    }

    /// Deletes a custom hostname. See [`delete_custom_hostname`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn delete_custom_hostname(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), delete_custom_hostname).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<HttpRequest, ApiError>) -> String {
        result.unwrap_err().to_string()
    }

    fn zone() -> Args {
        Args::new().set("zone_id", "abc1234")
    }

    // ========================================================================
    // Create
    // ========================================================================

    #[test]
    fn test_create_custom_hostname_messages() {
        assert_eq!(
            message(create_custom_hostname(&Args::new())),
            "missing keywords: zone_id, hostname"
        );
        assert_eq!(
            message(create_custom_hostname(&zone().set("hostname", Value::Null))),
            "hostname required"
        );
        let args = zone().set("hostname", "footothebar");
        assert_eq!(
            message(create_custom_hostname(&args.clone().set("method", "snail"))),
            format!("method must be one of {SSL_METHODS:?}")
        );
        assert_eq!(
            message(create_custom_hostname(&args.set("type", "snail"))),
            "type must be either dv or read only"
        );
    }

    #[test]
    fn test_create_custom_hostname_defaults() {
        let request = create_custom_hostname(&zone().set("hostname", "somerandomhost")).unwrap();
        assert_eq!(
            request.body.unwrap(),
            json!({"hostname": "somerandomhost", "ssl": {"method": "http", "type": "dv"}})
        );
    }

    // ========================================================================
    // Listing
    // ========================================================================

    #[test]
    fn test_custom_hostnames_rejects_hostname_and_id() {
        let err = custom_hostnames(&zone().set("hostname", "foo").set("id", "bar")).unwrap_err();
        assert!(matches!(err, ApiError::CrossFieldViolation { .. }));
        assert_eq!(err.to_string(), "cannot use hostname and id");
    }

    #[test]
    fn test_custom_hostnames_query() {
        let request = custom_hostnames(&zone().set("hostname", "foobar")).unwrap();
        let pairs: Vec<(&str, &str)> = request
            .query
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("direction", "desc"),
                ("hostname", "foobar"),
                ("order", "ssl"),
                ("page", "1"),
                ("per_page", "50"),
                ("ssl", "0"),
            ]
        );

        let request = custom_hostnames(&zone().set("id", 12345)).unwrap();
        assert_eq!(request.query_value("id"), Some("12345"));
        assert_eq!(request.query_value("hostname"), None);
    }

    // ========================================================================
    // Update
    // ========================================================================

    #[test]
    fn test_update_custom_hostname_messages() {
        assert_eq!(
            message(update_custom_hostname(&Args::new())),
            "missing keywords: zone_id, id"
        );
        let args = zone().set("id", "foo");
        assert_eq!(
            message(update_custom_hostname(&args.clone().set("method", "bar").set("type", "cat"))),
            METHOD_MESSAGE
        );
        assert_eq!(
            message(update_custom_hostname(&args.clone().set("method", "http").set("type", "cat"))),
            UPDATE_TYPE_MESSAGE
        );
        assert_eq!(
            message(update_custom_hostname(&args.set("custom_metadata", "bob"))),
            "custom_metadata must be an object"
        );
    }

    #[test]
    fn test_update_custom_hostname_body() {
        let args = zone()
            .set("id", "foo")
            .set("method", "http")
            .set("type", "dv")
            .set("custom_metadata", json!({"origin_override": "footothebar"}));
        let request = update_custom_hostname(&args).unwrap();
        assert_eq!(request.http_method, HttpMethod::Patch);
        assert_eq!(request.path, "zones/abc1234/custom_hostnames/foo");
        assert_eq!(
            request.body.unwrap(),
            json!({
                "ssl": {"method": "http", "type": "dv"},
                "custom_metadata": {"origin_override": "footothebar"},
            })
        );
    }

    #[test]
    fn test_delete_custom_hostname_requires_id() {
        let args = zone().set("id", Value::Null);
        assert_eq!(message(delete_custom_hostname(&args)), "id required");
        assert_eq!(message(custom_hostname(&args)), "id required");
    }

    // ========================================================================
    // Missing keywords
    // ========================================================================

    #[test]
    fn test_every_operation_names_missing_keywords() {
        let cases: &[(fn(&Args) -> Result<HttpRequest, ApiError>, &str)] = &[
            (create_custom_hostname, "missing keywords: zone_id, hostname"),
            (custom_hostnames, "missing keyword: zone_id"),
            (custom_hostname, "missing keywords: zone_id, id"),
            (update_custom_hostname, "missing keywords: zone_id, id"),
            (delete_custom_hostname, "missing keywords: zone_id, id"),
        ];
        for (build, expected) in cases {
            let err = build(&Args::new()).unwrap_err();
            assert!(matches!(err, ApiError::MissingRequiredField { .. }));
            assert_eq!(err.to_string(), *expected);
        }
    }
}
