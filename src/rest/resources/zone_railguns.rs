//! Railgun connections of a zone, under `zones/{zone_id}/railguns`.

use serde_json::{json, Value};

use crate::client::CloudflareClient;
use crate::clients::{HttpMethod, HttpRequest};
use crate::error::ApiError;
use crate::rest::resources::zone_path;
use crate::rest::Args;

fn railgun_path(args: &Args) -> Result<String, ApiError> {
    let zone = zone_path(args)?;
    let id = args.id("id", "railgun id required")?;
    Ok(format!("{zone}/railguns/{id}"))
}

/// Lists the railguns available to a zone.
///
/// # Errors
///
/// Returns an error when `zone_id` is absent or blank.
pub fn railgun_connections(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let zone = zone_path(args)?;
    Ok(HttpRequest::builder(HttpMethod::Get, format!("{zone}/railguns")).build()?)
}

/// Fetches one railgun connection.
///
/// # Errors
///
/// Returns an error when `zone_id` or `id` is blank.
pub fn railgun_connection(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "id"])?;
    Ok(HttpRequest::builder(HttpMethod::Get, railgun_path(args)?).build()?)
}

/// Runs the connection diagnostic for a railgun.
///
/// # Errors
///
/// Returns an error when `zone_id` or `id` is blank.
pub fn test_railgun_connection(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "id"])?;
    let path = railgun_path(args)?;
    Ok(HttpRequest::builder(HttpMethod::Get, format!("{path}/diagnose")).build()?)
}

/// Connects or disconnects a railgun.
///
/// # Errors
///
/// Returns an error when `connected` is not literally `true` or `false`.
pub fn connect_railgun(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "id", "connected"])?;
    let path = railgun_path(args)?;
    let connected = args.bool_required("connected", "connected must be true or false")?;
    Ok(HttpRequest::builder(HttpMethod::Patch, path)
        .body(json!({ "connected": connected }))
        .build()?)
}

impl CloudflareClient {
    /// Lists railgun connections. See [`railgun_connections`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn railgun_connections(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), railgun_connections).await
    }

    /// Fetches a railgun connection. See [`railgun_connection`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn railgun_connection(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), railgun_connection).await
    }

    /// Diagnoses a railgun connection. See [`test_railgun_connection`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn test_railgun_connection(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), test_railgun_connection).await
    }

    /// Connects or disconnects a railgun. See [`connect_railgun`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn connect_railgun(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), connect_railgun).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAILGUN: &str = "e928d310693a83094309acf9ead50448";

    fn message(result: Result<HttpRequest, ApiError>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn test_railgun_connections_path() {
        let request = railgun_connections(&Args::new().set("zone_id", "abc1234")).unwrap();
        assert_eq!(request.path, "zones/abc1234/railguns");
    }

    #[test]
    fn test_railgun_connection_messages() {
        assert_eq!(
            message(railgun_connection(&Args::new())),
            "missing keywords: zone_id, id"
        );
        assert_eq!(
            message(railgun_connection(
                &Args::new().set("zone_id", Value::Null).set("id", "foo")
            )),
            "zone_id required"
        );
        assert_eq!(
            message(test_railgun_connection(
                &Args::new().set("zone_id", "abc1234").set("id", Value::Null)
            )),
            "railgun id required"
        );
    }

    #[test]
    fn test_diagnose_path() {
        let args = Args::new().set("zone_id", "abc1234").set("id", RAILGUN);
        let request = test_railgun_connection(&args).unwrap();
        assert_eq!(
            request.path,
            format!("zones/abc1234/railguns/{RAILGUN}/diagnose")
        );
    }

    #[test]
    fn test_connect_railgun() {
        assert_eq!(
            message(connect_railgun(&Args::new())),
            "missing keywords: zone_id, id, connected"
        );

        let args = Args::new().set("zone_id", "abc1234").set("id", RAILGUN);
        assert_eq!(
            message(connect_railgun(&args.clone().set("connected", Value::Null))),
            "connected must be true or false"
        );

        for connected in [true, false] {
            let request = connect_railgun(&args.clone().set("connected", connected)).unwrap();
            assert_eq!(request.http_method, HttpMethod::Patch);
            assert_eq!(request.body.unwrap(), json!({ "connected": connected }));
        }
    }

    // ========================================================================
    // Missing keywords
    // ========================================================================

    #[test]
    fn test_every_operation_names_missing_keywords() {
        let cases: &[(fn(&Args) -> Result<HttpRequest, ApiError>, &str)] = &[
            (railgun_connections, "missing keyword: zone_id"),
            (railgun_connection, "missing keywords: zone_id, id"),
            (test_railgun_connection, "missing keywords: zone_id, id"),
            (connect_railgun, "missing keywords: zone_id, id, connected"),
        ];
        for (build, expected) in cases {
            let err = build(&Args::new()).unwrap_err();
            assert!(matches!(err, ApiError::MissingRequiredField { .. }));
            assert_eq!(err.to_string(), *expected);
        }
    }
}
