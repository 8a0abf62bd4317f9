//! Railguns owned by the user (`railguns`) or by an organization
//! (`organizations/{org_id}/railguns`).

use serde_json::{json, Value};

use crate::client::CloudflareClient;
use crate::clients::{HttpMethod, HttpRequest};
use crate::error::ApiError;
use crate::rest::params::ArgsQuery;
use crate::rest::resources::org_path;
use crate::rest::Args;

const DIRECTIONS: [&str; 2] = ["desc", "asc"];
const RAILGUN_ID_MESSAGE: &str = "must provide the id of the railgun";

fn user_railgun_path(args: &Args) -> Result<String, ApiError> {
    Ok(format!("railguns/{}", args.id("id", RAILGUN_ID_MESSAGE)?))
}

fn org_railgun_path(args: &Args) -> Result<String, ApiError> {
    let org = org_path(args)?;
    let id = args.id("id", "id required")?;
    Ok(format!("{org}/railguns/{id}"))
}

// ============================================================================
// User railguns
// ============================================================================

/// Creates a railgun.
///
/// # Errors
///
/// Returns an error when `name` is absent or blank.
pub fn create_railgun(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["name"])?;
    let name = args.required("name", "Railgun name cannot be nil")?;
    Ok(HttpRequest::builder(HttpMethod::Post, "railguns")
        .body(json!({ "name": name }))
        .build()?)
}

/// Lists railguns, newest first unless `direction` is `asc`.
///
/// # Errors
///
/// Returns an error for an unknown `direction`.
pub fn railguns(args: &Args) -> Result<HttpRequest, ApiError> {
    let direction = args.one_of_or(
        "direction",
        &DIRECTIONS,
        "desc",
        "direction must be either desc | asc",
    )?;
    Ok(HttpRequest::builder(HttpMethod::Get, "railguns")
        .query_param("direction", direction)
        .paginate(args)
        .build()?)
}

/// Fetches one railgun.
///
/// # Errors
///
/// Returns an error when `id` is absent or blank.
pub fn railgun(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["id"])?;
    Ok(HttpRequest::builder(HttpMethod::Get, user_railgun_path(args)?).build()?)
}

/// Lists the zones connected to a railgun.
///
/// # Errors
///
/// Returns an error when `id` is absent or blank.
pub fn railgun_zones(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["id"])?;
    let path = user_railgun_path(args)?;
    Ok(HttpRequest::builder(HttpMethod::Get, format!("{path}/zones")).build()?)
}

/// Enables or disables a railgun.
///
/// # Errors
///
/// Returns an error when `enabled` is not a boolean.
pub fn railgun_enabled(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["id", "enabled"])?;
    let path = user_railgun_path(args)?;
    let enabled = args.bool_required("enabled", "enabled must be true | false")?;
    Ok(HttpRequest::builder(HttpMethod::Patch, path)
        .body(json!({ "enabled": enabled }))
        .build()?)
}

/// Deletes a railgun.
///
/// # Errors
///
/// Returns an error when `id` is absent or blank.
pub fn delete_railgun(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["id"])?;
    Ok(HttpRequest::builder(HttpMethod::Delete, user_railgun_path(args)?).build()?)
}

// ============================================================================
// Organization railguns
// ============================================================================

/// Creates a railgun owned by an organization.
///
/// # Errors
///
/// Returns an error when `org_id` or `name` is blank.
pub fn create_org_railguns(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["org_id", "name"])?;
    let org = org_path(args)?;
    let name = args.required("name", "name required")?;
    Ok(HttpRequest::builder(HttpMethod::Post, format!("{org}/railguns"))
        .body(json!({ "name": name }))
        .build()?)
}

/// Lists an organization's railguns.
///
/// # Errors
///
/// Returns an error when `org_id` is blank or `direction` is unknown.
pub fn org_railguns(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["org_id"])?;
    let org = org_path(args)?;
    let direction = args.one_of_or(
        "direction",
        &DIRECTIONS,
        "desc",
        "direction must be either asc or desc",
    )?;
    Ok(HttpRequest::builder(HttpMethod::Get, format!("{org}/railguns"))
        .query_param("direction", direction)
        .paginate(args)
        .build()?)
}

/// Fetches one organization railgun.
///
/// # Errors
///
/// Returns an error when `org_id` or `id` is blank.
pub fn org_railgun(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["org_id", "id"])?;
    Ok(HttpRequest::builder(HttpMethod::Get, org_railgun_path(args)?).build()?)
}

/// Lists the zones connected to an organization railgun.
///
/// # Errors
///
/// Returns an error when `org_id` or `id` is blank.
pub fn org_railgun_connected_zones(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["org_id", "id"])?;
    let path = org_railgun_path(args)?;
    Ok(HttpRequest::builder(HttpMethod::Get, format!("{path}/zones")).build()?)
}

/// Enables or disables an organization railgun.
///
/// # Errors
///
/// Returns an error when `enabled` is `null` or not a boolean.
pub fn enable_org_railgun(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["org_id", "id", "enabled"])?;
    let path = org_railgun_path(args)?;
    if args.value("enabled").is_none() {
        return Err(ApiError::invalid("enabled", "enabled required"));
    }
    let enabled = args.bool_required("enabled", "enabled must be true or false")?;
    Ok(HttpRequest::builder(HttpMethod::Patch, path)
        .body(json!({ "enabled": enabled }))
        .build()?)
}

/// Deletes an organization railgun.
///
/// # Errors
///
/// Returns an error when `org_id` or `id` is blank.
pub fn delete_org_railgun(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["org_id", "id"])?;
    Ok(HttpRequest::builder(HttpMethod::Delete, org_railgun_path(args)?).build()?)
}

impl CloudflareClient {
    /// Creates a railgun. See [`create_railgun`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn create_railgun(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), create_railgun).await
    }

    /// Lists railguns. See [`railguns`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn railguns(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), railguns).await
    }

    /// Fetches a railgun. See [`railgun`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn railgun(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), railgun).await
    }

    /// Lists zones connected to a railgun. See [`railgun_zones`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn railgun_zones(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), railgun_zones).await
    }

    /// Enables or disables a railgun. See [`railgun_enabled`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn railgun_enabled(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), railgun_enabled).await
    }

    /// Deletes a railgun. See [`delete_railgun`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn delete_railgun(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), delete_railgun).await
    }

    /// Creates an organization railgun. See [`create_org_railguns`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn create_org_railguns(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), create_org_railguns).await
    }

    /// Lists organization railguns. See [`org_railguns`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn org_railguns(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), org_railguns).await
    }

    /// Fetches an organization railgun. See [`org_railgun`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn org_railgun(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), org_railgun).await
    }

    /// Lists zones connected to an organization railgun.
    /// See [`org_railgun_connected_zones`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn org_railgun_connected_zones(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), org_railgun_connected_zones).await
    }

    /// Enables or disables an organization railgun. See [`enable_org_railgun`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn enable_org_railgun(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), enable_org_railgun).await
    }

    /// Deletes an organization railgun. See [`delete_org_railgun`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn delete_org_railgun(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), delete_org_railgun).await
    }
}
