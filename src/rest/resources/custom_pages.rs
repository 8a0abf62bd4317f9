//! Custom error pages of a zone.

use serde_json::{json, Value};

use crate::client::CloudflareClient;
use crate::clients::{HttpMethod, HttpRequest};
use crate::error::ApiError;
use crate::rest::resources::zone_path;
use crate::rest::Args;

const PAGE_STATES: [&str; 2] = ["default", "customized"];

/// Lists the custom pages of a zone.
///
/// # Errors
///
/// Returns an error when `zone_id` is absent or blank.
pub fn custom_pages(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let zone = zone_path(args)?;
    Ok(HttpRequest::builder(HttpMethod::Get, format!("{zone}/custom_pages")).build()?)
}

/// Fetches one custom page.
///
/// # Errors
///
/// Returns an error when `zone_id` or `id` is blank.
pub fn custom_page(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "id"])?;
    let zone = zone_path(args)?;
    let id = args.id("id", "id must not be nil")?;
    Ok(HttpRequest::builder(HttpMethod::Get, format!("{zone}/custom_pages/{id}")).build()?)
}

/// Points a custom page at `url` and sets its `state`.
///
/// # Errors
///
/// Returns an error when a keyword is blank or `state` is unknown.
pub fn update_custom_page(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "id", "url", "state"])?;
    let zone = zone_path(args)?;
    let id = args.id("id", "id required")?;
    let url = args.required("url", "url required")?;
    let state = args.required_one_of(
        "state",
        &PAGE_STATES,
        "state must be either default | customized",
    )?;

    Ok(
        HttpRequest::builder(HttpMethod::Put, format!("{zone}/custom_pages/{id}"))
            .body(json!({ "url": url, "state": state }))
            .build()?,
    )
}

impl CloudflareClient {
    /// Lists custom pages. See [`custom_pages`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn custom_pages(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), custom_pages).await
    }

    /// Fetches a custom page. See [`custom_page`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn custom_page(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), custom_page).await
    }

    /// Updates a custom page. See [`update_custom_page`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn update_custom_page(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), update_custom_page).await
    }
}
