//! Endpoint operations, one module per resource family.
//!
//! Each module exposes two layers:
//!
//! - pure request builders, `fn(&Args) -> Result<HttpRequest, ApiError>`,
//!   which validate arguments and produce a request descriptor without I/O
//! - async methods on [`CloudflareClient`](crate::CloudflareClient) with the
//!   same names, which run the builder and send the request
//!
//! Validation always runs in the same order: structurally required keywords
//! first, then per-field checks in declaration order, then cross-field rules.
//!
//! # Example
//!
//! ```rust
//! use cloudflare_api::Args;
//! use cloudflare_api::clients::HttpMethod;
//! use cloudflare_api::rest::resources::zones;
//!
//! let request = zones::purge_zone_cache(
//!     &Args::new().set("zone_id", "abc1234").set("purge_everything", true),
//! )
//! .unwrap();
//! assert_eq!(request.http_method, HttpMethod::Delete);
//! assert_eq!(request.path, "zones/abc1234/purge_cache");
//! ```

pub mod analytics;
pub mod certificates;
pub mod custom_hostnames;
pub mod custom_pages;
pub mod custom_ssl;
pub mod dns;
pub mod firewall;
pub mod keyless_ssl;
pub mod logs;
pub mod organizations;
pub mod page_rules;
pub mod railguns;
pub mod rate_limits;
pub mod ssl;
pub mod subscriptions;
pub mod virtual_dns;
pub mod waf;
pub mod zone_railguns;
pub mod zones;

use crate::error::ApiError;
use crate::rest::Args;

/// Bundle methods accepted by custom and keyless SSL uploads.
pub const BUNDLE_METHODS: [&str; 3] = ["ubiquitous", "optimal", "force"];

pub(crate) const BUNDLE_MESSAGE: &str =
    r#"valid bundle methods are ["ubiquitous", "optimal", "force"]"#;

/// Returns `zones/{zone_id}`.
pub(crate) fn zone_path(args: &Args) -> Result<String, ApiError> {
    Ok(format!("zones/{}", args.id("zone_id", "zone_id required")?))
}

/// Returns `organizations/{org_id}`.
pub(crate) fn org_path(args: &Args) -> Result<String, ApiError> {
    Ok(format!(
        "organizations/{}",
        args.id("org_id", "org_id required")?
    ))
}
