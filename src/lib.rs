//! # Cloudflare API Rust SDK
//!
//! An async client for the Cloudflare v4 REST API with one method per
//! endpoint: zones, DNS records, railguns, analytics, custom pages, SSL
//! (custom, keyless, certificate packs and origin CA), custom hostnames,
//! page rules, rate limits, firewall access rules, WAF, subscriptions,
//! organizations, virtual DNS and request logs.
//!
//! ## Overview
//!
//! - Type-safe configuration via [`CloudflareConfig`] and [`CloudflareConfigBuilder`]
//! - Validated newtypes for credentials and the API root
//! - Local argument validation with the exact message the caller sees
//! - Pure request builders that can be inspected without I/O
//! - An async transport that surfaces the API's first error message
//!
//! ## Quick Start
//!
//! ```rust
//! use cloudflare_api::{AuthEmail, AuthKey, CloudflareConfig};
//!
//! let config = CloudflareConfig::builder()
//!     .auth_key(AuthKey::new("somefakekey").unwrap())
//!     .email(AuthEmail::new("foo@bar.com").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use cloudflare_api::{Args, CloudflareClient};
//!
//! let client = CloudflareClient::with_credentials(Some("somefakekey"), Some("foo@bar.com"))?;
//!
//! let zones = client
//!     .zones(Args::new().set("status", "active").set("per_page", 20))
//!     .await?;
//! for zone in zones["result"].as_array().into_iter().flatten() {
//!     println!("{}", zone["name"]);
//! }
//! ```
//!
//! ## Error Handling
//!
//! Invalid arguments fail before any I/O:
//!
//! ```rust
//! use cloudflare_api::{ApiError, Args};
//! use cloudflare_api::rest::resources::zones;
//!
//! let err = zones::create_zone(&Args::new()).unwrap_err();
//! assert!(matches!(err, ApiError::MissingRequiredField { .. }));
//! assert_eq!(err.to_string(), "missing keyword: name");
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: newtypes validate on construction, operations
//!   validate before sending
//! - **Thread-safe**: all public types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **One request per call**: no hidden retries or pagination loops

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

mod client;

pub use client::CloudflareClient;
pub use config::{AuthEmail, AuthKey, BaseUrl, CloudflareConfig, CloudflareConfigBuilder};
pub use error::{ApiError, ConfigError};
pub use rest::Args;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, ResultInfo,
};
