//! Endpoint layer for the Cloudflare v4 API.
//!
//! Operations take their keyword arguments as an [`Args`] bag, the same way
//! for every endpoint. Each operation checks its arguments, turns them into
//! an [`HttpRequest`](crate::clients::HttpRequest), and leaves sending to the
//! client.
//!
//! # Example
//!
//! ```rust
//! use cloudflare_api::Args;
//! use cloudflare_api::rest::resources::dns;
//!
//! let args = Args::new()
//!     .set("zone_id", "abc1234")
//!     .set("name", "www.example.com")
//!     .set("type", "A")
//!     .set("content", "198.51.100.4");
//! let request = dns::create_dns_record(&args).unwrap();
//! assert_eq!(request.path, "zones/abc1234/dns_records");
//!
//! let err = dns::create_dns_record(&args.set("type", "foo")).unwrap_err();
//! assert!(err.is_validation());
//! ```
//!
//! # Key Types
//!
//! - [`Args`]: keyword arguments for an operation
//! - [`resources`]: the operations, grouped by resource family
//! - [`DEFAULT_PAGE`] and [`DEFAULT_PER_PAGE`]: listing defaults

mod args;
pub(crate) mod params;
pub mod resources;
mod validation;

pub use args::Args;
pub use params::{DEFAULT_PAGE, DEFAULT_PER_PAGE};
