//! Transport layer for Cloudflare API communication.
//!
//! - [`HttpClient`]: the authenticated async client
//! - [`HttpRequest`]: a request descriptor, built by every endpoint operation
//! - [`HttpResponse`]: a parsed response
//! - [`ResultInfo`]: paging metadata from the response envelope
//! - [`HttpMethod`]: GET, POST, PUT, PATCH and DELETE
//!
//! # Example
//!
//! ```rust,ignore
//! use cloudflare_api::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config)?;
//! let request = HttpRequest::builder(HttpMethod::Get, "zones")
//!     .query_param("per_page", "50")
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! println!("{}", response.body["result"]);
//! ```
//!
//! A response is successful only when the status is exactly 200. Anything
//! else becomes [`HttpError::Response`] carrying the first message from the
//! envelope's `errors` array.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, ResultInfo, UNKNOWN_ERROR};
