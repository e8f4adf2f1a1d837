//! HTTP execution layer for Ozon Seller API communication.
//!
//! This module provides the single code path every API call goes through. It
//! handles authentication headers, timeouts, cancellation, error
//! classification and retries.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async executor shared by every API category
//! - [`HttpRequest`]: A prepared request handed to the transport
//! - [`HttpResponse`]: A raw response with `Retry-After` and request id parsed
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`RequestOptions`]: Per-call overrides (timeout, headers, cancellation)
//! - [`RetryPolicy`]: Attempt budget and backoff bounds
//! - [`Transport`]: The seam between the executor and the network
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ozon_seller_api::auth::AuthManager;
//! use ozon_seller_api::clients::HttpClient;
//! use ozon_seller_api::types::{EmptyRequest, ResultResponse};
//!
//! let config = Arc::new(OzonConfig::from_env()?);
//! let auth = AuthManager::new(Arc::clone(&config))?;
//! let client = HttpClient::new(config, auth)?;
//!
//! let info: serde_json::Value = client
//!     .post("/v1/seller/info", &EmptyRequest::default(), None)
//!     .await?;
//! ```
//!
//! # Retry Behavior
//!
//! - **429 (Rate Limited)**: Waits exactly the `Retry-After` value when sent,
//!   otherwise backs off exponentially
//! - **5xx, connection errors, timeouts**: Exponential backoff with jitter
//! - **Other 4xx**: Returned immediately without retry
//!
//! The default budget is 3 attempts; see [`RetryPolicy`].

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod retry;
mod transport;

pub use errors::{HttpResponseError, TransportError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, RequestOptions};
pub use http_response::HttpResponse;
pub use retry::{get_retry_delay, is_retryable_error, RetryPolicy};
pub use transport::{ReqwestTransport, Transport};

#[cfg(test)]
pub use transport::MockTransport;
