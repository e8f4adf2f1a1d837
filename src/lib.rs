//! # Ozon Seller API Rust SDK
//!
//! A Rust SDK for the Ozon Seller API, providing type-safe configuration,
//! credential handling, and a single resilient HTTP execution core shared by
//! every API category.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`OzonConfig`] and [`OzonConfigBuilder`]
//! - Distinct newtypes for credentials and identifiers ([`ApiKey`],
//!   [`ClientId`], [`RequestId`], [`IdempotencyKey`])
//! - One async executor ([`HttpClient`]) with per-attempt timeouts,
//!   cancellation, and retries with exponential backoff
//! - A closed error taxonomy ([`OzonError`]) that classifies every failure
//!   exactly once
//! - Typed wrappers for all 33 API categories via [`OzonClient`]
//!
//! ## Quick Start
//!
//! ```rust
//! use ozon_seller_api::{ApiKey, ClientId, OzonClient, OzonConfig, RetryPolicy};
//! use std::time::Duration;
//!
//! let config = OzonConfig::builder()
//!     .client_id(ClientId::new("123456"))
//!     .api_key(ApiKey::new("your-api-key"))
//!     .timeout(Duration::from_secs(10))
//!     .retry_policy(RetryPolicy::new(5))
//!     .build()
//!     .unwrap();
//!
//! let client = OzonClient::new(config).unwrap();
//! assert_eq!(client.config().client_id().as_ref(), "123456");
//! ```
//!
//! ## Configuration From the Environment
//!
//! ```rust,ignore
//! use ozon_seller_api::{OzonClient, OzonConfig};
//!
//! // Reads OZON_CLIENT_ID, OZON_API_KEY and the optional OZON_BASE_URL,
//! // OZON_TIMEOUT_SECS and OZON_MAX_ATTEMPTS.
//! let client = OzonClient::new(OzonConfig::from_env()?)?;
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use ozon_seller_api::categories::product::{ProductFilter, ProductListRequest};
//! use ozon_seller_api::types::PaginationParams;
//! use ozon_seller_api::RequestOptions;
//! use std::time::Duration;
//!
//! let request = ProductListRequest {
//!     filter: ProductFilter::default(),
//!     page: PaginationParams::cursor(100, ""),
//! };
//!
//! // Per-call overrides: a shorter timeout and no retries.
//! let options = RequestOptions::new()
//!     .timeout(Duration::from_secs(5))
//!     .max_attempts(1);
//!
//! let page = client.product().list(&request, Some(options)).await?;
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use ozon_seller_api::OzonError;
//!
//! match client.finance().transaction_list(&request, None).await {
//!     Ok(page) => println!("{} operations", page.result.row_count),
//!     Err(OzonError::RateLimit { retry_after, .. }) => {
//!         println!("Still rate limited, server asked for {retry_after:?}");
//!     }
//!     Err(e) if e.is_retryable() => println!("Gave up after {} attempts", e.attempts()),
//!     Err(e) => println!("Failed: {e}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Credentials are checked before any request
//! - **Thread-safe**: All public client types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **One code path**: Every category call goes through [`HttpClient::request`]

pub mod auth;
pub mod categories;
pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod types;

// Re-export public types at crate root for convenience
pub use client::OzonClient;
pub use config::{
    ApiKey, BaseUrl, ClientId, IdempotencyKey, OzonConfig, OzonConfigBuilder, RequestId,
};
pub use error::{ConfigError, ErrorKind, OzonError};

// Re-export HTTP client types
pub use clients::{
    get_retry_delay, is_retryable_error, HttpClient, HttpMethod, RequestOptions, RetryPolicy,
};
