//! HTTP request types for the Ozon Seller API SDK.
//!
//! This module provides [`HttpMethod`], the transport-level [`HttpRequest`]
//! and the per-call [`RequestOptions`].

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::config::IdempotencyKey;

/// HTTP methods used by the Ozon Seller API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method; used by almost every Ozon endpoint.
    Post,
    /// HTTP PUT method for replacing resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` if repeating the request cannot duplicate its effect.
    ///
    /// Non-idempotent calls get an auto-generated idempotency key so the
    /// server can deduplicate retried attempts.
    #[must_use]
    pub const fn is_idempotent(self) -> bool {
        !matches!(self, Self::Post)
    }

    /// Returns `true` if a JSON body is sent with this method.
    #[must_use]
    pub const fn has_body(self) -> bool {
        !matches!(self, Self::Get)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// A fully prepared request handed to a [`Transport`](crate::clients::Transport).
///
/// The HTTP client builds one of these per logical call and sends the same
/// value on every attempt, so headers (including the idempotency key) never
/// change between retries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The absolute URL.
    pub url: String,
    /// Headers to send, including authentication.
    pub headers: HashMap<String, String>,
    /// The serialized JSON body, if any.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Returns the value of a header, matching the name case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Per-call overrides for a single logical API call.
///
/// Every field is optional; anything left unset falls back to the
/// [`OzonConfig`](crate::OzonConfig) defaults.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use ozon_seller_api::{IdempotencyKey, RequestOptions};
/// use tokio_util::sync::CancellationToken;
///
/// let token = CancellationToken::new();
/// let options = RequestOptions::new()
///     .timeout(Duration::from_secs(5))
///     .max_attempts(1)
///     .idempotency_key(IdempotencyKey::new("ship-order-42"))
///     .header("X-Trace", "abc")
///     .cancellation(token.clone());
///
/// assert_eq!(options.timeout, Some(Duration::from_secs(5)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    /// Per-attempt timeout override.
    pub timeout: Option<Duration>,
    /// Additional headers; these win over SDK headers on conflict.
    pub headers: HashMap<String, String>,
    /// Idempotency key to reuse on every attempt.
    pub idempotency_key: Option<IdempotencyKey>,
    /// Token that aborts the call, including pending retries.
    pub cancellation: Option<CancellationToken>,
    /// Override of the total attempts for this call.
    pub max_attempts: Option<u32>,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-attempt timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds a single header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the idempotency key.
    #[must_use]
    pub fn idempotency_key(mut self, key: IdempotencyKey) -> Self {
        self.idempotency_key = Some(key);
        self
    }

    /// Sets the cancellation token.
    #[must_use]
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Sets the total attempts for this call.
    #[must_use]
    pub const fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_only_post_is_non_idempotent() {
        assert!(!HttpMethod::Post.is_idempotent());
        assert!(HttpMethod::Get.is_idempotent());
        assert!(HttpMethod::Put.is_idempotent());
        assert!(HttpMethod::Delete.is_idempotent());
    }

    #[test]
    fn test_get_has_no_body() {
        assert!(!HttpMethod::Get.has_body());
        assert!(HttpMethod::Post.has_body());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let request = HttpRequest {
            method: HttpMethod::Post,
            url: "https://api-seller.ozon.ru/v1/warehouse/list".to_string(),
            headers: HashMap::from([("Api-Key".to_string(), "secret".to_string())]),
            body: None,
        };
        assert_eq!(request.header("api-key"), Some("secret"));
        assert_eq!(request.header("client-id"), None);
    }

    #[test]
    fn test_options_builder_sets_fields() {
        let options = RequestOptions::new()
            .max_attempts(5)
            .header("X-Custom-Header", "custom-value");

        assert_eq!(options.max_attempts, Some(5));
        assert_eq!(
            options.headers.get("X-Custom-Header"),
            Some(&"custom-value".to_string())
        );
        assert!(options.timeout.is_none());
        assert!(options.cancellation.is_none());
    }
}
