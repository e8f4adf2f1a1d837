//! Branded newtype wrappers for identifiers and configuration values.
//!
//! Every identifier the SDK handles is a plain string on the wire, but each
//! gets its own type here so the compiler rejects passing an API key where a
//! client id is expected. Values are only created through the factory
//! functions below.

use std::fmt;

use crate::error::ConfigError;

/// An Ozon Seller API key, sent in the `Api-Key` header.
///
/// The key is masked in debug output to prevent accidental exposure in logs.
/// Emptiness is checked by [`AuthManager`](crate::auth::AuthManager) when the
/// SDK is constructed.
///
/// An API key can never stand in for a client id:
///
/// ```compile_fail
/// use ozon_seller_api::{ApiKey, ClientId};
///
/// fn takes_client_id(_: ClientId) {}
/// takes_client_id(ApiKey::new("secret"));
/// ```
///
/// # Example
///
/// ```rust
/// use ozon_seller_api::ApiKey;
///
/// let key = ApiKey::new("my-api-key");
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a raw API key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns `true` if the key is empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// An Ozon seller client id, sent in the `Client-Id` header.
///
/// # Example
///
/// ```rust
/// use ozon_seller_api::ClientId;
///
/// let client_id = ClientId::new("123456");
/// assert_eq!(client_id.to_string(), "123456");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClientId(String);

impl ClientId {
    /// Wraps a raw client id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns `true` if the id is empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A server-assigned request identifier, useful when contacting support.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// Wraps a raw request id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl AsRef<str> for RequestId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A token that lets the server deduplicate retried attempts of one
/// logical operation.
///
/// # Example
///
/// ```rust
/// use ozon_seller_api::IdempotencyKey;
///
/// let supplied = IdempotencyKey::new("order-42-ship");
/// assert_eq!(supplied.as_ref(), "order-42-ship");
///
/// let generated = IdempotencyKey::generate();
/// assert_ne!(generated, IdempotencyKey::generate());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IdempotencyKey(String);

impl IdempotencyKey {
    /// Wraps a caller-supplied key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Generates a fresh random (UUID v4) key.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl AsRef<str> for IdempotencyKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdempotencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated base URL for the Ozon Seller API.
///
/// The URL must carry an `http` or `https` scheme and a host. A trailing
/// slash is stripped so paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use ozon_seller_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api-seller.ozon.ru/").unwrap();
/// assert_eq!(url.as_ref(), "https://api-seller.ozon.ru");
/// assert_eq!(url.host_name(), "api-seller.ozon.ru");
/// assert_eq!(url.join("/v3/product/list"), "https://api-seller.ozon.ru/v3/product/list");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no supported
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("https") && !scheme.eq_ignore_ascii_case("http") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start || remainder.contains(['?', '#']) {
            return Err(invalid());
        }

        Ok(Self {
            url,
            host_start,
            host_end,
        })
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Appends `path` to the base URL, inserting a `/` if needed.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.url)
        } else {
            format!("{}/{path}", self.url)
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("super-secret-key");
        let debug_output = format!("{key:?}");
        assert_eq!(debug_output, "ApiKey(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_blank_detection() {
        assert!(ApiKey::new("").is_blank());
        assert!(ApiKey::new("   ").is_blank());
        assert!(!ApiKey::new("key").is_blank());
        assert!(ClientId::new("\t").is_blank());
        assert!(!ClientId::new("42").is_blank());
    }

    #[test]
    fn test_generated_idempotency_keys_are_unique_uuids() {
        let first = IdempotencyKey::generate();
        let second = IdempotencyKey::generate();
        assert_ne!(first, second);
        assert!(uuid::Uuid::parse_str(first.as_ref()).is_ok());
    }

    #[test]
    fn test_base_url_accepts_http_and_https() {
        let url = BaseUrl::new("https://api-seller.ozon.ru").unwrap();
        assert_eq!(url.host_name(), "api-seller.ozon.ru");

        let url = BaseUrl::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
        assert_eq!(url.host_name(), "127.0.0.1");
    }

    #[test]
    fn test_base_url_keeps_path_prefix() {
        let url = BaseUrl::new("https://proxy.example.com/ozon/").unwrap();
        assert_eq!(
            url.join("v1/warehouse/list"),
            "https://proxy.example.com/ozon/v1/warehouse/list"
        );
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        // No scheme
        assert!(BaseUrl::new("api-seller.ozon.ru").is_err());

        // Empty host
        assert!(BaseUrl::new("https://").is_err());

        // Unsupported scheme
        assert!(BaseUrl::new("ftp://api-seller.ozon.ru").is_err());

        // Query strings belong on requests, not the base
        assert!(matches!(
            BaseUrl::new("https://api-seller.ozon.ru?x=1"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }
}
