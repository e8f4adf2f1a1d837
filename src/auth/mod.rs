//! Authentication for the Ozon Seller API.
//!
//! Ozon authenticates sellers with a static pair of headers, `Client-Id`
//! and `Api-Key`. The [`AuthManager`] validates those credentials once, when
//! the SDK is constructed, and then derives the headers for every request.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use ozon_seller_api::{ApiKey, ClientId, IdempotencyKey, OzonConfig};
//! use ozon_seller_api::auth::{AuthManager, API_KEY_HEADER, IDEMPOTENCY_KEY_HEADER};
//!
//! let config = OzonConfig::builder()
//!     .client_id(ClientId::new("123456"))
//!     .api_key(ApiKey::new("secret"))
//!     .build()
//!     .unwrap();
//!
//! let auth = AuthManager::new(Arc::new(config)).unwrap();
//! let key = IdempotencyKey::new("create-42");
//! let headers = auth.headers_for(Some(&key));
//!
//! assert_eq!(headers[API_KEY_HEADER], "secret");
//! assert_eq!(headers[IDEMPOTENCY_KEY_HEADER], "create-42");
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::{IdempotencyKey, OzonConfig};
use crate::error::ConfigError;

/// Header carrying the seller client id.
pub const CLIENT_ID_HEADER: &str = "Client-Id";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "Api-Key";

/// Header carrying the idempotency key of non-idempotent calls.
pub const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

/// Derives authentication headers from the shared configuration.
///
/// Holds no mutable state; cloning shares the same configuration.
#[derive(Clone, Debug)]
pub struct AuthManager {
    config: Arc<OzonConfig>,
}

// Verify AuthManager is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthManager>();
};

impl AuthManager {
    /// Creates an auth manager, failing fast on incomplete credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] or [`ConfigError::EmptyApiKey`]
    /// if either credential is empty or whitespace.
    pub fn new(config: Arc<OzonConfig>) -> Result<Self, ConfigError> {
        if config.client_id().is_blank() {
            return Err(ConfigError::EmptyClientId);
        }
        if config.api_key().is_blank() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self { config })
    }

    /// Returns the authentication headers for one request.
    ///
    /// The idempotency header is included only when a key is supplied.
    #[must_use]
    pub fn headers_for(&self, idempotency_key: Option<&IdempotencyKey>) -> HashMap<String, String> {
        let mut headers = HashMap::with_capacity(3);
        headers.insert(
            CLIENT_ID_HEADER.to_string(),
            self.config.client_id().as_ref().to_string(),
        );
        headers.insert(
            API_KEY_HEADER.to_string(),
            self.config.api_key().as_ref().to_string(),
        );
        if let Some(key) = idempotency_key {
            headers.insert(IDEMPOTENCY_KEY_HEADER.to_string(), key.as_ref().to_string());
        }
        headers
    }
}
