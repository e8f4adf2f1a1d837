//! Configuration types for the Ozon Seller API SDK.
//!
//! This module provides the configuration used to build an
//! [`OzonClient`](crate::OzonClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`OzonConfig`]: The immutable configuration shared by the whole SDK
//! - [`OzonConfigBuilder`]: A builder for constructing [`OzonConfig`] instances
//! - [`ApiKey`] / [`ClientId`]: Branded seller credentials
//! - [`RequestId`] / [`IdempotencyKey`]: Branded per-request identifiers
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use ozon_seller_api::{OzonConfig, ApiKey, ClientId};
//!
//! let config = OzonConfig::builder()
//!     .client_id(ClientId::new("123456"))
//!     .api_key(ApiKey::new("my-api-key"))
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api-seller.ozon.ru");
//! ```

mod newtypes;

use std::time::Duration;

pub use newtypes::{ApiKey, BaseUrl, ClientId, IdempotencyKey, RequestId};

use crate::clients::RetryPolicy;
use crate::error::ConfigError;

/// The production Ozon Seller API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api-seller.ozon.ru";

/// Default per-attempt timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Ozon Seller API SDK.
///
/// Created once per process or session and immutable afterwards. The
/// composition root holds it in an `Arc` and shares it read-only with the
/// [`AuthManager`](crate::auth::AuthManager) and
/// [`HttpClient`](crate::clients::HttpClient).
///
/// # Thread Safety
///
/// `OzonConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct OzonConfig {
    client_id: ClientId,
    api_key: ApiKey,
    base_url: BaseUrl,
    timeout: Duration,
    retry_policy: RetryPolicy,
    user_agent_prefix: Option<String>,
}

impl OzonConfig {
    /// Creates a new builder for constructing an `OzonConfig`.
    #[must_use]
    pub fn builder() -> OzonConfigBuilder {
        OzonConfigBuilder::new()
    }

    /// Builds a configuration from the process environment.
    ///
    /// Reads `OZON_CLIENT_ID` and `OZON_API_KEY` (required) plus the optional
    /// `OZON_BASE_URL`, `OZON_TIMEOUT_SECS` and `OZON_MAX_ATTEMPTS`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is missing or a value
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// This is what [`from_env`](Self::from_env) uses; it accepts any source
    /// of `NAME -> value` pairs, such as a parsed `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is missing or a value
    /// cannot be parsed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use ozon_seller_api::OzonConfig;
    ///
    /// let vars = HashMap::from([
    ///     ("OZON_CLIENT_ID", "123456"),
    ///     ("OZON_API_KEY", "secret"),
    ///     ("OZON_MAX_ATTEMPTS", "5"),
    /// ]);
    ///
    /// let config = OzonConfig::from_lookup(|name| vars.get(name).map(ToString::to_string)).unwrap();
    /// assert_eq!(config.retry_policy().max_attempts, 5);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(client_id) = lookup("OZON_CLIENT_ID") {
            builder = builder.client_id(ClientId::new(client_id));
        }
        if let Some(api_key) = lookup("OZON_API_KEY") {
            builder = builder.api_key(ApiKey::new(api_key));
        }
        if let Some(base_url) = lookup("OZON_BASE_URL") {
            builder = builder.base_url(BaseUrl::new(base_url)?);
        }
        if let Some(value) = lookup("OZON_TIMEOUT_SECS") {
            let secs = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "OZON_TIMEOUT_SECS",
                    value: value.clone(),
                })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(value) = lookup("OZON_MAX_ATTEMPTS") {
            let attempts = value
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "OZON_MAX_ATTEMPTS",
                    value: value.clone(),
                })?;
            builder = builder.max_attempts(attempts);
        }

        builder.build()
    }

    /// Returns the seller client id.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default per-attempt timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the default retry policy.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify OzonConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OzonConfig>();
};

/// Builder for constructing [`OzonConfig`] instances.
///
/// Required fields are `client_id` and `api_key`.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `timeout`: [`DEFAULT_TIMEOUT`]
/// - `retry_policy`: [`RetryPolicy::default`] (3 attempts, 1s base, 30s cap)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct OzonConfigBuilder {
    client_id: Option<ClientId>,
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    timeout: Option<Duration>,
    retry_policy: Option<RetryPolicy>,
    max_attempts: Option<u32>,
    user_agent_prefix: Option<String>,
}

impl OzonConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the seller client id (required).
    #[must_use]
    pub fn client_id(mut self, client_id: ClientId) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API base URL, e.g. to target a sandbox or a proxy.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the default per-attempt timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the full retry policy.
    #[must_use]
    pub const fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = Some(policy);
        self
    }

    /// Overrides only the total number of attempts of the retry policy.
    #[must_use]
    pub const fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`OzonConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `client_id` or
    /// `api_key` are not set, [`ConfigError::InvalidTimeout`] for a zero
    /// timeout, and [`ConfigError::InvalidRetryPolicy`] for an inconsistent
    /// retry policy.
    pub fn build(self) -> Result<OzonConfig, ConfigError> {
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }

        let mut retry_policy = self.retry_policy.unwrap_or_default();
        if let Some(attempts) = self.max_attempts {
            retry_policy.max_attempts = attempts;
        }
        retry_policy.validate()?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_BASE_URL)?,
        };

        Ok(OzonConfig {
            client_id,
            api_key,
            base_url,
            timeout,
            retry_policy,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<&str, &str> = vars.iter().copied().collect();
        move |name| vars.get(name).map(ToString::to_string)
    }

    #[test]
    fn test_builder_requires_client_id() {
        let result = OzonConfigBuilder::new().api_key(ApiKey::new("key")).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "client_id" })
        ));
    }

    #[test]
    fn test_builder_requires_api_key() {
        let result = OzonConfigBuilder::new()
            .client_id(ClientId::new("123"))
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = OzonConfig::builder()
            .client_id(ClientId::new("123"))
            .api_key(ApiKey::new("key"))
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(config.retry_policy(), &RetryPolicy::default());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        let result = OzonConfig::builder()
            .client_id(ClientId::new("123"))
            .api_key(ApiKey::new("key"))
            .timeout(Duration::ZERO)
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidTimeout)));
    }

    #[test]
    fn test_builder_rejects_zero_attempts() {
        let result = OzonConfig::builder()
            .client_id(ClientId::new("123"))
            .api_key(ApiKey::new("key"))
            .max_attempts(0)
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidRetryPolicy { .. })));
    }

    #[test]
    fn test_max_attempts_overrides_policy() {
        let config = OzonConfig::builder()
            .client_id(ClientId::new("123"))
            .api_key(ApiKey::new("key"))
            .retry_policy(RetryPolicy::new(2))
            .max_attempts(7)
            .build()
            .unwrap();

        assert_eq!(config.retry_policy().max_attempts, 7);
    }

    #[test]
    fn test_config_debug_masks_api_key() {
        let config = OzonConfig::builder()
            .client_id(ClientId::new("123"))
            .api_key(ApiKey::new("very-secret"))
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("OzonConfig"));
        assert!(!debug_str.contains("very-secret"));
    }

    #[test]
    fn test_from_lookup_reads_all_variables() {
        let config = OzonConfig::from_lookup(lookup_from(&[
            ("OZON_CLIENT_ID", "123"),
            ("OZON_API_KEY", "key"),
            ("OZON_BASE_URL", "http://localhost:9000"),
            ("OZON_TIMEOUT_SECS", "5"),
            ("OZON_MAX_ATTEMPTS", "4"),
        ]))
        .unwrap();

        assert_eq!(config.client_id().as_ref(), "123");
        assert_eq!(config.base_url().as_ref(), "http://localhost:9000");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.retry_policy().max_attempts, 4);
    }

    #[test]
    fn test_from_lookup_missing_api_key() {
        let result = OzonConfig::from_lookup(lookup_from(&[("OZON_CLIENT_ID", "123")]));
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_from_lookup_rejects_unparsable_timeout() {
        let result = OzonConfig::from_lookup(lookup_from(&[
            ("OZON_CLIENT_ID", "123"),
            ("OZON_API_KEY", "key"),
            ("OZON_TIMEOUT_SECS", "soon"),
        ]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar { name: "OZON_TIMEOUT_SECS", .. })
        ));
    }
}
