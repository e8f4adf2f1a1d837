//! Retry policy for the HTTP client.
//!
//! Two pure functions decide what happens after a failed attempt:
//! [`is_retryable_error`] says whether another attempt is safe, and
//! [`get_retry_delay`] says how long to wait before it.

use std::time::Duration;

use rand::Rng;

use crate::error::{ConfigError, OzonError};

/// Retry limits applied to every logical call.
///
/// `max_attempts` counts the first attempt, so the default of 3 allows two
/// retries.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use ozon_seller_api::RetryPolicy;
///
/// let policy = RetryPolicy::new(5)
///     .with_base_delay(Duration::from_millis(200))
///     .with_max_delay(Duration::from_secs(5));
///
/// assert_eq!(policy.max_attempts, 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts per logical call, including the first.
    pub max_attempts: u32,
    /// Base delay of the exponential backoff; also the jitter range.
    pub base_delay: Duration,
    /// Cap of the exponential part of the delay.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// Creates a policy with the given attempt budget and default delays.
    #[must_use]
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Self::default()
        }
    }

    /// Sets the base delay.
    #[must_use]
    pub const fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    /// Sets the maximum delay.
    #[must_use]
    pub const fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Checks the policy for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRetryPolicy`] if `max_attempts` is zero
    /// or `base_delay` exceeds `max_delay`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::InvalidRetryPolicy {
                reason: "max_attempts must be at least 1".to_string(),
            });
        }
        if self.base_delay > self.max_delay {
            return Err(ConfigError::InvalidRetryPolicy {
                reason: format!(
                    "base_delay ({:?}) must not exceed max_delay ({:?})",
                    self.base_delay, self.max_delay
                ),
            });
        }
        Ok(())
    }
}

/// Returns `true` exactly for the error kinds that are safe to retry:
/// rate limiting, server errors, connection failures and timeouts.
///
/// Every variant is listed explicitly so a new kind cannot be added without
/// deciding its retryability.
#[must_use]
pub const fn is_retryable_error(error: &OzonError) -> bool {
    match error {
        OzonError::RateLimit { .. }
        | OzonError::InternalServer(_)
        | OzonError::Connection { .. }
        | OzonError::Timeout { .. } => true,
        OzonError::BadRequest(_)
        | OzonError::Authentication(_)
        | OzonError::Permission(_)
        | OzonError::NotFound(_)
        | OzonError::Validation(_)
        | OzonError::Api(_)
        | OzonError::Cancelled { .. }
        | OzonError::Configuration(_)
        | OzonError::Sdk { .. } => false,
    }
}

/// Computes how long to wait before retry number `attempt` (1-indexed).
///
/// A rate-limit error carrying a server `Retry-After` hint waits exactly
/// that long. Everything else waits `base * 2^(attempt-1)`, capped at
/// `max_delay`, plus a uniform jitter in `[0, base)`.
#[must_use]
pub fn get_retry_delay(attempt: u32, error: &OzonError, policy: &RetryPolicy) -> Duration {
    if let OzonError::RateLimit {
        retry_after: Some(retry_after),
        ..
    } = error
    {
        return *retry_after;
    }

    let exponent = attempt.saturating_sub(1).min(31);
    let backoff = policy
        .base_delay
        .checked_mul(1_u32 << exponent)
        .map_or(policy.max_delay, |delay| delay.min(policy.max_delay));

    backoff + jitter(policy.base_delay)
}

fn jitter(base: Duration) -> Duration {
    let base_nanos = u64::try_from(base.as_nanos()).unwrap_or(u64::MAX);
    if base_nanos == 0 {
        return Duration::ZERO;
    }
    Duration::from_nanos(rand::thread_rng().gen_range(0..base_nanos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpResponseError, TransportError};

    fn response_error(status: u16) -> HttpResponseError {
        HttpResponseError {
            status,
            code: None,
            message: "error".to_string(),
            details: None,
            body: String::new(),
            request_id: None,
            attempts: 1,
        }
    }

    fn all_errors() -> Vec<OzonError> {
        vec![
            OzonError::BadRequest(response_error(400)),
            OzonError::Authentication(response_error(401)),
            OzonError::Permission(response_error(403)),
            OzonError::NotFound(response_error(404)),
            OzonError::Validation(response_error(422)),
            OzonError::RateLimit {
                error: response_error(429),
                retry_after: None,
            },
            OzonError::InternalServer(response_error(500)),
            OzonError::Api(response_error(409)),
            OzonError::Connection {
                source: TransportError::Connection("reset".into()),
                attempts: 1,
            },
            OzonError::Timeout {
                timeout: Duration::from_secs(1),
                attempts: 1,
            },
            OzonError::Cancelled { attempts: 1 },
            OzonError::Configuration(ConfigError::EmptyApiKey),
            OzonError::Sdk {
                message: "shape mismatch".to_string(),
                status: Some(200),
                attempts: 1,
                source: None,
            },
        ]
    }

    #[test]
    fn test_only_transient_kinds_are_retryable() {
        for error in all_errors() {
            let expected = matches!(
                error,
                OzonError::RateLimit { .. }
                    | OzonError::InternalServer(_)
                    | OzonError::Connection { .. }
                    | OzonError::Timeout { .. }
            );
            assert_eq!(is_retryable_error(&error), expected, "{:?}", error.kind());
            assert_eq!(error.is_retryable(), expected);
        }
    }

    #[test]
    fn test_retry_after_is_returned_exactly() {
        let policy = RetryPolicy::default();
        let error = OzonError::RateLimit {
            error: response_error(429),
            retry_after: Some(Duration::from_secs(5)),
        };

        for attempt in 1..=6 {
            assert_eq!(get_retry_delay(attempt, &error, &policy), Duration::from_secs(5));
        }
    }

    #[test]
    fn test_rate_limit_without_hint_uses_backoff() {
        let policy = RetryPolicy::default().with_base_delay(Duration::from_millis(100));
        let error = OzonError::RateLimit {
            error: response_error(429),
            retry_after: None,
        };

        let delay = get_retry_delay(2, &error, &policy);
        assert!(delay >= Duration::from_millis(200));
        assert!(delay < Duration::from_millis(300));
    }

    #[test]
    fn test_backoff_stays_within_jitter_window() {
        let base = Duration::from_millis(100);
        let policy = RetryPolicy::default()
            .with_base_delay(base)
            .with_max_delay(Duration::from_secs(60));
        let error = OzonError::InternalServer(response_error(500));

        for attempt in 1..=5_u32 {
            let lower = base * 2_u32.pow(attempt - 1);
            for _ in 0..50 {
                let delay = get_retry_delay(attempt, &error, &policy);
                assert!(delay >= lower, "attempt {attempt}: {delay:?} < {lower:?}");
                assert!(delay < lower + base, "attempt {attempt}: {delay:?} too large");
            }
        }
    }

    #[test]
    fn test_backoff_is_capped() {
        let policy = RetryPolicy::default()
            .with_base_delay(Duration::from_secs(1))
            .with_max_delay(Duration::from_secs(4));
        let error = OzonError::Timeout {
            timeout: Duration::from_secs(1),
            attempts: 1,
        };

        for attempt in [3, 10, 40, u32::MAX] {
            let delay = get_retry_delay(attempt, &error, &policy);
            assert!(delay >= Duration::from_secs(4));
            assert!(delay < Duration::from_secs(5));
        }
    }

    #[test]
    fn test_zero_base_delay_has_no_jitter() {
        let policy = RetryPolicy::default().with_base_delay(Duration::ZERO);
        let error = OzonError::InternalServer(response_error(503));
        assert_eq!(get_retry_delay(3, &error, &policy), Duration::ZERO);
    }

    #[test]
    fn test_validate_rejects_inverted_delays() {
        let policy = RetryPolicy::default()
            .with_base_delay(Duration::from_secs(10))
            .with_max_delay(Duration::from_secs(1));
        assert!(matches!(
            policy.validate(),
            Err(ConfigError::InvalidRetryPolicy { .. })
        ));
        assert!(RetryPolicy::default().validate().is_ok());
    }
}
