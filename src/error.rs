//! Error types for the Ozon Seller API SDK.
//!
//! This module contains the closed error taxonomy returned by every API call
//! ([`OzonError`]) and the configuration errors raised while the SDK is being
//! constructed ([`ConfigError`]).
//!
//! # Error Handling
//!
//! Every failed call surfaces exactly one [`OzonError`] variant. Transient
//! kinds (rate limiting, server errors, connection failures and timeouts) are
//! retried transparently by the HTTP client; when retries run out the *last*
//! classified error is returned, annotated with the number of attempts made.
//!
//! # Example
//!
//! ```rust
//! use ozon_seller_api::{ErrorKind, OzonError, ConfigError};
//!
//! let error = OzonError::from(ConfigError::EmptyApiKey);
//! assert_eq!(error.kind(), ErrorKind::Configuration);
//! assert!(!error.is_retryable());
//! ```

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::clients::{HttpResponseError, TransportError};
use crate::config::RequestId;

/// Errors that can occur during SDK configuration.
///
/// These are raised synchronously while the configuration or the
/// [`OzonClient`](crate::OzonClient) is being built, so they can never be
/// attributed to a specific API call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Ozon Seller API key.")]
    EmptyApiKey,

    /// Client id cannot be empty.
    #[error("Client id cannot be empty. Please provide the Client-Id from the Ozon seller account.")]
    EmptyClientId,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api-seller.ozon.ru').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Timeout must be greater than zero.
    #[error("Invalid timeout: the request timeout must be greater than zero.")]
    InvalidTimeout,

    /// Retry policy values are inconsistent.
    #[error("Invalid retry policy: {reason}")]
    InvalidRetryPolicy {
        /// Why the policy was rejected.
        reason: String,
    },

    /// An environment variable holds a value that cannot be parsed.
    #[error("Invalid value '{value}' for environment variable {name}.")]
    InvalidEnvVar {
        /// The variable name.
        name: &'static str,
        /// The value that failed to parse.
        value: String,
    },

    /// The underlying HTTP transport could not be initialized.
    #[error("Failed to initialize the HTTP transport: {reason}")]
    TransportInit {
        /// The error reported by the transport builder.
        reason: String,
    },
}

/// Discriminant of an [`OzonError`], useful for logging and matching
/// without borrowing the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// HTTP 400.
    BadRequest,
    /// HTTP 401.
    Authentication,
    /// HTTP 403.
    Permission,
    /// HTTP 404.
    NotFound,
    /// HTTP 422.
    Validation,
    /// HTTP 429.
    RateLimit,
    /// HTTP 5xx.
    InternalServer,
    /// Any other non-2xx status.
    Api,
    /// Transport failure before a response was received.
    Connection,
    /// Local per-attempt timeout.
    Timeout,
    /// The caller cancelled the call.
    Cancelled,
    /// Invalid client configuration.
    Configuration,
    /// Internal contract violation.
    Sdk,
}

impl ErrorKind {
    /// Maps a non-2xx status and optional wire error code to an error kind.
    ///
    /// The status decides whenever it is one the taxonomy names. For any
    /// other status the wire code is consulted, and anything still
    /// unrecognized becomes [`ErrorKind::Api`].
    #[must_use]
    pub fn from_status(status: u16, code: Option<&str>) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Authentication,
            403 => Self::Permission,
            404 => Self::NotFound,
            422 => Self::Validation,
            429 => Self::RateLimit,
            500..=599 => Self::InternalServer,
            _ => code.map_or(Self::Api, Self::from_wire_code),
        }
    }

    // Ozon reports gRPC-style codes, either numerically or by name.
    fn from_wire_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "3" | "INVALID_ARGUMENT" => Self::BadRequest,
            "5" | "NOT_FOUND" => Self::NotFound,
            "7" | "PERMISSION_DENIED" => Self::Permission,
            "16" | "UNAUTHENTICATED" => Self::Authentication,
            _ => Self::Api,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BadRequest => "bad_request",
            Self::Authentication => "authentication",
            Self::Permission => "permission",
            Self::NotFound => "not_found",
            Self::Validation => "validation",
            Self::RateLimit => "rate_limit",
            Self::InternalServer => "internal_server",
            Self::Api => "api",
            Self::Connection => "connection",
            Self::Timeout => "timeout",
            Self::Cancelled => "cancelled",
            Self::Configuration => "configuration",
            Self::Sdk => "sdk",
        };
        f.write_str(name)
    }
}

/// Unified error type for every SDK operation.
///
/// Each variant carries the metadata needed to diagnose the failure: HTTP
/// status and wire error details for server responses, the transport cause
/// for local failures, and the number of attempts made for the logical call.
///
/// # Example
///
/// ```rust,ignore
/// use ozon_seller_api::OzonError;
///
/// match client.product().list(&request, None).await {
///     Ok(page) => println!("{} products", page.result.items.len()),
///     Err(OzonError::RateLimit { error, retry_after }) => {
///         println!("Still throttled after {} attempts ({retry_after:?})", error.attempts);
///     }
///     Err(OzonError::NotFound(e)) => println!("Missing: {}", e.message),
///     Err(e) => println!("Failed: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum OzonError {
    /// The server rejected the request as malformed (HTTP 400).
    #[error("Bad request: {0}")]
    BadRequest(HttpResponseError),

    /// Credentials were rejected (HTTP 401).
    #[error("Authentication failed: {0}")]
    Authentication(HttpResponseError),

    /// Credentials lack access to the resource (HTTP 403).
    #[error("Permission denied: {0}")]
    Permission(HttpResponseError),

    /// The resource does not exist (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(HttpResponseError),

    /// The payload failed server-side validation (HTTP 422).
    #[error("Validation failed: {0}")]
    Validation(HttpResponseError),

    /// The server throttled the request (HTTP 429).
    #[error("Rate limited: {error}")]
    RateLimit {
        /// The response details.
        error: HttpResponseError,
        /// The server's `Retry-After` hint, if any.
        retry_after: Option<Duration>,
    },

    /// The server failed to process the request (HTTP 5xx).
    #[error("Internal server error: {0}")]
    InternalServer(HttpResponseError),

    /// Any non-2xx response not covered by a more specific variant.
    #[error("API error: {0}")]
    Api(HttpResponseError),

    /// The transport failed before any response was received.
    #[error("Connection failed after {attempts} attempt(s): {source}")]
    Connection {
        /// The underlying transport failure.
        source: TransportError,
        /// Attempts made for the logical call.
        attempts: u32,
    },

    /// An attempt exceeded its timeout.
    #[error("Request timed out after {timeout:?} ({attempts} attempt(s))")]
    Timeout {
        /// The per-attempt timeout that was exceeded.
        timeout: Duration,
        /// Attempts made for the logical call.
        attempts: u32,
    },

    /// The caller's cancellation token fired.
    #[error("Request was cancelled after {attempts} attempt(s)")]
    Cancelled {
        /// Attempts started before cancellation.
        attempts: u32,
    },

    /// The SDK is misconfigured.
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// The SDK's own contract was violated, e.g. a response body that does
    /// not match the expected shape.
    #[error("SDK contract violation: {message}")]
    Sdk {
        /// What went wrong.
        message: String,
        /// HTTP status of the offending response, if any.
        status: Option<u16>,
        /// Attempts made for the logical call.
        attempts: u32,
        /// The underlying serialization or request-building error, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl OzonError {
    /// Builds the variant matching `kind` around a response error.
    ///
    /// Kinds that never originate from an HTTP response fall back to
    /// [`OzonError::Api`].
    #[must_use]
    pub fn from_response(
        kind: ErrorKind,
        error: HttpResponseError,
        retry_after: Option<Duration>,
    ) -> Self {
        match kind {
            ErrorKind::BadRequest => Self::BadRequest(error),
            ErrorKind::Authentication => Self::Authentication(error),
            ErrorKind::Permission => Self::Permission(error),
            ErrorKind::NotFound => Self::NotFound(error),
            ErrorKind::Validation => Self::Validation(error),
            ErrorKind::RateLimit => Self::RateLimit { error, retry_after },
            ErrorKind::InternalServer => Self::InternalServer(error),
            ErrorKind::Api
            | ErrorKind::Connection
            | ErrorKind::Timeout
            | ErrorKind::Cancelled
            | ErrorKind::Configuration
            | ErrorKind::Sdk => Self::Api(error),
        }
    }

    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::BadRequest(_) => ErrorKind::BadRequest,
            Self::Authentication(_) => ErrorKind::Authentication,
            Self::Permission(_) => ErrorKind::Permission,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Validation(_) => ErrorKind::Validation,
            Self::RateLimit { .. } => ErrorKind::RateLimit,
            Self::InternalServer(_) => ErrorKind::InternalServer,
            Self::Api(_) => ErrorKind::Api,
            Self::Connection { .. } => ErrorKind::Connection,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::Cancelled { .. } => ErrorKind::Cancelled,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Sdk { .. } => ErrorKind::Sdk,
        }
    }

    /// Returns `true` if the HTTP client may retry this error.
    ///
    /// See [`is_retryable_error`](crate::clients::is_retryable_error).
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        crate::clients::is_retryable_error(self)
    }

    /// Returns the response details for errors built from an HTTP response.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponseError> {
        match self {
            Self::BadRequest(e)
            | Self::Authentication(e)
            | Self::Permission(e)
            | Self::NotFound(e)
            | Self::Validation(e)
            | Self::InternalServer(e)
            | Self::Api(e)
            | Self::RateLimit { error: e, .. } => Some(e),
            Self::Connection { .. }
            | Self::Timeout { .. }
            | Self::Cancelled { .. }
            | Self::Configuration(_)
            | Self::Sdk { .. } => None,
        }
    }

    /// Returns the HTTP status that caused this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Sdk { status, .. } => *status,
            other => other.response().map(|e| e.status),
        }
    }

    /// Returns the wire error code, if the server supplied one.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.response().and_then(|e| e.code.as_deref())
    }

    /// Returns the server-assigned request id, if the response carried one.
    #[must_use]
    pub fn request_id(&self) -> Option<&RequestId> {
        self.response().and_then(|e| e.request_id.as_ref())
    }

    /// Returns the number of attempts made for the logical call.
    ///
    /// Configuration errors are raised before any call and report `0`.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        match self {
            Self::BadRequest(e)
            | Self::Authentication(e)
            | Self::Permission(e)
            | Self::NotFound(e)
            | Self::Validation(e)
            | Self::InternalServer(e)
            | Self::Api(e)
            | Self::RateLimit { error: e, .. } => e.attempts,
            Self::Connection { attempts, .. }
            | Self::Timeout { attempts, .. }
            | Self::Cancelled { attempts }
            | Self::Sdk { attempts, .. } => *attempts,
            Self::Configuration(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_error(status: u16) -> HttpResponseError {
        HttpResponseError {
            status,
            code: Some("SOME_CODE".to_string()),
            message: "boom".to_string(),
            details: None,
            body: r#"{"code":"SOME_CODE","message":"boom"}"#.to_string(),
            request_id: Some(RequestId::new("req-1")),
            attempts: 2,
        }
    }

    #[test]
    fn test_empty_api_key_error_message() {
        let message = ConfigError::EmptyApiKey.to_string();
        assert!(message.contains("API key cannot be empty"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "client_id" };
        let message = error.to_string();
        assert!(message.contains("client_id"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_status_mapping_covers_taxonomy() {
        assert_eq!(ErrorKind::from_status(400, None), ErrorKind::BadRequest);
        assert_eq!(ErrorKind::from_status(401, None), ErrorKind::Authentication);
        assert_eq!(ErrorKind::from_status(403, None), ErrorKind::Permission);
        assert_eq!(ErrorKind::from_status(404, None), ErrorKind::NotFound);
        assert_eq!(ErrorKind::from_status(422, None), ErrorKind::Validation);
        assert_eq!(ErrorKind::from_status(429, None), ErrorKind::RateLimit);
        assert_eq!(ErrorKind::from_status(500, None), ErrorKind::InternalServer);
        assert_eq!(ErrorKind::from_status(503, None), ErrorKind::InternalServer);
        assert_eq!(ErrorKind::from_status(409, None), ErrorKind::Api);
    }

    #[test]
    fn test_status_wins_over_wire_code() {
        assert_eq!(
            ErrorKind::from_status(400, Some("NOT_FOUND")),
            ErrorKind::BadRequest
        );
    }

    #[test]
    fn test_wire_code_resolves_unmapped_status() {
        assert_eq!(ErrorKind::from_status(409, Some("5")), ErrorKind::NotFound);
        assert_eq!(
            ErrorKind::from_status(418, Some("permission_denied")),
            ErrorKind::Permission
        );
        assert_eq!(ErrorKind::from_status(409, Some("16")), ErrorKind::Authentication);
        assert_eq!(ErrorKind::from_status(409, Some("CONFLICT")), ErrorKind::Api);
    }

    #[test]
    fn test_from_response_builds_matching_variant() {
        let error = OzonError::from_response(ErrorKind::NotFound, response_error(404), None);
        assert!(matches!(error, OzonError::NotFound(_)));
        assert_eq!(error.kind(), ErrorKind::NotFound);

        let error = OzonError::from_response(
            ErrorKind::RateLimit,
            response_error(429),
            Some(Duration::from_secs(5)),
        );
        assert!(matches!(
            error,
            OzonError::RateLimit { retry_after: Some(d), .. } if d == Duration::from_secs(5)
        ));
    }

    #[test]
    fn test_accessors_expose_response_metadata() {
        let error = OzonError::InternalServer(response_error(502));
        assert_eq!(error.status(), Some(502));
        assert_eq!(error.code(), Some("SOME_CODE"));
        assert_eq!(error.request_id().map(AsRef::as_ref), Some("req-1"));
        assert_eq!(error.attempts(), 2);
    }

    #[test]
    fn test_local_errors_have_no_status() {
        let error = OzonError::Timeout {
            timeout: Duration::from_secs(1),
            attempts: 3,
        };
        assert_eq!(error.status(), None);
        assert_eq!(error.code(), None);
        assert_eq!(error.attempts(), 3);
        assert!(error.to_string().contains("3 attempt(s)"));
    }

    #[test]
    fn test_configuration_error_converts() {
        let error: OzonError = ConfigError::EmptyClientId.into();
        assert_eq!(error.kind(), ErrorKind::Configuration);
        assert_eq!(error.attempts(), 0);
        assert!(error.to_string().contains("Client id cannot be empty"));
    }

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::RateLimit.to_string(), "rate_limit");
        assert_eq!(ErrorKind::Sdk.to_string(), "sdk");
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = OzonError::Cancelled { attempts: 1 };
        let _: &dyn std::error::Error = &error;
    }
}
