//! HTTP-specific error payloads for the Ozon Seller API SDK.
//!
//! This module contains the building blocks that [`OzonError`](crate::OzonError)
//! variants carry:
//!
//! - [`HttpResponseError`]: details of a non-2xx response from the API
//! - [`TransportError`]: a failure of the transport before any response arrived

use thiserror::Error;

use crate::config::RequestId;

/// Details of a non-successful HTTP response.
///
/// The `code`, `message` and `details` fields come from the wire error body
/// (`{"code": ..., "message": ..., "details": ...}`) when it could be parsed.
/// The raw body is always retained for diagnostics.
///
/// # Example
///
/// ```rust
/// use ozon_seller_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     status: 404,
///     code: Some("NOT_FOUND".to_string()),
///     message: "product not found".to_string(),
///     details: None,
///     body: r#"{"code":"NOT_FOUND","message":"product not found"}"#.to_string(),
///     request_id: None,
///     attempts: 1,
/// };
///
/// assert_eq!(error.to_string(), "HTTP 404 (NOT_FOUND): product not found");
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
#[error("HTTP {status}{}: {message}", code.as_ref().map(|c| format!(" ({c})")).unwrap_or_default())]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// Machine-readable wire error code.
    pub code: Option<String>,
    /// Human-readable message.
    pub message: String,
    /// Structured details from the error body.
    pub details: Option<serde_json::Value>,
    /// The raw response body.
    pub body: String,
    /// Request id assigned by the server, for support requests.
    pub request_id: Option<RequestId>,
    /// Attempts made for the logical call when this response was received.
    pub attempts: u32,
}

/// A failure of the transport before any HTTP response was received.
#[derive(Debug, Error)]
pub enum TransportError {
    /// DNS, connect, TLS or socket failure.
    #[error("connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The transport itself gave up waiting.
    #[error("transport timed out")]
    Timeout,

    /// The request could not be built, e.g. an invalid header value or URL.
    ///
    /// Nothing reached the network, and resending the same request would
    /// fail the same way.
    #[error("invalid request: {0}")]
    InvalidRequest(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_builder() {
            Self::InvalidRequest(Box::new(error))
        } else if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Connection(Box::new(error))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_message_without_code() {
        let error = HttpResponseError {
            status: 502,
            code: None,
            message: "Bad Gateway".to_string(),
            details: None,
            body: "<html>Bad Gateway</html>".to_string(),
            request_id: None,
            attempts: 3,
        };
        assert_eq!(error.to_string(), "HTTP 502: Bad Gateway");
    }

    #[test]
    fn test_transport_connection_error_keeps_source() {
        let error = TransportError::Connection("connection reset by peer".into());
        assert!(error.to_string().contains("connection reset by peer"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &TransportError::Timeout;
        let _: &dyn std::error::Error = &HttpResponseError {
            status: 400,
            code: None,
            message: "test".to_string(),
            details: None,
            body: String::new(),
            request_id: None,
            attempts: 1,
        };
    }
}
