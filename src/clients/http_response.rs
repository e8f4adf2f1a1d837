//! HTTP response types for the Ozon Seller API SDK.
//!
//! This module provides the [`HttpResponse`] returned by a
//! [`Transport`](crate::clients::Transport), with the headers the HTTP client
//! cares about parsed up front.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::config::RequestId;

/// A raw HTTP response as received from the transport.
///
/// Header names are stored lower-cased; a header may have multiple values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers keyed by lower-cased name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
    /// Time to wait before retrying (from the `Retry-After` header).
    pub retry_after: Option<Duration>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the `Retry-After` header.
    ///
    /// Header names are lower-cased on the way in.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use std::time::Duration;
    /// use ozon_seller_api::clients::HttpResponse;
    ///
    /// let headers = HashMap::from([("Retry-After".to_string(), vec!["2".to_string()])]);
    /// let response = HttpResponse::new(429, headers, String::new());
    ///
    /// assert_eq!(response.retry_after, Some(Duration::from_secs(2)));
    /// ```
    #[must_use]
    pub fn new(
        status: u16,
        headers: HashMap<String, Vec<String>>,
        body: impl Into<String>,
    ) -> Self {
        let mut normalized: HashMap<String, Vec<String>> = HashMap::new();
        for (name, values) in headers {
            normalized
                .entry(name.to_lowercase())
                .or_default()
                .extend(values);
        }

        let retry_after = normalized
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| parse_retry_after(value, Utc::now()));

        Self {
            status,
            headers: normalized,
            body: body.into(),
            retry_after,
        }
    }

    /// Convenience constructor for a response with a JSON body and no headers.
    #[must_use]
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self::new(status, HashMap::new(), body.to_string())
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the server request id (`X-Request-Id`, or Ozon's
    /// `X-O3-Trace-Id`), if present.
    #[must_use]
    pub fn request_id(&self) -> Option<RequestId> {
        self.header("x-request-id")
            .or_else(|| self.header("x-o3-trace-id"))
            .map(RequestId::new)
    }
}

/// Parses a `Retry-After` value given as delta-seconds or an HTTP-date.
///
/// Dates in the past yield a zero delay.
fn parse_retry_after(value: &str, now: DateTime<Utc>) -> Option<Duration> {
    let value = value.trim();
    if let Ok(seconds) = value.parse::<f64>() {
        // Values a `Duration` cannot hold are ignored, not clamped.
        return Duration::try_from_secs_f64(seconds).ok();
    }

    let at = DateTime::parse_from_rfc2822(value).ok()?.with_timezone(&Utc);
    Some((at - now).to_std().unwrap_or(Duration::ZERO))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect()
    }

    #[test]
    fn test_is_ok_covers_2xx_range() {
        assert!(HttpResponse::new(200, HashMap::new(), "").is_ok());
        assert!(HttpResponse::new(204, HashMap::new(), "").is_ok());
        assert!(!HttpResponse::new(199, HashMap::new(), "").is_ok());
        assert!(!HttpResponse::new(300, HashMap::new(), "").is_ok());
        assert!(!HttpResponse::new(404, HashMap::new(), "").is_ok());
    }

    #[test]
    fn test_headers_are_case_insensitive() {
        let response = HttpResponse::new(200, headers(&[("X-Request-Id", "req-123")]), "{}");
        assert_eq!(response.header("x-request-id"), Some("req-123"));
        assert_eq!(response.header("X-REQUEST-ID"), Some("req-123"));
        assert_eq!(response.request_id(), Some(RequestId::new("req-123")));
    }

    #[test]
    fn test_request_id_falls_back_to_trace_id() {
        let response = HttpResponse::new(500, headers(&[("x-o3-trace-id", "trace-9")]), "");
        assert_eq!(response.request_id(), Some(RequestId::new("trace-9")));
    }

    #[test]
    fn test_retry_after_seconds() {
        let response = HttpResponse::new(429, headers(&[("Retry-After", "2.5")]), "");
        assert_eq!(response.retry_after, Some(Duration::from_millis(2500)));
    }

    #[test]
    fn test_retry_after_rejects_garbage() {
        let response = HttpResponse::new(429, headers(&[("Retry-After", "soon")]), "");
        assert_eq!(response.retry_after, None);

        let response = HttpResponse::new(429, headers(&[("Retry-After", "-1")]), "");
        assert_eq!(response.retry_after, None);
    }

    #[test]
    fn test_retry_after_out_of_range_is_ignored() {
        for value in ["1e30", "inf", "NaN"] {
            let response = HttpResponse::new(429, headers(&[("Retry-After", value)]), "");
            assert_eq!(response.retry_after, None, "Retry-After: {value}");
        }
    }

    #[test]
    fn test_retry_after_http_date() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let delay = parse_retry_after("Wed, 01 Jan 2025 12:00:10 GMT", now);
        assert_eq!(delay, Some(Duration::from_secs(10)));

        let past = parse_retry_after("Wed, 01 Jan 2025 11:59:00 GMT", now);
        assert_eq!(past, Some(Duration::ZERO));
    }
}
