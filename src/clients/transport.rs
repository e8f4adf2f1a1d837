//! Transport abstraction used by the HTTP client.
//!
//! The [`HttpClient`](crate::clients::HttpClient) never talks to the network
//! directly; it hands a prepared [`HttpRequest`] to a [`Transport`] and gets
//! back either an [`HttpResponse`] (any status) or a [`TransportError`].
//! [`ReqwestTransport`] is the production implementation; tests inject their
//! own.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::clients::errors::TransportError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::error::ConfigError;

/// Sends one physical HTTP attempt.
///
/// Implementations must return `Ok` for every response that was received,
/// whatever its status; classification happens in the HTTP client.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request and returns the raw response.
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// [`Transport`] backed by a pooled `reqwest` client with rustls.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a fresh connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TransportInit`] if the TLS backend cannot be
    /// initialized.
    pub fn new() -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| ConfigError::TransportInit {
                reason: e.to_string(),
            })?;
        Ok(Self { client })
    }

    /// Wraps an existing `reqwest` client, sharing its connection pool.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Put => self.client.put(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.clone());
        }

        let res = req_builder.send().await?;
        let status = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        Ok(HttpResponse::new(status, headers, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestTransport>();
    }

    #[test]
    fn test_transport_builds() {
        assert!(ReqwestTransport::new().is_ok());
    }

    #[test]
    fn test_reqwest_builder_error_is_invalid_request() {
        let error = reqwest::Client::new().get("not a url").build().unwrap_err();
        assert!(matches!(
            TransportError::from(error),
            TransportError::InvalidRequest(_)
        ));
    }

    #[tokio::test]
    async fn test_unsendable_header_fails_without_network() {
        let transport = ReqwestTransport::new().unwrap();
        let request = HttpRequest {
            method: HttpMethod::Post,
            url: "http://127.0.0.1:9/v1/seller/info".to_string(),
            headers: HashMap::from([("X-Bad".to_string(), "a\nb".to_string())]),
            body: Some("{}".to_string()),
        };

        let error = transport.send(&request).await.unwrap_err();
        assert!(matches!(error, TransportError::InvalidRequest(_)));
    }
}
