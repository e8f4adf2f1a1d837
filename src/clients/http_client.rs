//! HTTP client for Ozon Seller API communication.
//!
//! This module provides the [`HttpClient`] type, the single executor every
//! API category calls through. It attaches credentials, enforces timeouts,
//! classifies failures and retries the transient ones.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::auth::AuthManager;
use crate::clients::errors::{HttpResponseError, TransportError};
use crate::clients::http_request::{HttpMethod, HttpRequest, RequestOptions};
use crate::clients::http_response::HttpResponse;
use crate::clients::retry::get_retry_delay;
use crate::clients::transport::{ReqwestTransport, Transport};
use crate::config::{IdempotencyKey, OzonConfig};
use crate::error::{ConfigError, ErrorKind, OzonError};
use crate::types::{ApiErrorResponse, BaseRequest, BaseResponse, EmptyRequest};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Outcome of a single physical attempt.
enum AttemptOutcome {
    Response(HttpResponse),
    Failed(TransportError),
    TimedOut,
    Cancelled,
}

/// HTTP client for making requests to the Ozon Seller API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default, authentication and per-call headers
/// - Per-attempt timeouts and caller cancellation
/// - Error classification and retries with exponential backoff
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and holds no mutable state, so one instance
/// can serve any number of concurrent calls.
///
/// # Example
///
/// ```rust,ignore
/// use ozon_seller_api::clients::{HttpClient, HttpMethod};
/// use ozon_seller_api::types::{EmptyRequest, ResultResponse};
///
/// let warehouses: ResultResponse<Vec<serde_json::Value>> = client
///     .request(HttpMethod::Post, "/v1/warehouse/list", Some(&EmptyRequest::default()), None)
///     .await?;
/// ```
pub struct HttpClient {
    config: Arc<OzonConfig>,
    auth: AuthManager,
    transport: Arc<dyn Transport>,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Creates a client backed by a [`ReqwestTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TransportInit`] if the transport cannot be
    /// created.
    pub fn new(config: Arc<OzonConfig>, auth: AuthManager) -> Result<Self, ConfigError> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(config, auth, Arc::new(transport)))
    }

    /// Creates a client that sends through the given transport.
    #[must_use]
    pub fn with_transport(
        config: Arc<OzonConfig>,
        auth: AuthManager,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Ozon Seller API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            config,
            auth,
            transport,
            default_headers,
        }
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &OzonConfig {
        &self.config
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Executes one logical API call and parses the response as `TRes`.
    ///
    /// `path` must already have any path parameters substituted. The body is
    /// sent as JSON for every method except GET.
    ///
    /// Transient failures (rate limiting, 5xx, connection errors, timeouts)
    /// are retried up to the attempt budget. Every attempt carries identical
    /// headers; non-idempotent calls without a caller-supplied idempotency
    /// key get one generated for the whole call.
    ///
    /// # Errors
    ///
    /// Returns the last classified [`OzonError`] once the error is not
    /// retryable or the attempt budget is spent, [`OzonError::Cancelled`] if
    /// the cancellation token fires, and [`OzonError::Sdk`] if the request
    /// cannot be serialized or the response does not match `TRes`.
    pub async fn request<TReq, TRes>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&TReq>,
        options: Option<RequestOptions>,
    ) -> Result<TRes, OzonError>
    where
        TReq: BaseRequest + ?Sized,
        TRes: BaseResponse,
    {
        let options = options.unwrap_or_default();
        let timeout = options.timeout.unwrap_or_else(|| self.config.timeout());
        let max_attempts = options
            .max_attempts
            .unwrap_or(self.config.retry_policy().max_attempts)
            .max(1);
        let cancellation = options.cancellation.as_ref();
        let request = self.prepare(method, path, body, &options)?;

        let mut attempt: u32 = 0;
        loop {
            if cancellation.is_some_and(CancellationToken::is_cancelled) {
                return Err(OzonError::Cancelled { attempts: attempt });
            }
            attempt += 1;
            tracing::debug!("{} {} (attempt {}/{})", method, path, attempt, max_attempts);

            let error = match self.attempt(&request, timeout, cancellation).await {
                AttemptOutcome::Response(response) if response.is_ok() => {
                    return Self::parse_success(&response, attempt);
                }
                AttemptOutcome::Response(response) => Self::classify(response, attempt),
                AttemptOutcome::Failed(TransportError::Timeout) | AttemptOutcome::TimedOut => {
                    OzonError::Timeout {
                        timeout,
                        attempts: attempt,
                    }
                }
                AttemptOutcome::Failed(TransportError::InvalidRequest(source)) => {
                    return Err(OzonError::Sdk {
                        message: format!("Request to {path} could not be built: {source}"),
                        status: None,
                        attempts: attempt,
                        source: Some(source),
                    });
                }
                AttemptOutcome::Failed(source) => OzonError::Connection {
                    source,
                    attempts: attempt,
                },
                AttemptOutcome::Cancelled => {
                    return Err(OzonError::Cancelled { attempts: attempt });
                }
            };

            if !error.is_retryable() || attempt >= max_attempts {
                tracing::debug!(
                    "{} {} failed after {} attempt(s): {}",
                    method,
                    path,
                    attempt,
                    error
                );
                return Err(error);
            }

            let delay = get_retry_delay(attempt, &error, self.config.retry_policy());
            tracing::warn!(
                "{} {} failed (attempt {}/{}), retrying in {:?}: {}",
                method,
                path,
                attempt,
                max_attempts,
                delay,
                error
            );

            if !Self::sleep(delay, cancellation).await {
                return Err(OzonError::Cancelled { attempts: attempt });
            }
        }
    }

    /// Sends a bodiless GET request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn get<TRes>(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<TRes, OzonError>
    where
        TRes: BaseResponse,
    {
        self.request::<EmptyRequest, TRes>(HttpMethod::Get, path, None, options)
            .await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn post<TReq, TRes>(
        &self,
        path: &str,
        body: &TReq,
        options: Option<RequestOptions>,
    ) -> Result<TRes, OzonError>
    where
        TReq: BaseRequest + ?Sized,
        TRes: BaseResponse,
    {
        self.request(HttpMethod::Post, path, Some(body), options)
            .await
    }

    /// Builds the request sent on every attempt of one logical call.
    fn prepare<TReq>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&TReq>,
        options: &RequestOptions,
    ) -> Result<HttpRequest, OzonError>
    where
        TReq: BaseRequest + ?Sized,
    {
        let body = match body {
            Some(body) if method.has_body() => {
                Some(serde_json::to_string(body).map_err(|e| OzonError::Sdk {
                    message: format!("Failed to serialize request body for {path}: {e}"),
                    status: None,
                    attempts: 0,
                    source: Some(Box::new(e)),
                })?)
            }
            _ => None,
        };

        let idempotency_key = options
            .idempotency_key
            .clone()
            .or_else(|| (!method.is_idempotent()).then(IdempotencyKey::generate));

        let mut headers = self.default_headers.clone();
        headers.extend(self.auth.headers_for(idempotency_key.as_ref()));
        if body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        for (key, value) in &options.headers {
            validate_header(key, value).map_err(|e| OzonError::Sdk {
                message: format!("Invalid per-call header {key:?} for {path}: {e}"),
                status: None,
                attempts: 0,
                source: Some(e),
            })?;
            headers.retain(|existing, _| !existing.eq_ignore_ascii_case(key));
            headers.insert(key.clone(), value.clone());
        }

        Ok(HttpRequest {
            method,
            url: self.config.base_url().join(path),
            headers,
            body,
        })
    }

    /// Runs one attempt under the timeout, racing the cancellation token.
    async fn attempt(
        &self,
        request: &HttpRequest,
        timeout: Duration,
        cancellation: Option<&CancellationToken>,
    ) -> AttemptOutcome {
        let send = tokio::time::timeout(timeout, self.transport.send(request));
        let result = match cancellation {
            Some(token) => tokio::select! {
                biased;
                () = token.cancelled() => return AttemptOutcome::Cancelled,
                result = send => result,
            },
            None => send.await,
        };

        match result {
            Ok(Ok(response)) => AttemptOutcome::Response(response),
            Ok(Err(error)) => AttemptOutcome::Failed(error),
            Err(_) => AttemptOutcome::TimedOut,
        }
    }

    /// Waits between attempts; returns `false` if cancelled first.
    async fn sleep(delay: Duration, cancellation: Option<&CancellationToken>) -> bool {
        match cancellation {
            Some(token) => tokio::select! {
                biased;
                () = token.cancelled() => false,
                () = tokio::time::sleep(delay) => true,
            },
            None => {
                tokio::time::sleep(delay).await;
                true
            }
        }
    }

    fn parse_success<TRes: BaseResponse>(
        response: &HttpResponse,
        attempts: u32,
    ) -> Result<TRes, OzonError> {
        let body = if response.body.trim().is_empty() {
            "null"
        } else {
            response.body.as_str()
        };

        serde_json::from_str(body).map_err(|e| OzonError::Sdk {
            message: format!("Response body does not match the expected shape: {e}"),
            status: Some(response.status),
            attempts,
            source: Some(Box::new(e)),
        })
    }

    /// Maps a non-2xx response to exactly one error kind.
    fn classify(response: HttpResponse, attempts: u32) -> OzonError {
        let wire = serde_json::from_str::<ApiErrorResponse>(&response.body).ok();
        let code = wire.as_ref().and_then(|w| w.code.clone());
        let kind = ErrorKind::from_status(response.status, code.as_deref());

        let message = wire
            .as_ref()
            .map(|w| w.message.clone())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                reqwest::StatusCode::from_u16(response.status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("Unexpected response")
                    .to_string()
            });

        let request_id = response.request_id();
        let error = HttpResponseError {
            status: response.status,
            code,
            message,
            details: wire.and_then(|w| w.details),
            body: response.body,
            request_id,
            attempts,
        };

        OzonError::from_response(kind, error, response.retry_after)
    }
}

/// Checks that a header can be put on the wire as given.
fn validate_header(
    name: &str,
    value: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    reqwest::header::HeaderName::from_bytes(name.as_bytes())?;
    reqwest::header::HeaderValue::from_str(value)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use serde_json::json;

    use super::*;
    use crate::auth::{API_KEY_HEADER, CLIENT_ID_HEADER, IDEMPOTENCY_KEY_HEADER};
    use crate::clients::transport::MockTransport;
    use crate::clients::RetryPolicy;
    use crate::config::{ApiKey, ClientId, RequestId};
    use crate::types::ResultResponse;

    fn create_test_config(prefix: Option<&str>) -> Arc<OzonConfig> {
        let mut builder = OzonConfig::builder()
            .client_id(ClientId::new("12345"))
            .api_key(ApiKey::new("test-api-key"))
            .retry_policy(
                RetryPolicy::new(3)
                    .with_base_delay(Duration::from_millis(1))
                    .with_max_delay(Duration::from_millis(5)),
            );
        if let Some(prefix) = prefix {
            builder = builder.user_agent_prefix(prefix);
        }
        Arc::new(builder.build().unwrap())
    }

    fn create_client(transport: MockTransport) -> HttpClient {
        let config = create_test_config(None);
        let auth = AuthManager::new(Arc::clone(&config)).unwrap();
        HttpClient::with_transport(config, auth, Arc::new(transport))
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = create_client(MockTransport::new());
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Ozon Seller API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = create_test_config(Some("MyApp/1.0"));
        let auth = AuthManager::new(Arc::clone(&config)).unwrap();
        let client = HttpClient::with_transport(config, auth, Arc::new(MockTransport::new()));

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = create_client(MockTransport::new());
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_debug_does_not_leak_api_key() {
        let client = create_client(MockTransport::new());
        let debug_str = format!("{client:?}");
        assert!(debug_str.contains("HttpClient"));
        assert!(!debug_str.contains("test-api-key"));
    }

    #[tokio::test]
    async fn test_post_sends_auth_json_body_and_idempotency_key() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(1)
            .withf(|request: &HttpRequest| {
                request.method == HttpMethod::Post
                    && request.url == "https://api-seller.ozon.ru/v1/warehouse/list"
                    && request.header(CLIENT_ID_HEADER) == Some("12345")
                    && request.header(API_KEY_HEADER) == Some("test-api-key")
                    && request.header("Content-Type") == Some("application/json")
                    && request.header(IDEMPOTENCY_KEY_HEADER).is_some()
                    && request.body.as_deref() == Some(r#"{"limit":10}"#)
            })
            .returning(|_| Ok(HttpResponse::json(200, &json!({"result": [1, 2]}))));

        let client = create_client(transport);
        let response: ResultResponse<Vec<u32>> = client
            .post("/v1/warehouse/list", &json!({"limit": 10}), None)
            .await
            .unwrap();

        assert_eq!(response.result, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_get_sends_no_body_and_no_generated_key() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(1)
            .withf(|request: &HttpRequest| {
                request.method == HttpMethod::Get
                    && request.body.is_none()
                    && request.header("Content-Type").is_none()
                    && request.header(IDEMPOTENCY_KEY_HEADER).is_none()
            })
            .returning(|_| Ok(HttpResponse::json(200, &json!({"result": []}))));

        let client = create_client(transport);
        let response: ResultResponse<Vec<u32>> = client.get("/v1/actions", None).await.unwrap();
        assert!(response.result.is_empty());
    }

    #[tokio::test]
    async fn test_per_call_headers_win_case_insensitively() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(1)
            .withf(|request: &HttpRequest| {
                let accept_headers = request
                    .headers
                    .keys()
                    .filter(|k| k.eq_ignore_ascii_case("accept"))
                    .count();
                request.header("Accept") == Some("text/plain")
                    && accept_headers == 1
                    && request.header("X-Trace") == Some("abc")
            })
            .returning(|_| Ok(HttpResponse::json(200, &json!(null))));

        let client = create_client(transport);
        let options = RequestOptions::new()
            .header("accept", "text/plain")
            .header("X-Trace", "abc");
        let _: () = client
            .get("/v1/seller/info", Some(options))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_not_found_is_not_retried() {
        let mut transport = MockTransport::new();
        transport.expect_send().times(1).returning(|_| {
            Ok(HttpResponse::json(
                404,
                &json!({"code": "NOT_FOUND", "message": "x"}),
            ))
        });

        let client = create_client(transport);
        let result: Result<serde_json::Value, _> =
            client.post("/v3/product/info/list", &json!({}), None).await;

        let error = result.unwrap_err();
        assert!(matches!(error, OzonError::NotFound(_)));
        assert_eq!(error.attempts(), 1);
        assert_eq!(error.code(), Some("NOT_FOUND"));
    }

    #[tokio::test]
    async fn test_retries_exhausted_returns_last_error() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);

        let mut transport = MockTransport::new();
        transport.expect_send().times(3).returning(move |_| {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(HttpResponse::json(
                503,
                &json!({"code": "UNAVAILABLE", "message": format!("try {n}")}),
            ))
        });

        let client = create_client(transport);
        let error = client
            .post::<_, serde_json::Value>("/v1/product/archive", &json!({}), None)
            .await
            .unwrap_err();

        assert!(matches!(error, OzonError::InternalServer(_)));
        assert_eq!(error.attempts(), 3);
        assert_eq!(error.response().unwrap().message, "try 3");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_max_attempts_override_disables_retry() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Ok(HttpResponse::json(500, &json!({}))));

        let client = create_client(transport);
        let error = client
            .post::<_, serde_json::Value>(
                "/v1/product/archive",
                &json!({}),
                Some(RequestOptions::new().max_attempts(1)),
            )
            .await
            .unwrap_err();

        assert_eq!(error.attempts(), 1);
        assert_eq!(error.response().unwrap().message, "Internal Server Error");
    }

    #[tokio::test]
    async fn test_connection_error_is_retried_then_succeeds() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);

        let mut transport = MockTransport::new();
        transport.expect_send().times(2).returning(move |_| {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(TransportError::Connection("connection reset".into()))
            } else {
                Ok(HttpResponse::json(200, &json!({"result": true})))
            }
        });

        let client = create_client(transport);
        let response: ResultResponse<bool> = client
            .post("/v1/chat/send/message", &json!({}), None)
            .await
            .unwrap();
        assert!(response.result);
    }

    #[tokio::test]
    async fn test_shape_mismatch_is_sdk_error_and_not_retried() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Ok(HttpResponse::json(200, &json!({"result": "not a number"}))));

        let client = create_client(transport);
        let error = client
            .post::<_, ResultResponse<u64>>("/v1/rating/summary", &json!({}), None)
            .await
            .unwrap_err();

        assert!(matches!(error, OzonError::Sdk { status: Some(200), attempts: 1, .. }));
    }

    #[tokio::test]
    async fn test_unserializable_body_fails_before_sending() {
        let mut transport = MockTransport::new();
        transport.expect_send().times(0);

        let mut body = HashMap::new();
        body.insert((1, 2), "tuple keys are not valid JSON object keys");

        let client = create_client(transport);
        let error = client
            .post::<_, serde_json::Value>("/v1/report/info", &body, None)
            .await
            .unwrap_err();

        assert!(matches!(error, OzonError::Sdk { status: None, attempts: 0, .. }));
    }

    #[tokio::test]
    async fn test_empty_success_body_parses_as_unit() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Ok(HttpResponse::new(204, HashMap::new(), "")));

        let client = create_client(transport);
        let result: Result<(), _> = client.post("/v1/invoice/delete", &json!({}), None).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_pre_cancelled_call_never_sends() {
        let mut transport = MockTransport::new();
        transport.expect_send().times(0);

        let token = CancellationToken::new();
        token.cancel();

        let client = create_client(transport);
        let error = client
            .get::<serde_json::Value>(
                "/v1/actions",
                Some(RequestOptions::new().cancellation(token)),
            )
            .await
            .unwrap_err();

        assert!(matches!(error, OzonError::Cancelled { attempts: 0 }));
        assert!(!error.is_retryable());
    }

    #[tokio::test]
    async fn test_invalid_per_call_header_fails_before_sending() {
        let mut transport = MockTransport::new();
        transport.expect_send().times(0);

        let client = create_client(transport);
        let error = client
            .post::<_, serde_json::Value>(
                "/v1/seller/info",
                &json!({}),
                Some(RequestOptions::new().header("X-Bad", "a\nb")),
            )
            .await
            .unwrap_err();

        assert!(matches!(error, OzonError::Sdk { status: None, attempts: 0, .. }));
        assert!(!error.is_retryable());
    }

    #[tokio::test]
    async fn test_unbuildable_request_is_sdk_error_and_not_retried() {
        let mut transport = MockTransport::new();
        transport.expect_send().times(1).returning(|_| {
            Err(TransportError::InvalidRequest(
                "relative URL without a base".into(),
            ))
        });

        let client = create_client(transport);
        let error = client
            .post::<_, serde_json::Value>("/v1/seller/info", &json!({}), None)
            .await
            .unwrap_err();

        assert!(matches!(error, OzonError::Sdk { status: None, attempts: 1, .. }));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[tokio::test]
    async fn test_unparsable_error_body_keeps_raw_body() {
        let mut transport = MockTransport::new();
        transport.expect_send().times(1).returning(|_| {
            Ok(HttpResponse::new(
                409,
                HashMap::from([("X-Request-Id".to_string(), vec!["req-7".to_string()])]),
                "<html>conflict</html>",
            ))
        });

        let client = create_client(transport);
        let error = client
            .post::<_, serde_json::Value>("/v1/pass/list", &json!({}), None)
            .await
            .unwrap_err();

        assert!(matches!(error, OzonError::Api(_)));
        let response = error.response().unwrap();
        assert_eq!(response.body, "<html>conflict</html>");
        assert_eq!(response.message, "Conflict");
        assert_eq!(error.request_id(), Some(&RequestId::new("req-7")));
    }
}
