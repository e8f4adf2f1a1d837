//! Tests for the HTTP execution core.
//!
//! These tests drive [`HttpClient`] through scripted in-memory transports to
//! verify retry, timeout, cancellation and idempotency behavior without a
//! network.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use ozon_seller_api::auth::{AuthManager, IDEMPOTENCY_KEY_HEADER};
use ozon_seller_api::clients::{
    HttpClient, HttpMethod, HttpRequest, HttpResponse, RequestOptions, RetryPolicy, Transport,
    TransportError,
};
use ozon_seller_api::types::ResultResponse;
use ozon_seller_api::{
    ApiKey, ClientId, ConfigError, ErrorKind, IdempotencyKey, OzonClient, OzonConfig, OzonError,
};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use tokio_util::sync::CancellationToken;

/// Replays scripted outcomes in order and records every request it sees.
#[derive(Default)]
struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    fn new(outcomes: Vec<Result<HttpResponse, TransportError>>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse::json(500, &json!({"message": "script exhausted"}))))
    }
}

/// Never answers within any reasonable timeout.
struct HangingTransport {
    calls: Mutex<u32>,
}

#[async_trait]
impl Transport for HangingTransport {
    async fn send(&self, _request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        *self.calls.lock().unwrap() += 1;
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(HttpResponse::json(200, &json!({})))
    }
}

/// Echoes the request body back inside `{"result": ...}`.
struct EchoTransport;

#[async_trait]
impl Transport for EchoTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        tokio::task::yield_now().await;
        let body: serde_json::Value =
            serde_json::from_str(request.body.as_deref().unwrap_or("null")).unwrap();
        Ok(HttpResponse::json(200, &json!({ "result": body })))
    }
}

fn test_config(max_attempts: u32, timeout: Duration) -> Arc<OzonConfig> {
    Arc::new(
        OzonConfig::builder()
            .client_id(ClientId::new("12345"))
            .api_key(ApiKey::new("test-api-key"))
            .timeout(timeout)
            .retry_policy(
                RetryPolicy::new(max_attempts)
                    .with_base_delay(Duration::from_millis(1))
                    .with_max_delay(Duration::from_millis(10)),
            )
            .build()
            .unwrap(),
    )
}

fn client_with(transport: Arc<dyn Transport>, max_attempts: u32, timeout: Duration) -> HttpClient {
    let config = test_config(max_attempts, timeout);
    let auth = AuthManager::new(Arc::clone(&config)).unwrap();
    HttpClient::with_transport(config, auth, transport)
}

fn error_response(status: u16, code: &str, message: &str) -> Result<HttpResponse, TransportError> {
    Ok(HttpResponse::json(
        status,
        &json!({"code": code, "message": message}),
    ))
}

// ============================================================================
// Idempotency
// ============================================================================

#[tokio::test]
async fn test_generated_idempotency_key_is_identical_across_attempts() {
    let transport = ScriptedTransport::new(vec![
        Err(TransportError::Connection("connection reset".into())),
        Ok(HttpResponse::json(200, &json!({"result": "ok"}))),
    ]);
    let client = client_with(transport.clone(), 3, Duration::from_secs(5));

    let response: ResultResponse<String> = assert_ok!(
        client
            .post("/v1/chat/send/message", &json!({"chat_id": "c1", "text": "hi"}), None)
            .await
    );
    assert_eq!(response.result, "ok");

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    let first = requests[0].header(IDEMPOTENCY_KEY_HEADER).unwrap();
    let second = requests[1].header(IDEMPOTENCY_KEY_HEADER).unwrap();
    assert!(!first.is_empty());
    assert_eq!(first, second);
    assert_eq!(requests[0], requests[1]);
}

#[tokio::test]
async fn test_each_logical_call_gets_its_own_key() {
    let transport = ScriptedTransport::new(vec![
        Ok(HttpResponse::json(200, &json!({}))),
        Ok(HttpResponse::json(200, &json!({}))),
    ]);
    let client = client_with(transport.clone(), 3, Duration::from_secs(5));

    let _: serde_json::Value =
        assert_ok!(client.post("/v1/product/archive", &json!({}), None).await);
    let _: serde_json::Value =
        assert_ok!(client.post("/v1/product/archive", &json!({}), None).await);

    let requests = transport.requests();
    assert_ne!(
        requests[0].header(IDEMPOTENCY_KEY_HEADER),
        requests[1].header(IDEMPOTENCY_KEY_HEADER)
    );
}

#[tokio::test]
async fn test_caller_supplied_idempotency_key_is_used() {
    let transport = ScriptedTransport::new(vec![
        error_response(503, "UNAVAILABLE", "busy"),
        Ok(HttpResponse::json(200, &json!({}))),
    ]);
    let client = client_with(transport.clone(), 3, Duration::from_secs(5));

    let options = RequestOptions::new().idempotency_key(IdempotencyKey::new("import-2025-01-01"));
    let _: serde_json::Value = assert_ok!(
        client
            .post("/v3/product/import", &json!({"items": []}), Some(options))
            .await
    );

    for request in transport.requests() {
        assert_eq!(request.header(IDEMPOTENCY_KEY_HEADER), Some("import-2025-01-01"));
    }
}

// ============================================================================
// Error classification and retry
// ============================================================================

#[tokio::test]
async fn test_not_found_fails_after_single_attempt() {
    let transport = ScriptedTransport::new(vec![error_response(404, "NOT_FOUND", "x")]);
    let client = client_with(transport.clone(), 3, Duration::from_secs(5));

    let error = assert_err!(
        client
            .post::<_, serde_json::Value>("/v2/posting/fbo/get", &json!({}), None)
            .await
    );

    assert_eq!(error.kind(), ErrorKind::NotFound);
    assert_eq!(error.attempts(), 1);
    assert_eq!(error.status(), Some(404));
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_server_errors_retried_until_success() {
    let transport = ScriptedTransport::new(vec![
        error_response(500, "INTERNAL", "boom"),
        error_response(500, "INTERNAL", "boom"),
        Ok(HttpResponse::json(200, &json!({"result": [1, 2, 3]}))),
    ]);
    let client = client_with(transport.clone(), 3, Duration::from_secs(5));

    let response: ResultResponse<Vec<u32>> = assert_ok!(
        client
            .post("/v1/warehouse/list", &json!({}), None)
            .await
    );

    assert_eq!(response.result, vec![1, 2, 3]);
    assert_eq!(transport.requests().len(), 3);
}

#[tokio::test]
async fn test_non_retryable_kinds_map_from_status() {
    let cases = [
        (400, ErrorKind::BadRequest),
        (401, ErrorKind::Authentication),
        (403, ErrorKind::Permission),
        (422, ErrorKind::Validation),
        (418, ErrorKind::Api),
    ];

    for (status, kind) in cases {
        let transport = ScriptedTransport::new(vec![error_response(status, "", "nope")]);
        let client = client_with(transport.clone(), 3, Duration::from_secs(5));

        let error = assert_err!(
            client
                .post::<_, serde_json::Value>("/v1/seller/info", &json!({}), None)
                .await
        );
        assert_eq!(error.kind(), kind, "status {status}");
        assert!(!error.is_retryable());
        assert_eq!(transport.requests().len(), 1);
    }
}

#[tokio::test]
async fn test_wire_code_used_for_unmapped_status() {
    let transport = ScriptedTransport::new(vec![error_response(409, "PERMISSION_DENIED", "no")]);
    let client = client_with(transport, 3, Duration::from_secs(5));

    let error = assert_err!(
        client
            .post::<_, serde_json::Value>("/v1/pass/list", &json!({}), None)
            .await
    );
    assert!(matches!(error, OzonError::Permission(_)));
}

#[tokio::test]
async fn test_rate_limit_honours_retry_after() {
    let limited = HttpResponse::new(
        429,
        HashMap::from([("Retry-After".to_string(), vec!["0.05".to_string()])]),
        r#"{"code": 8, "message": "too many requests"}"#,
    );
    let transport = ScriptedTransport::new(vec![
        Ok(limited),
        Ok(HttpResponse::json(200, &json!({"result": true}))),
    ]);
    let client = client_with(transport.clone(), 3, Duration::from_secs(5));

    let started = Instant::now();
    let response: ResultResponse<bool> = assert_ok!(
        client
            .post("/v1/analytics/data", &json!({}), None)
            .await
    );

    assert!(response.result);
    assert!(started.elapsed() >= Duration::from_millis(50));
    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn test_exhausted_rate_limit_keeps_retry_after() {
    let limited = || {
        Ok(HttpResponse::new(
            429,
            HashMap::from([("retry-after".to_string(), vec!["0".to_string()])]),
            "{}",
        ))
    };
    let transport = ScriptedTransport::new(vec![limited(), limited()]);
    let client = client_with(transport, 2, Duration::from_secs(5));

    let error = assert_err!(
        client
            .post::<_, serde_json::Value>("/v1/analytics/data", &json!({}), None)
            .await
    );

    match error {
        OzonError::RateLimit { error, retry_after } => {
            assert_eq!(error.attempts, 2);
            assert_eq!(retry_after, Some(Duration::ZERO));
        }
        other => panic!("expected RateLimit, got {other:?}"),
    }
}

#[tokio::test]
async fn test_out_of_range_retry_after_falls_back_to_backoff() {
    let limited = || {
        Ok(HttpResponse::new(
            429,
            HashMap::from([("Retry-After".to_string(), vec!["1e30".to_string()])]),
            r#"{"code": 8, "message": "too many requests"}"#,
        ))
    };
    let transport = ScriptedTransport::new(vec![limited(), limited()]);
    let client = client_with(transport.clone(), 2, Duration::from_secs(5));

    let started = Instant::now();
    let error = assert_err!(
        client
            .post::<_, serde_json::Value>("/v1/analytics/data", &json!({}), None)
            .await
    );

    match error {
        OzonError::RateLimit { error, retry_after } => {
            assert_eq!(error.attempts, 2);
            assert_eq!(retry_after, None);
        }
        other => panic!("expected RateLimit, got {other:?}"),
    }
    assert!(started.elapsed() < Duration::from_secs(1));
    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn test_unbuildable_request_is_not_retried() {
    let transport = ScriptedTransport::new(vec![
        Err(TransportError::InvalidRequest("invalid header value".into())),
        Ok(HttpResponse::json(200, &json!({"result": true}))),
    ]);
    let client = client_with(transport.clone(), 3, Duration::from_secs(5));

    let error = assert_err!(
        client
            .post::<_, serde_json::Value>("/v1/report/list", &json!({}), None)
            .await
    );

    assert_eq!(error.kind(), ErrorKind::Sdk);
    assert_eq!(error.attempts(), 1);
    assert!(!error.is_retryable());
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_invalid_per_call_header_never_reaches_transport() {
    let transport = ScriptedTransport::new(vec![]);
    let client = client_with(transport.clone(), 3, Duration::from_secs(5));

    let options = RequestOptions::new().header("X-Bad", "a\nb");
    let error = assert_err!(
        client
            .post::<_, serde_json::Value>("/v1/seller/info", &json!({}), Some(options))
            .await
    );

    assert!(matches!(error, OzonError::Sdk { attempts: 0, .. }));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_connection_failures_exhaust_budget() {
    let transport = ScriptedTransport::new(vec![
        Err(TransportError::Connection("refused".into())),
        Err(TransportError::Connection("refused".into())),
        Err(TransportError::Connection("refused".into())),
    ]);
    let client = client_with(transport.clone(), 3, Duration::from_secs(5));

    let error = assert_err!(
        client
            .post::<_, serde_json::Value>("/v1/report/list", &json!({}), None)
            .await
    );

    assert!(matches!(error, OzonError::Connection { attempts: 3, .. }));
    assert!(std::error::Error::source(&error).is_some());
    assert_eq!(transport.requests().len(), 3);
}

// ============================================================================
// Timeout and cancellation
// ============================================================================

#[tokio::test]
async fn test_timeout_is_retried_then_surfaced() {
    let transport = Arc::new(HangingTransport {
        calls: Mutex::new(0),
    });
    let client = client_with(transport.clone(), 2, Duration::from_millis(20));

    let error = assert_err!(
        client
            .post::<_, serde_json::Value>("/v1/product/archive", &json!({}), None)
            .await
    );

    match error {
        OzonError::Timeout { timeout, attempts } => {
            assert_eq!(timeout, Duration::from_millis(20));
            assert_eq!(attempts, 2);
        }
        other => panic!("expected Timeout, got {other:?}"),
    }
    assert_eq!(*transport.calls.lock().unwrap(), 2);
}

#[tokio::test]
async fn test_per_call_timeout_overrides_config() {
    let transport = Arc::new(HangingTransport {
        calls: Mutex::new(0),
    });
    let client = client_with(transport, 1, Duration::from_secs(60));

    let options = RequestOptions::new().timeout(Duration::from_millis(10));
    let started = Instant::now();
    let error = assert_err!(
        client
            .get::<serde_json::Value>("/v1/actions", Some(options))
            .await
    );

    assert_eq!(error.kind(), ErrorKind::Timeout);
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_cancellation_aborts_in_flight_attempt() {
    let transport = Arc::new(HangingTransport {
        calls: Mutex::new(0),
    });
    let client = client_with(transport, 3, Duration::from_secs(60));

    let token = CancellationToken::new();
    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        canceller.cancel();
    });

    let started = Instant::now();
    let error = assert_err!(
        client
            .post::<_, serde_json::Value>(
                "/v1/product/archive",
                &json!({}),
                Some(RequestOptions::new().cancellation(token)),
            )
            .await
    );

    assert!(matches!(error, OzonError::Cancelled { attempts: 1 }));
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_cancellation_aborts_backoff_sleep() {
    let limited = HttpResponse::new(
        429,
        HashMap::from([("Retry-After".to_string(), vec!["30".to_string()])]),
        "{}",
    );
    let transport = ScriptedTransport::new(vec![Ok(limited)]);
    let client = client_with(transport.clone(), 3, Duration::from_secs(5));

    let token = CancellationToken::new();
    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        canceller.cancel();
    });

    let error = assert_err!(
        client
            .post::<_, serde_json::Value>(
                "/v1/analytics/data",
                &json!({}),
                Some(RequestOptions::new().cancellation(token)),
            )
            .await
    );

    assert!(matches!(error, OzonError::Cancelled { attempts: 1 }));
    assert_eq!(transport.requests().len(), 1);
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_calls_do_not_cross_talk() {
    let client = Arc::new(client_with(Arc::new(EchoTransport), 1, Duration::from_secs(5)));
    let mut tasks = tokio::task::JoinSet::new();

    for i in 0..50_u32 {
        let client = Arc::clone(&client);
        tasks.spawn(async move {
            let response: ResultResponse<serde_json::Value> = client
                .post("/v1/product/archive", &json!({"id": i}), None)
                .await
                .unwrap();
            (i, response.result)
        });
    }

    let mut seen = 0;
    while let Some(joined) = tasks.join_next().await {
        let (i, result) = joined.unwrap();
        assert_eq!(result, json!({"id": i}));
        seen += 1;
    }
    assert_eq!(seen, 50);
}

// ============================================================================
// Composition root
// ============================================================================

#[test]
fn test_missing_api_key_fails_at_build() {
    let result = OzonConfig::builder()
        .client_id(ClientId::new("12345"))
        .build();
    assert!(matches!(
        result,
        Err(ConfigError::MissingRequiredField { field: "api_key" })
    ));
}

#[test]
fn test_empty_api_key_fails_before_any_category_is_reachable() {
    let config = OzonConfig::builder()
        .client_id(ClientId::new("12345"))
        .api_key(ApiKey::new(""))
        .build()
        .unwrap();

    let transport = ScriptedTransport::new(vec![]);
    let result = OzonClient::with_transport(config, transport.clone());

    let error = assert_err!(result);
    assert_eq!(error.kind(), ErrorKind::Configuration);
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_get_sends_no_body() {
    let transport =
        ScriptedTransport::new(vec![Ok(HttpResponse::json(200, &json!({"result": []})))]);
    let client = client_with(transport.clone(), 1, Duration::from_secs(5));

    let _: ResultResponse<Vec<serde_json::Value>> =
        assert_ok!(client.get("/v1/product/certificate/types", None).await);

    let request = &transport.requests()[0];
    assert_eq!(request.method, HttpMethod::Get);
    assert!(request.body.is_none());
    assert!(request.header(IDEMPOTENCY_KEY_HEADER).is_none());
}
