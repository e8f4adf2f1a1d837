//! Conditional cancellation requests for rFBS postings.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;

/// Filter for [`CancellationListRequest`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CancellationFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_initiator: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posting_number: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Request for `/v2/conditional-cancellation/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CancellationListRequest {
    pub filter: CancellationFilter,
    pub last_id: u64,
    pub limit: u32,
}

/// A buyer's conditional cancellation request.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CancellationRequest {
    pub cancellation_id: u64,
    #[serde(default)]
    pub posting_number: String,
    #[serde(default)]
    pub cancellation_reason: Option<serde_json::Value>,
    #[serde(default)]
    pub cancellation_reason_message: String,
    #[serde(default)]
    pub cancellation_initiator: String,
    #[serde(default)]
    pub cancelled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub state: Option<serde_json::Value>,
}

/// Response of `/v2/conditional-cancellation/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CancellationListResponse {
    #[serde(default)]
    pub result: Vec<CancellationRequest>,
    #[serde(default)]
    pub last_id: u64,
    #[serde(default)]
    pub counter: u64,
}

/// Request for approving or rejecting a cancellation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CancellationDecisionRequest {
    pub cancellation_id: u64,
    /// Required when rejecting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Conditional cancellation requests raised by buyers.
#[derive(Debug, Clone)]
pub struct CancellationApi {
    http: Arc<HttpClient>,
}

impl CancellationApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists cancellation requests.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn list(
        &self,
        request: &CancellationListRequest,
        options: Option<RequestOptions>,
    ) -> Result<CancellationListResponse, OzonError> {
        self.http
            .post("/v2/conditional-cancellation/list", request, options)
            .await
    }

    /// Approves a cancellation; the posting is cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn approve(
        &self,
        request: &CancellationDecisionRequest,
        options: Option<RequestOptions>,
    ) -> Result<serde_json::Value, OzonError> {
        self.http
            .post("/v2/conditional-cancellation/approve", request, options)
            .await
    }

    /// Rejects a cancellation; the posting keeps its status.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn reject(
        &self,
        request: &CancellationDecisionRequest,
        options: Option<RequestOptions>,
    ) -> Result<serde_json::Value, OzonError> {
        self.http
            .post("/v2/conditional-cancellation/reject", request, options)
            .await
    }
}
