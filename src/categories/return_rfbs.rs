//! rFBS return requests raised by buyers.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;

/// Filter for [`RfbsReturnListRequest`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RfbsReturnFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posting_number: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_state: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<serde_json::Value>,
}

/// Request for `/v2/returns/rfbs/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RfbsReturnListRequest {
    pub filter: RfbsReturnFilter,
    pub last_id: u64,
    pub limit: u32,
}

/// A return request summary.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RfbsReturn {
    pub return_id: u64,
    #[serde(default)]
    pub return_number: String,
    #[serde(default)]
    pub posting_number: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub product: Option<serde_json::Value>,
    #[serde(default)]
    pub state: Option<serde_json::Value>,
}

/// Response of `/v2/returns/rfbs/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RfbsReturnListResponse {
    #[serde(default)]
    pub returns: Vec<RfbsReturn>,
}

/// Request for `/v2/returns/rfbs/get`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RfbsReturnGetRequest {
    pub return_id: u64,
}

/// Response of `/v2/returns/rfbs/get`.
///
/// The return card is large and changes often, so it is kept as raw JSON
/// alongside the actions currently available to the seller.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RfbsReturnGetResponse {
    #[serde(default)]
    pub returns: serde_json::Value,
    #[serde(default)]
    pub available_actions: Vec<serde_json::Value>,
}

/// Return requests for rFBS postings.
#[derive(Debug, Clone)]
pub struct ReturnRfbsApi {
    http: Arc<HttpClient>,
}

impl ReturnRfbsApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists rFBS return requests.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn list(
        &self,
        request: &RfbsReturnListRequest,
        options: Option<RequestOptions>,
    ) -> Result<RfbsReturnListResponse, OzonError> {
        self.http.post("/v2/returns/rfbs/list", request, options).await
    }

    /// Returns one rFBS return request.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn get(
        &self,
        request: &RfbsReturnGetRequest,
        options: Option<RequestOptions>,
    ) -> Result<RfbsReturnGetResponse, OzonError> {
        self.http.post("/v2/returns/rfbs/get", request, options).await
    }
}
