//! FBO and FBS returns.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;

/// Filter for [`ReturnsListRequest`]; every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ReturnsFilter {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub posting_numbers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logistic_return_date: Option<serde_json::Value>,
}

/// Request for `/v1/returns/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ReturnsListRequest {
    pub filter: ReturnsFilter,
    pub limit: u32,
    /// Id of the last return on the previous page, `0` for the first page.
    pub last_id: u64,
}

/// A single FBO or FBS return.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ReturnItem {
    /// Return id, also the cursor for the next page.
    pub id: u64,
    #[serde(default)]
    pub order_id: u64,
    #[serde(default)]
    pub order_number: String,
    #[serde(default)]
    pub posting_number: String,
    /// Fulfillment scheme, `Fbo` or `Fbs`.
    #[serde(default)]
    pub schema: String,
    /// `Cancellation`, `FullReturn` or `PartialReturn`.
    #[serde(default, rename = "type")]
    pub return_type: String,
    #[serde(default)]
    pub return_reason_name: String,
    /// Returned product details as sent by Ozon.
    #[serde(default)]
    pub product: Option<serde_json::Value>,
    /// Return shipment dates and barcode.
    #[serde(default)]
    pub logistic: Option<serde_json::Value>,
    /// Status shown to the seller in the Ozon interface.
    #[serde(default)]
    pub visual: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Response of `/v1/returns/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ReturnsListResponse {
    #[serde(default)]
    pub returns: Vec<ReturnItem>,
    #[serde(default)]
    pub has_next: bool,
}

/// FBO and FBS returns.
///
/// Obtained from [`OzonClient::returns`](crate::OzonClient::returns).
#[derive(Debug, Clone)]
pub struct ReturnsApi {
    http: Arc<HttpClient>,
}

impl ReturnsApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists returns.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn list(
        &self,
        request: &ReturnsListRequest,
        options: Option<RequestOptions>,
    ) -> Result<ReturnsListResponse, OzonError> {
        self.http.post("/v1/returns/list", request, options).await
    }
}
