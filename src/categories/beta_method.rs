//! Methods Ozon publishes as beta.
//!
//! Shapes of these endpoints change without notice, so most payloads are
//! kept as raw JSON.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;

/// Request for `/v1/analytics/manage/stocks`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ManageStocksRequest {
    pub limit: u32,
    pub offset: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<serde_json::Value>,
}

/// Response of `/v1/analytics/manage/stocks`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ManageStocksResponse {
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
}

/// Request for `/v1/removal/from-stock/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RemovalListRequest {
    pub date_from: String,
    pub date_to: String,
    pub last_id: String,
    pub limit: u32,
}

/// Response of `/v1/removal/from-stock/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RemovalListResponse {
    #[serde(default)]
    pub returns_summary_report_rows: Vec<serde_json::Value>,
    #[serde(default)]
    pub last_id: String,
}

/// Endpoints Ozon still marks as beta: stock management analytics and
/// removal-from-stock reports.
#[derive(Debug, Clone)]
pub struct BetaMethodApi {
    http: Arc<HttpClient>,
}

impl BetaMethodApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Returns stock management analytics.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn manage_stocks(
        &self,
        request: &ManageStocksRequest,
        options: Option<RequestOptions>,
    ) -> Result<ManageStocksResponse, OzonError> {
        self.http
            .post("/v1/analytics/manage/stocks", request, options)
            .await
    }

    /// Lists removals from stock.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn removal_from_stock_list(
        &self,
        request: &RemovalListRequest,
        options: Option<RequestOptions>,
    ) -> Result<RemovalListResponse, OzonError> {
        self.http
            .post("/v1/removal/from-stock/list", request, options)
            .await
    }
}
