//! Sales analytics and warehouse stock reports.
//!
//! `/v1/analytics/data` is heavily rate limited by Ozon (about one call per
//! minute); [`OzonError::RateLimit`] responses carry the server's
//! `Retry-After`, which the client honours automatically.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;
use crate::types::ResultResponse;

/// Request for `/v1/analytics/data`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalyticsDataRequest {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    /// Metrics such as `revenue`, `ordered_units`, `hits_view`.
    pub metrics: Vec<String>,
    /// Grouping such as `sku`, `day`, `week`, `month`.
    pub dimension: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<serde_json::Value>,
    pub limit: u32,
    pub offset: u32,
}

/// A dimension value of an analytics row.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AnalyticsDimension {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// One analytics row; `metrics` follow the order of the requested metrics.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AnalyticsRow {
    #[serde(default)]
    pub dimensions: Vec<AnalyticsDimension>,
    #[serde(default)]
    pub metrics: Vec<f64>,
}

/// Rows and totals of an analytics query.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AnalyticsData {
    #[serde(default)]
    pub data: Vec<AnalyticsRow>,
    #[serde(default)]
    pub totals: Vec<f64>,
}

/// Request for `/v2/analytics/stock_on_warehouses`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StockOnWarehousesRequest {
    pub limit: u32,
    pub offset: u32,
    /// `ALL`, `EXPRESS_DARK_STORE` or `NOT_EXPRESS_DARK_STORE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warehouse_type: Option<String>,
}

/// Stock of one SKU at one Ozon warehouse.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WarehouseStockRow {
    pub sku: u64,
    #[serde(default)]
    pub item_code: String,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub free_to_sell_amount: i64,
    #[serde(default)]
    pub promised_amount: i64,
    #[serde(default)]
    pub reserved_amount: i64,
    #[serde(default)]
    pub warehouse_name: String,
}

/// Result of `/v2/analytics/stock_on_warehouses`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StockOnWarehousesResult {
    #[serde(default)]
    pub rows: Vec<WarehouseStockRow>,
}

/// Sales analytics and warehouse stock reports.
///
/// Obtained from [`OzonClient::analytics`](crate::OzonClient::analytics).
#[derive(Debug, Clone)]
pub struct AnalyticsApi {
    http: Arc<HttpClient>,
}

impl AnalyticsApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Returns aggregated sales metrics.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn data(
        &self,
        request: &AnalyticsDataRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<AnalyticsData>, OzonError> {
        self.http.post("/v1/analytics/data", request, options).await
    }

    /// Returns stock on Ozon warehouses.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn stock_on_warehouses(
        &self,
        request: &StockOnWarehousesRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<StockOnWarehousesResult>, OzonError> {
        self.http
            .post("/v2/analytics/stock_on_warehouses", request, options)
            .await
    }
}
