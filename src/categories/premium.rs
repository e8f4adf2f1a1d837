//! Methods available to Premium and Premium Plus subscribers.
//!
//! Calling these without a subscription yields [`OzonError::Permission`].

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;

/// Request for `/v1/analytics/product-queries`; `page` starts at 0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductQueriesRequest {
    pub date_from: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<DateTime<Utc>>,
    pub skus: Vec<String>,
    pub page: u32,
    pub page_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_dir: Option<String>,
}

/// Search statistics for one product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductQueries {
    pub sku: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub offer_id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub gmv: f64,
    #[serde(default)]
    pub unique_search_users: u64,
    #[serde(default)]
    pub unique_view_users: u64,
    #[serde(default)]
    pub view_conversion: f64,
    #[serde(default)]
    pub position: f64,
}

/// Response of `/v1/analytics/product-queries`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductQueriesResponse {
    #[serde(default)]
    pub items: Vec<ProductQueries>,
    #[serde(default)]
    pub page_count: u64,
    #[serde(default)]
    pub total: u64,
}

/// Request for `/v1/finance/realization/by-day`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RealizationByDayRequest {
    pub day: NaiveDate,
}

/// Response of `/v1/finance/realization/by-day`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RealizationByDayResponse {
    #[serde(default)]
    pub rows: Vec<serde_json::Value>,
}

/// Endpoints available to Premium subscribers only.
#[derive(Debug, Clone)]
pub struct PremiumApi {
    http: Arc<HttpClient>,
}

impl PremiumApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Returns search query statistics per product.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn product_queries(
        &self,
        request: &ProductQueriesRequest,
        options: Option<RequestOptions>,
    ) -> Result<ProductQueriesResponse, OzonError> {
        self.http
            .post("/v1/analytics/product-queries", request, options)
            .await
    }

    /// Returns the realization report for a single day.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn realization_by_day(
        &self,
        request: &RealizationByDayRequest,
        options: Option<RequestOptions>,
    ) -> Result<RealizationByDayResponse, OzonError> {
        self.http
            .post("/v1/finance/realization/by-day", request, options)
            .await
    }
}
