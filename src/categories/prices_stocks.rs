//! Prices and stock levels.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;
use crate::types::ResultResponse;

/// A price update for one product.
///
/// Prices are decimal strings in the product's currency.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PriceUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

/// Request for `/v1/product/import/prices`; at most 1000 items per call.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ImportPricesRequest {
    pub prices: Vec<PriceUpdate>,
}

/// A stock update for one product in one warehouse.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StockUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    pub stock: u32,
    pub warehouse_id: u64,
}

/// Request for `/v2/products/stocks`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UpdateStocksRequest {
    pub stocks: Vec<StockUpdate>,
}

/// Per-item outcome of a price or stock update.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UpdateResult {
    #[serde(default)]
    pub offer_id: String,
    #[serde(default)]
    pub product_id: u64,
    #[serde(default)]
    pub warehouse_id: Option<u64>,
    #[serde(default)]
    pub updated: bool,
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}

/// Request for `/v4/product/info/stocks`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StockInfoRequest {
    pub filter: StockInfoFilter,
    /// Cursor from the previous page.
    pub cursor: String,
    pub limit: u32,
}

/// Filter for [`StockInfoRequest`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StockInfoFilter {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub offer_id: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub product_id: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

/// Stock of one product split by fulfillment scheme.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductStocks {
    pub product_id: u64,
    #[serde(default)]
    pub offer_id: String,
    #[serde(default)]
    pub stocks: Vec<StockEntry>,
}

/// Present and reserved quantity under one scheme (`fbo`, `fbs`, `crossborder`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StockEntry {
    #[serde(default, rename = "type")]
    pub scheme: String,
    #[serde(default)]
    pub present: i64,
    #[serde(default)]
    pub reserved: i64,
}

/// Response of `/v4/product/info/stocks`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StockInfoResponse {
    #[serde(default)]
    pub items: Vec<ProductStocks>,
    #[serde(default)]
    pub cursor: String,
    #[serde(default)]
    pub total: u64,
}

/// Price and stock endpoints.
#[derive(Debug, Clone)]
pub struct PricesStocksApi {
    http: Arc<HttpClient>,
}

impl PricesStocksApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Updates product prices.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails. Per-item rejections are
    /// reported in the result, not as an error.
    pub async fn import_prices(
        &self,
        request: &ImportPricesRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<Vec<UpdateResult>>, OzonError> {
        self.http
            .post("/v1/product/import/prices", request, options)
            .await
    }

    /// Updates warehouse stock levels.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn update_stocks(
        &self,
        request: &UpdateStocksRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<Vec<UpdateResult>>, OzonError> {
        self.http.post("/v2/products/stocks", request, options).await
    }

    /// Returns stock levels per fulfillment scheme.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn stocks_info(
        &self,
        request: &StockInfoRequest,
        options: Option<RequestOptions>,
    ) -> Result<StockInfoResponse, OzonError> {
        self.http
            .post("/v4/product/info/stocks", request, options)
            .await
    }
}
