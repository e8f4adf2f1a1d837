//! Product catalog endpoints.
//!
//! Products are addressed by the seller's `offer_id` or by Ozon's
//! `product_id`; most requests accept either.
//!
//! # Example
//!
//! ```rust,ignore
//! use ozon_seller_api::categories::product::{ProductFilter, ProductListRequest};
//! use ozon_seller_api::types::PaginationParams;
//!
//! let mut request = ProductListRequest {
//!     filter: ProductFilter::default(),
//!     page: PaginationParams::cursor(100, ""),
//! };
//!
//! loop {
//!     let page = client.product().list(&request, None).await?.result;
//!     for item in &page.items {
//!         println!("{} -> {}", item.offer_id, item.product_id);
//!     }
//!     match page.next_cursor(100) {
//!         Some(next) => request.page = next,
//!         None => break,
//!     }
//! }
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;
use crate::types::{PaginatedResponse, PaginationParams, ResultResponse};

/// Product visibility filter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    /// Every product.
    #[default]
    All,
    /// Products visible to buyers.
    Visible,
    /// Products hidden from buyers.
    Invisible,
    /// Products in the archive.
    Archived,
}

/// Filter for [`ProductApi::list`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Restrict to these seller article codes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub offer_id: Vec<String>,
    /// Restrict to these Ozon product ids.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub product_id: Vec<u64>,
    pub visibility: Visibility,
}

/// Request for `/v3/product/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductListRequest {
    pub filter: ProductFilter,
    /// `limit` and the `last_id` cursor; empty cursor for the first page.
    #[serde(flatten)]
    pub page: PaginationParams,
}

/// A product reference in a list page.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductListItem {
    pub product_id: u64,
    #[serde(default)]
    pub offer_id: String,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub has_fbo_stocks: bool,
    #[serde(default)]
    pub has_fbs_stocks: bool,
}

/// Request for `/v3/product/info/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductInfoRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub offer_id: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub product_id: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sku: Vec<u64>,
}

/// Detailed product information.
///
/// Only the commonly used fields are typed; `statuses` and `stocks` keep the
/// raw JSON because their shape differs between catalog schemes.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductInfo {
    pub id: u64,
    #[serde(default)]
    pub offer_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub barcodes: Vec<String>,
    #[serde(default)]
    pub description_category_id: u64,
    #[serde(default)]
    pub type_id: u64,
    #[serde(default)]
    pub currency_code: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub old_price: String,
    #[serde(default)]
    pub min_price: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub statuses: Option<serde_json::Value>,
    #[serde(default)]
    pub stocks: Option<serde_json::Value>,
}

/// Response of `/v3/product/info/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductInfoResponse {
    #[serde(default)]
    pub items: Vec<ProductInfo>,
}

/// One attribute value of an imported product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductAttribute {
    pub id: u64,
    #[serde(default)]
    pub complex_id: u64,
    #[serde(default)]
    pub values: Vec<ProductAttributeValue>,
}

/// A single attribute value; dictionary attributes set `dictionary_value_id`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductAttributeValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dictionary_value_id: Option<u64>,
    pub value: String,
}

/// A product card to create or update.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductImportItem {
    pub offer_id: String,
    pub name: String,
    pub description_category_id: u64,
    pub type_id: u64,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<String>,
    pub currency_code: String,
    pub vat: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    /// Package dimensions; `dimension_unit` applies to all three.
    pub depth: u32,
    pub width: u32,
    pub height: u32,
    pub dimension_unit: String,
    pub weight: u32,
    pub weight_unit: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<ProductAttribute>,
}

/// Request for `/v3/product/import`; at most 100 items per call.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductImportRequest {
    pub items: Vec<ProductImportItem>,
}

/// Result of `/v3/product/import`. Poll the task with the import info method.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductImportResult {
    pub task_id: u64,
}

/// Request for `/v1/product/archive`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductArchiveRequest {
    pub product_id: Vec<u64>,
}

/// Product catalog endpoints.
#[derive(Debug, Clone)]
pub struct ProductApi {
    http: Arc<HttpClient>,
}

impl ProductApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists products with cursor pagination.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn list(
        &self,
        request: &ProductListRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<PaginatedResponse<ProductListItem>>, OzonError> {
        self.http.post("/v3/product/list", request, options).await
    }

    /// Returns full information for up to 1000 products.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn info_list(
        &self,
        request: &ProductInfoRequest,
        options: Option<RequestOptions>,
    ) -> Result<ProductInfoResponse, OzonError> {
        self.http.post("/v3/product/info/list", request, options).await
    }

    /// Creates or updates product cards asynchronously.
    ///
    /// Import is not idempotent on Ozon's side; pass an explicit
    /// idempotency key in `options` when resubmitting the same batch.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn import(
        &self,
        request: &ProductImportRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<ProductImportResult>, OzonError> {
        self.http.post("/v3/product/import", request, options).await
    }

    /// Moves products to the archive.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn archive(
        &self,
        request: &ProductArchiveRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<bool>, OzonError> {
        self.http.post("/v1/product/archive", request, options).await
    }
}
