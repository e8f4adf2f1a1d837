//! FBS postings: orders fulfilled from the seller's own warehouse.
//!
//! A typical flow lists postings `awaiting_packaging`, ships them with
//! [`FbsApi::ship`] (optionally split into several packages), and hands the
//! packages to the carrier with an act from the `delivery_fbs` category.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;
use crate::types::{ResultResponse, SortDirection};

use super::fbo::{PostingProduct, PostingWith};

/// Filter for [`FbsPostingListRequest`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FbsPostingFilter {
    pub since: DateTime<Utc>,
    pub to: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warehouse_id: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub delivery_method_id: Vec<u64>,
}

/// Request for `/v3/posting/fbs/list`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FbsPostingListRequest {
    pub dir: SortDirection,
    pub filter: FbsPostingFilter,
    pub limit: u32,
    pub offset: u32,
    #[serde(default)]
    pub with: PostingWith,
}

/// An FBS posting.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FbsPosting {
    pub posting_number: String,
    #[serde(default)]
    pub order_id: u64,
    #[serde(default)]
    pub order_number: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub substatus: String,
    #[serde(default)]
    pub tracking_number: String,
    #[serde(default)]
    pub in_process_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub shipment_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub delivery_method: Option<serde_json::Value>,
    #[serde(default)]
    pub products: Vec<PostingProduct>,
    #[serde(default)]
    pub analytics_data: Option<serde_json::Value>,
    #[serde(default)]
    pub financial_data: Option<serde_json::Value>,
}

/// Result of `/v3/posting/fbs/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FbsPostingListResult {
    #[serde(default)]
    pub postings: Vec<FbsPosting>,
    #[serde(default)]
    pub has_next: bool,
}

/// Request for `/v3/posting/fbs/get`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FbsPostingGetRequest {
    pub posting_number: String,
    #[serde(default)]
    pub with: PostingWith,
}

/// A product placed into a package.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PackageProduct {
    pub product_id: u64,
    pub quantity: u32,
}

/// One package of a shipped posting.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Package {
    pub products: Vec<PackageProduct>,
}

/// Request for `/v4/posting/fbs/ship`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ShipPostingRequest {
    pub posting_number: String,
    pub packages: Vec<Package>,
}

/// Response of `/v4/posting/fbs/ship`.
///
/// Shipping a posting in several packages produces one new posting number
/// per package.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ShipPostingResponse {
    #[serde(default)]
    pub result: Vec<String>,
    #[serde(default)]
    pub additional_data: Vec<serde_json::Value>,
}

/// Postings fulfilled from the seller's own warehouse (FBS).
///
/// Obtained from [`OzonClient::fbs`](crate::OzonClient::fbs).
#[derive(Debug, Clone)]
pub struct FbsApi {
    http: Arc<HttpClient>,
}

impl FbsApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists FBS postings.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn list(
        &self,
        request: &FbsPostingListRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<FbsPostingListResult>, OzonError> {
        self.http.post("/v3/posting/fbs/list", request, options).await
    }

    /// Returns one FBS posting.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError::NotFound`] for an unknown posting number.
    pub async fn get(
        &self,
        request: &FbsPostingGetRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<FbsPosting>, OzonError> {
        self.http.post("/v3/posting/fbs/get", request, options).await
    }

    /// Assembles a posting into one or more packages.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn ship(
        &self,
        request: &ShipPostingRequest,
        options: Option<RequestOptions>,
    ) -> Result<ShipPostingResponse, OzonError> {
        self.http.post("/v4/posting/fbs/ship", request, options).await
    }
}
