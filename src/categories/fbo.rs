//! FBO postings: orders fulfilled from Ozon warehouses.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;
use crate::types::{ResultResponse, SortDirection};

/// Filter for [`FboPostingListRequest`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FboPostingFilter {
    pub since: DateTime<Utc>,
    pub to: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Extra blocks to include in posting responses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PostingWith {
    #[serde(default)]
    pub analytics_data: bool,
    #[serde(default)]
    pub financial_data: bool,
}

/// Request for `/v2/posting/fbo/list`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FboPostingListRequest {
    pub dir: SortDirection,
    pub filter: FboPostingFilter,
    pub limit: u32,
    pub offset: u32,
    #[serde(default)]
    pub with: PostingWith,
}

/// A product line of a posting.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PostingProduct {
    pub sku: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub offer_id: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub currency_code: String,
}

/// An FBO posting.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FboPosting {
    pub posting_number: String,
    #[serde(default)]
    pub order_id: u64,
    #[serde(default)]
    pub order_number: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub in_process_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub products: Vec<PostingProduct>,
    #[serde(default)]
    pub analytics_data: Option<serde_json::Value>,
    #[serde(default)]
    pub financial_data: Option<serde_json::Value>,
}

/// Request for `/v2/posting/fbo/get`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FboPostingGetRequest {
    pub posting_number: String,
    #[serde(default)]
    pub with: PostingWith,
}

/// Postings fulfilled from Ozon warehouses (FBO).
#[derive(Debug, Clone)]
pub struct FboApi {
    http: Arc<HttpClient>,
}

impl FboApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists FBO postings created in a time window.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn list(
        &self,
        request: &FboPostingListRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<Vec<FboPosting>>, OzonError> {
        self.http.post("/v2/posting/fbo/list", request, options).await
    }

    /// Returns one FBO posting.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError::NotFound`] for an unknown posting number.
    pub async fn get(
        &self,
        request: &FboPostingGetRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<FboPosting>, OzonError> {
        self.http.post("/v2/posting/fbo/get", request, options).await
    }
}
