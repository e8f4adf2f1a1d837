//! Digital goods postings and activation codes.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;
use crate::types::SortDirection;

use super::fbo::PostingProduct;

/// Filter for [`DigitalPostingListRequest`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DigitalPostingFilter {
    pub since: DateTime<Utc>,
    pub to: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Request for `/v1/posting/digital/list`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DigitalPostingListRequest {
    pub dir: SortDirection,
    pub filter: DigitalPostingFilter,
    pub limit: u32,
    pub offset: u32,
}

/// A posting of digital goods.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DigitalPosting {
    pub posting_number: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub in_process_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub products: Vec<PostingProduct>,
}

/// Response of `/v1/posting/digital/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DigitalPostingListResponse {
    #[serde(default)]
    pub result: Vec<DigitalPosting>,
    #[serde(default)]
    pub has_next: bool,
}

/// Activation codes for one product of a posting.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductCodes {
    pub sku: u64,
    pub exemplar_qty: u32,
    pub not_available_exemplar_qty: u32,
    pub exemplar_keys: Vec<String>,
}

/// Request for `/v1/posting/digital/codes/upload`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UploadCodesRequest {
    pub posting_number: String,
    pub exemplars_by_sku: Vec<ProductCodes>,
}

/// Postings of digital goods and their activation codes.
#[derive(Debug, Clone)]
pub struct DigitalApi {
    http: Arc<HttpClient>,
}

impl DigitalApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists digital postings.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn list(
        &self,
        request: &DigitalPostingListRequest,
        options: Option<RequestOptions>,
    ) -> Result<DigitalPostingListResponse, OzonError> {
        self.http
            .post("/v1/posting/digital/list", request, options)
            .await
    }

    /// Uploads activation codes for a posting.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn upload_codes(
        &self,
        request: &UploadCodesRequest,
        options: Option<RequestOptions>,
    ) -> Result<serde_json::Value, OzonError> {
        self.http
            .post("/v1/posting/digital/codes/upload", request, options)
            .await
    }
}
