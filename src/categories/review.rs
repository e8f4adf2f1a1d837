//! Product reviews.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;
use crate::types::SortDirection;

/// Request for `/v1/review/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ReviewListRequest {
    /// Cursor from the previous page.
    pub last_id: String,
    pub limit: u32,
    pub sort_dir: SortDirection,
    /// `ALL`, `UNPROCESSED` or `PROCESSED`.
    pub status: String,
}

/// A buyer review of a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Review {
    pub id: String,
    #[serde(default)]
    pub sku: u64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub comments_amount: u64,
    #[serde(default)]
    pub photos_amount: u64,
    #[serde(default)]
    pub videos_amount: u64,
    #[serde(default)]
    pub is_rating_participant: bool,
    #[serde(default)]
    pub order_status: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// Response of `/v1/review/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ReviewListResponse {
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub last_id: String,
}

/// Request for `/v1/review/comment/create`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CreateCommentRequest {
    pub review_id: String,
    pub text: String,
    /// Also mark the review as processed.
    #[serde(default)]
    pub mark_review_as_processed: bool,
    /// Reply to an existing comment instead of the review.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_comment_id: Option<String>,
}

/// Response of `/v1/review/comment/create`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CreateCommentResponse {
    pub comment_id: String,
}

/// Product reviews and seller comments on them.
#[derive(Debug, Clone)]
pub struct ReviewApi {
    http: Arc<HttpClient>,
}

impl ReviewApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists reviews.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn list(
        &self,
        request: &ReviewListRequest,
        options: Option<RequestOptions>,
    ) -> Result<ReviewListResponse, OzonError> {
        self.http.post("/v1/review/list", request, options).await
    }

    /// Leaves a comment on a review.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn create_comment(
        &self,
        request: &CreateCommentRequest,
        options: Option<RequestOptions>,
    ) -> Result<CreateCommentResponse, OzonError> {
        self.http
            .post("/v1/review/comment/create", request, options)
            .await
    }
}
