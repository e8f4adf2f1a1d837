//! Seller rating.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;
use crate::types::EmptyRequest;

/// One rating metric.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Rating {
    pub rating: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub current_value: f64,
    #[serde(default)]
    pub past_value: f64,
    /// `OK`, `WARNING` or `CRITICAL`.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub value_type: String,
    #[serde(default)]
    pub rating_direction: String,
}

/// A group of related rating indicators.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RatingGroup {
    #[serde(default)]
    pub group_name: String,
    #[serde(default)]
    pub items: Vec<Rating>,
}

/// Response of `/v1/rating/summary`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RatingSummaryResponse {
    #[serde(default)]
    pub groups: Vec<RatingGroup>,
    #[serde(default)]
    pub penalty_score_exceeded: bool,
    #[serde(default)]
    pub premium: bool,
}

/// Request for `/v1/rating/history`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RatingHistoryRequest {
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
    pub ratings: Vec<String>,
    #[serde(default)]
    pub with_premium_scores: bool,
}

/// Response of `/v1/rating/history`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RatingHistoryResponse {
    #[serde(default)]
    pub ratings: Vec<serde_json::Value>,
    #[serde(default)]
    pub premium_scores: Vec<serde_json::Value>,
}

/// Seller rating summary and history.
#[derive(Debug, Clone)]
pub struct RatingApi {
    http: Arc<HttpClient>,
}

impl RatingApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Returns current rating values.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn summary(
        &self,
        request: &EmptyRequest,
        options: Option<RequestOptions>,
    ) -> Result<RatingSummaryResponse, OzonError> {
        self.http.post("/v1/rating/summary", request, options).await
    }

    /// Returns the history of selected ratings.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn history(
        &self,
        request: &RatingHistoryRequest,
        options: Option<RequestOptions>,
    ) -> Result<RatingHistoryResponse, OzonError> {
        self.http.post("/v1/rating/history", request, options).await
    }
}
