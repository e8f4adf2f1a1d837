//! rFBS delivery status updates made by the seller's own carrier.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;
use crate::types::ResultResponse;

/// A tracking number to attach to a posting.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TrackingNumber {
    pub posting_number: String,
    pub tracking_number: String,
}

/// Request for `/v2/fbs/posting/tracking-number/set`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SetTrackingNumbersRequest {
    pub tracking_numbers: Vec<TrackingNumber>,
}

/// Request for the delivering/delivered status changes.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PostingNumbersRequest {
    pub posting_number: Vec<String>,
}

/// Per-posting outcome of a status change.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PostingStatusResult {
    pub posting_number: String,
    #[serde(default)]
    pub result: bool,
    #[serde(default)]
    pub error: Vec<String>,
}

/// Delivery status updates for rFBS postings.
#[derive(Debug, Clone)]
pub struct DeliveryRfbsApi {
    http: Arc<HttpClient>,
}

impl DeliveryRfbsApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Attaches carrier tracking numbers to postings.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn set_tracking_numbers(
        &self,
        request: &SetTrackingNumbersRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<Vec<PostingStatusResult>>, OzonError> {
        self.http
            .post("/v2/fbs/posting/tracking-number/set", request, options)
            .await
    }

    /// Marks postings as being delivered.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn delivering(
        &self,
        request: &PostingNumbersRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<Vec<PostingStatusResult>>, OzonError> {
        self.http
            .post("/v2/fbs/posting/delivering", request, options)
            .await
    }

    /// Marks postings as delivered.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn delivered(
        &self,
        request: &PostingNumbersRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<Vec<PostingStatusResult>>, OzonError> {
        self.http
            .post("/v2/fbs/posting/delivered", request, options)
            .await
    }
}
