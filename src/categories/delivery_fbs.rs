//! FBS hand-over acts.
//!
//! Acts are generated asynchronously: create one, then poll its status until
//! the documents are ready.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;
use crate::types::ResultResponse;

/// Request for `/v2/posting/fbs/act/create`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CreateActRequest {
    pub delivery_method_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub containers_count: Option<u32>,
}

/// Result of `/v2/posting/fbs/act/create`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CreateActResult {
    pub id: u64,
}

/// Request for `/v2/posting/fbs/act/check-status`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ActStatusRequest {
    pub id: u64,
}

/// Generation status of an act.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ActStatus {
    pub id: u64,
    /// `in_process`, `ready` or `error`.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub act_type: String,
    #[serde(default)]
    pub added_to_act: Vec<String>,
    #[serde(default)]
    pub removed_from_act: Vec<String>,
    #[serde(default)]
    pub is_partial: bool,
    #[serde(default)]
    pub has_postings_for_next_carriage: bool,
}

/// FBS acceptance acts and their generation status.
#[derive(Debug, Clone)]
pub struct DeliveryFbsApi {
    http: Arc<HttpClient>,
}

impl DeliveryFbsApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Starts generating an act and waybill.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn create_act(
        &self,
        request: &CreateActRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<CreateActResult>, OzonError> {
        self.http
            .post("/v2/posting/fbs/act/create", request, options)
            .await
    }

    /// Returns the generation status of an act.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn act_status(
        &self,
        request: &ActStatusRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<ActStatus>, OzonError> {
        self.http
            .post("/v2/posting/fbs/act/check-status", request, options)
            .await
    }
}
