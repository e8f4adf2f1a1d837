//! FBO supply request drafts and timeslots.
//!
//! A supply request starts as a draft: create it, poll
//! [`FboSupplyRequestApi::draft_info`] until calculation finishes, then pick a
//! timeslot for the chosen warehouse.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;

/// One SKU line of a supply draft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DraftItem {
    pub sku: u64,
    pub quantity: u32,
}

/// Request for `/v1/draft/create`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CreateDraftRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cluster_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop_off_point_warehouse_id: Option<u64>,
    pub items: Vec<DraftItem>,
    /// `CREATE_TYPE_CROSSDOCK` or `CREATE_TYPE_DIRECT`.
    #[serde(rename = "type")]
    pub create_type: String,
}

/// Response of `/v1/draft/create`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CreateDraftResponse {
    pub operation_id: String,
}

/// Request for `/v1/draft/create/info`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DraftInfoRequest {
    pub operation_id: String,
}

/// Calculation status of a draft.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DraftInfoResponse {
    #[serde(default)]
    pub draft_id: u64,
    /// `CALCULATION_STATUS_IN_PROGRESS`, `CALCULATION_STATUS_SUCCESS`, ...
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub clusters: Vec<serde_json::Value>,
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}

/// Request for `/v1/draft/timeslot/info`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeslotInfoRequest {
    pub draft_id: u64,
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
    pub warehouse_ids: Vec<u64>,
}

/// Response of `/v1/draft/timeslot/info`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TimeslotInfoResponse {
    #[serde(default)]
    pub drop_off_warehouse_timeslots: Vec<serde_json::Value>,
    #[serde(default)]
    pub requested_date_from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub requested_date_to: Option<DateTime<Utc>>,
}

/// FBO supply drafts and delivery timeslots.
#[derive(Debug, Clone)]
pub struct FboSupplyRequestApi {
    http: Arc<HttpClient>,
}

impl FboSupplyRequestApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Creates a supply request draft.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn create_draft(
        &self,
        request: &CreateDraftRequest,
        options: Option<RequestOptions>,
    ) -> Result<CreateDraftResponse, OzonError> {
        self.http.post("/v1/draft/create", request, options).await
    }

    /// Returns the calculation status of a draft.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn draft_info(
        &self,
        request: &DraftInfoRequest,
        options: Option<RequestOptions>,
    ) -> Result<DraftInfoResponse, OzonError> {
        self.http.post("/v1/draft/create/info", request, options).await
    }

    /// Returns available delivery timeslots for a draft.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn timeslot_info(
        &self,
        request: &TimeslotInfoRequest,
        options: Option<RequestOptions>,
    ) -> Result<TimeslotInfoResponse, OzonError> {
        self.http
            .post("/v1/draft/timeslot/info", request, options)
            .await
    }
}
