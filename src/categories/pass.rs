//! Warehouse entry passes for drivers and vehicles.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;

/// Filter for [`PassListRequest`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PassFilter {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arrival_pass_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dropoff_point_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_active_passes: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warehouse_ids: Vec<String>,
}

/// Request for `/v1/pass/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PassListRequest {
    /// Cursor from the previous page.
    pub cursor: String,
    pub filter: PassFilter,
    pub limit: u32,
}

/// A carrier pass for a warehouse.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ArrivalPass {
    pub arrival_pass_id: u64,
    #[serde(default)]
    pub arrival_reasons: Vec<String>,
    #[serde(default)]
    pub arrival_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub driver_name: String,
    #[serde(default)]
    pub driver_phone: String,
    #[serde(default)]
    pub vehicle_license_plate: String,
    #[serde(default)]
    pub vehicle_model: String,
    #[serde(default)]
    pub warehouse_id: u64,
    #[serde(default)]
    pub is_active: bool,
}

/// Response of `/v1/pass/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PassListResponse {
    #[serde(default)]
    pub arrival_passes: Vec<ArrivalPass>,
    #[serde(default)]
    pub cursor: String,
}

/// A pass to create for a carriage.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NewArrivalPass {
    pub driver_name: String,
    pub driver_phone: String,
    pub vehicle_license_plate: String,
    pub vehicle_model: String,
    #[serde(default)]
    pub with_returns: bool,
}

/// Request for `/v1/carriage/pass/create`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CreateCarriagePassRequest {
    pub carriage_id: u64,
    pub arrival_passes: Vec<NewArrivalPass>,
}

/// Response of `/v1/carriage/pass/create`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CreateCarriagePassResponse {
    #[serde(default)]
    pub arrival_pass_ids: Vec<String>,
}

/// Warehouse passes for carriers.
#[derive(Debug, Clone)]
pub struct PassApi {
    http: Arc<HttpClient>,
}

impl PassApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists entry passes.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn list(
        &self,
        request: &PassListRequest,
        options: Option<RequestOptions>,
    ) -> Result<PassListResponse, OzonError> {
        self.http.post("/v1/pass/list", request, options).await
    }

    /// Creates passes for a carriage.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn create_carriage_pass(
        &self,
        request: &CreateCarriagePassRequest,
        options: Option<RequestOptions>,
    ) -> Result<CreateCarriagePassResponse, OzonError> {
        self.http
            .post("/v1/carriage/pass/create", request, options)
            .await
    }
}
