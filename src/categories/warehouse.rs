//! Seller warehouses and their delivery methods.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;
use crate::types::{EmptyRequest, ResultResponse};

/// A seller warehouse.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Warehouse {
    pub warehouse_id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_rfbs: bool,
    #[serde(default)]
    pub is_able_to_set_price: bool,
    #[serde(default)]
    pub has_entrusted_acceptance: bool,
    #[serde(default)]
    pub can_print_act_in_advance: bool,
    #[serde(default)]
    pub status: String,
}

/// Filter for [`DeliveryMethodListRequest`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DeliveryMethodFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<u64>,
}

/// Request for `/v1/delivery-method/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DeliveryMethodListRequest {
    pub filter: DeliveryMethodFilter,
    pub limit: u32,
    pub offset: u32,
}

/// A delivery method configured for a warehouse.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DeliveryMethod {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub company_id: u64,
    #[serde(default)]
    pub provider_id: u64,
    #[serde(default)]
    pub warehouse_id: u64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub cutoff: String,
}

/// Response of `/v1/delivery-method/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DeliveryMethodListResponse {
    #[serde(default)]
    pub result: Vec<DeliveryMethod>,
    #[serde(default)]
    pub has_next: bool,
}

/// Seller warehouses and their delivery methods.
#[derive(Debug, Clone)]
pub struct WarehouseApi {
    http: Arc<HttpClient>,
}

impl WarehouseApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists FBS and rFBS warehouses.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn list(
        &self,
        request: &EmptyRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<Vec<Warehouse>>, OzonError> {
        self.http.post("/v1/warehouse/list", request, options).await
    }

    /// Lists delivery methods.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn delivery_methods(
        &self,
        request: &DeliveryMethodListRequest,
        options: Option<RequestOptions>,
    ) -> Result<DeliveryMethodListResponse, OzonError> {
        self.http
            .post("/v1/delivery-method/list", request, options)
            .await
    }
}
