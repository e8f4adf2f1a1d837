//! FBO supply orders.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;

/// Filter for [`SupplyOrderListRequest`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SupplyOrderFilter {
    /// States such as `ORDER_STATE_DATA_FILLING` or `ORDER_STATE_COMPLETED`.
    pub states: Vec<String>,
}

/// Paging for [`SupplyOrderListRequest`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SupplyOrderPaging {
    /// Id of the last order on the previous page, omitted for the first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_supply_order_id: Option<u64>,
    pub limit: u32,
}

/// Request for `/v2/supply-order/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SupplyOrderListRequest {
    pub filter: SupplyOrderFilter,
    pub paging: SupplyOrderPaging,
}

/// Response of `/v2/supply-order/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SupplyOrderListResponse {
    #[serde(default)]
    pub supply_order_id: Vec<u64>,
    #[serde(default)]
    pub last_supply_order_id: Option<u64>,
}

/// Request for `/v2/supply-order/get`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SupplyOrderGetRequest {
    pub order_ids: Vec<u64>,
}

/// A supply order with its supplies and timeslot.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SupplyOrder {
    pub supply_order_id: u64,
    #[serde(default)]
    pub supply_order_number: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub creation_date: String,
    #[serde(default)]
    pub dropoff_warehouse_id: u64,
    #[serde(default)]
    pub supplies: Vec<serde_json::Value>,
    #[serde(default)]
    pub timeslot: Option<serde_json::Value>,
}

/// Response of `/v2/supply-order/get`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SupplyOrderGetResponse {
    #[serde(default)]
    pub orders: Vec<SupplyOrder>,
    #[serde(default)]
    pub warehouses: Vec<serde_json::Value>,
}

/// FBO supply orders.
#[derive(Debug, Clone)]
pub struct SupplyOrderApi {
    http: Arc<HttpClient>,
}

impl SupplyOrderApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists supply order ids by state.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn list(
        &self,
        request: &SupplyOrderListRequest,
        options: Option<RequestOptions>,
    ) -> Result<SupplyOrderListResponse, OzonError> {
        self.http.post("/v2/supply-order/list", request, options).await
    }

    /// Returns supply orders by id.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn get(
        &self,
        request: &SupplyOrderGetRequest,
        options: Option<RequestOptions>,
    ) -> Result<SupplyOrderGetResponse, OzonError> {
        self.http.post("/v2/supply-order/get", request, options).await
    }
}
