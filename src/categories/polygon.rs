//! Delivery polygons for rFBS express delivery.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;

/// Request for `/v1/polygon/create`.
///
/// `coordinates` is a GeoJSON polygon ring serialized as a string, e.g.
/// `[[[30.0,59.9],[30.1,59.9],[30.1,60.0],[30.0,59.9]]]`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CreatePolygonRequest {
    pub coordinates: String,
}

/// Response of `/v1/polygon/create`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CreatePolygonResponse {
    pub polygon_id: u64,
}

/// A polygon and its delivery time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PolygonBinding {
    pub polygon_id: u64,
    /// Delivery time inside the polygon, in minutes.
    pub time: u32,
}

/// Request for `/v1/polygon/bind`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BindPolygonRequest {
    pub delivery_method_id: u64,
    pub polygons: Vec<PolygonBinding>,
    /// Warehouse coordinates, same format as polygon coordinates.
    pub warehouse_location: WarehouseLocation,
}

/// Warehouse position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct WarehouseLocation {
    pub lat: f64,
    pub lon: f64,
}

/// Delivery polygons for courier delivery methods.
#[derive(Debug, Clone)]
pub struct PolygonApi {
    http: Arc<HttpClient>,
}

impl PolygonApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Creates a delivery polygon.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn create(
        &self,
        request: &CreatePolygonRequest,
        options: Option<RequestOptions>,
    ) -> Result<CreatePolygonResponse, OzonError> {
        self.http.post("/v1/polygon/create", request, options).await
    }

    /// Binds polygons to a delivery method.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn bind(
        &self,
        request: &BindPolygonRequest,
        options: Option<RequestOptions>,
    ) -> Result<serde_json::Value, OzonError> {
        self.http.post("/v1/polygon/bind", request, options).await
    }
}
