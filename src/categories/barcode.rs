//! Product barcodes.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;

/// Request for `/v1/barcode/generate`; at most 100 products per call.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GenerateBarcodesRequest {
    pub product_ids: Vec<u64>,
}

/// A barcode to bind to a SKU.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BarcodeBinding {
    pub barcode: String,
    pub sku: u64,
}

/// Request for `/v1/barcode/add`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AddBarcodesRequest {
    pub barcodes: Vec<BarcodeBinding>,
}

/// A per-item barcode failure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BarcodeError {
    #[serde(default)]
    pub barcode: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub product_id: u64,
    #[serde(default)]
    pub sku: u64,
}

/// Response of both barcode endpoints; an empty `errors` means success.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BarcodeResponse {
    #[serde(default)]
    pub errors: Vec<BarcodeError>,
}

/// Barcode generation and binding for products.
#[derive(Debug, Clone)]
pub struct BarcodeApi {
    http: Arc<HttpClient>,
}

impl BarcodeApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Generates Ozon barcodes for products that have none.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn generate(
        &self,
        request: &GenerateBarcodesRequest,
        options: Option<RequestOptions>,
    ) -> Result<BarcodeResponse, OzonError> {
        self.http.post("/v1/barcode/generate", request, options).await
    }

    /// Binds existing barcodes to SKUs.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn add(
        &self,
        request: &AddBarcodesRequest,
        options: Option<RequestOptions>,
    ) -> Result<BarcodeResponse, OzonError> {
        self.http.post("/v1/barcode/add", request, options).await
    }
}
