//! Seller account information.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;
use crate::types::EmptyRequest;

/// Legal details of the seller's company.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Company {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub legal_name: String,
    #[serde(default)]
    pub inn: String,
    #[serde(default)]
    pub ogrn: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub ownership_form: String,
    #[serde(default)]
    pub tax_system: String,
}

/// Response of `/v1/seller/info`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SellerInfo {
    #[serde(default)]
    pub company: Company,
    #[serde(default)]
    pub ratings: Vec<serde_json::Value>,
    #[serde(default)]
    pub subscription: Option<serde_json::Value>,
}

/// Seller account information.
#[derive(Debug, Clone)]
pub struct SellerApi {
    http: Arc<HttpClient>,
}

impl SellerApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Returns the seller's company, ratings and subscription.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn info(
        &self,
        request: &EmptyRequest,
        options: Option<RequestOptions>,
    ) -> Result<SellerInfo, OzonError> {
        self.http.post("/v1/seller/info", request, options).await
    }
}
