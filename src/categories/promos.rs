//! Ozon promotions ("actions").

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;
use crate::types::ResultResponse;

/// A promotion the seller can take part in.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Action {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub action_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_participating: bool,
    #[serde(default)]
    pub participating_products_count: u64,
    #[serde(default)]
    pub potential_products_count: u64,
    #[serde(default)]
    pub discount_type: String,
    #[serde(default)]
    pub discount_value: f64,
}

/// Request for `/v1/actions/candidates`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ActionCandidatesRequest {
    pub action_id: u64,
    pub limit: u32,
    pub offset: u32,
}

/// A product that can join, or has joined, a promotion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct ActionProduct {
    pub id: u64,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub action_price: f64,
    #[serde(default)]
    pub max_action_price: f64,
    #[serde(default)]
    pub stock: i64,
}

/// Products eligible for or taking part in a promotion.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ActionProducts {
    #[serde(default)]
    pub products: Vec<ActionProduct>,
    #[serde(default)]
    pub total: u64,
}

/// A product to add to a promotion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct ActivateProduct {
    pub product_id: u64,
    pub action_price: f64,
    #[serde(default)]
    pub stock: u32,
}

/// Request for `/v1/actions/products/activate`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ActivateProductsRequest {
    pub action_id: u64,
    pub products: Vec<ActivateProduct>,
}

/// Outcome of adding products to a promotion.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ActivateProductsResult {
    #[serde(default)]
    pub product_ids: Vec<u64>,
    #[serde(default)]
    pub rejected: Vec<serde_json::Value>,
}

/// Ozon promotions and product participation.
#[derive(Debug, Clone)]
pub struct PromosApi {
    http: Arc<HttpClient>,
}

impl PromosApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists available promotions. Sent as a GET without a body.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn list(
        &self,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<Vec<Action>>, OzonError> {
        self.http.get("/v1/actions", options).await
    }

    /// Lists products that can join a promotion.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn candidates(
        &self,
        request: &ActionCandidatesRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<ActionProducts>, OzonError> {
        self.http.post("/v1/actions/candidates", request, options).await
    }

    /// Adds products to a promotion.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn activate_products(
        &self,
        request: &ActivateProductsRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<ActivateProductsResult>, OzonError> {
        self.http
            .post("/v1/actions/products/activate", request, options)
            .await
    }
}
