//! Competitor-based pricing strategies.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;

/// Request for `/v1/pricing-strategy/list`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StrategyListRequest {
    pub page: u32,
    pub limit: u32,
}

/// A pricing strategy.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Strategy {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub strategy_type: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub products_count: u64,
    #[serde(default)]
    pub competitors_count: u64,
}

/// Response of `/v1/pricing-strategy/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StrategyListResponse {
    #[serde(default)]
    pub strategies: Vec<Strategy>,
    #[serde(default)]
    pub total: u64,
}

/// A competitor and the coefficient applied to its price.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct Competitor {
    pub competitor_id: u64,
    pub coefficient: f64,
}

/// Request for `/v1/pricing-strategy/create`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CreateStrategyRequest {
    pub strategy_name: String,
    pub competitors: Vec<Competitor>,
}

/// Result of `/v1/pricing-strategy/create`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CreateStrategyResult {
    pub strategy_id: String,
}

/// Response of `/v1/pricing-strategy/create`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CreateStrategyResponse {
    pub result: CreateStrategyResult,
}

/// Competitor-based pricing strategies.
#[derive(Debug, Clone)]
pub struct PricingStrategyApi {
    http: Arc<HttpClient>,
}

impl PricingStrategyApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists pricing strategies.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn list(
        &self,
        request: &StrategyListRequest,
        options: Option<RequestOptions>,
    ) -> Result<StrategyListResponse, OzonError> {
        self.http
            .post("/v1/pricing-strategy/list", request, options)
            .await
    }

    /// Creates a pricing strategy.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn create(
        &self,
        request: &CreateStrategyRequest,
        options: Option<RequestOptions>,
    ) -> Result<CreateStrategyResponse, OzonError> {
        self.http
            .post("/v1/pricing-strategy/create", request, options)
            .await
    }
}
