//! Asynchronous report generation.
//!
//! Reports are created with one call and then polled with
//! [`ReportApi::info`] until their status is `success`, at which point the
//! `file` field holds a download link.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;
use crate::types::ResultResponse;

/// Request for `/v1/report/list`; `page` starts at 1.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ReportListRequest {
    pub page: u32,
    pub page_size: u32,
    /// `ALL`, `SELLER_PRODUCTS`, `SELLER_POSTINGS` and so on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_type: Option<String>,
}

/// A generated or pending report.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Report {
    pub code: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub report_type: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// One page of generated reports.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ReportList {
    #[serde(default)]
    pub reports: Vec<Report>,
    #[serde(default)]
    pub total: u64,
}

/// Request for `/v1/report/info`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ReportInfoRequest {
    pub code: String,
}

/// Request for `/v1/report/products/create`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductsReportRequest {
    /// `DEFAULT`, `RU` or `EN`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub offer_id: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sku: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

/// Code of a report that is being generated.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ReportCode {
    pub code: String,
}

/// Asynchronously generated reports.
#[derive(Debug, Clone)]
pub struct ReportApi {
    http: Arc<HttpClient>,
}

impl ReportApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists reports.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn list(
        &self,
        request: &ReportListRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<ReportList>, OzonError> {
        self.http.post("/v1/report/list", request, options).await
    }

    /// Returns the status of one report.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn info(
        &self,
        request: &ReportInfoRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<Report>, OzonError> {
        self.http.post("/v1/report/info", request, options).await
    }

    /// Starts generating a products report.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn create_products_report(
        &self,
        request: &ProductsReportRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<ReportCode>, OzonError> {
        self.http
            .post("/v1/report/products/create", request, options)
            .await
    }
}
