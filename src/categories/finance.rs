//! Financial transactions and realization reports.
//!
//! # Example
//!
//! ```rust,ignore
//! use chrono::{TimeZone, Utc};
//! use ozon_seller_api::categories::finance::{TransactionFilter, TransactionListRequest};
//! use ozon_seller_api::types::DateRange;
//!
//! let request = TransactionListRequest {
//!     filter: TransactionFilter {
//!         date: DateRange {
//!             from: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
//!             to: Utc.with_ymd_and_hms(2025, 1, 31, 23, 59, 59).unwrap(),
//!         },
//!         ..TransactionFilter::default()
//!     },
//!     page: 1,
//!     page_size: 1000,
//! };
//! let page = client.finance().transaction_list(&request, None).await?;
//! println!("{} operations", page.result.row_count);
//! ```

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;
use crate::types::{DateRange, ResultResponse};

/// Filter for transaction endpoints.
///
/// The date range may span at most one month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionFilter {
    pub date: DateRange,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operation_type: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub posting_number: String,
    /// `all`, `orders`, `returns`, `services`, `compensation`,
    /// `transferDelivery` or `other`.
    #[serde(default = "default_transaction_type")]
    pub transaction_type: String,
}

fn default_transaction_type() -> String {
    "all".to_string()
}

impl Default for TransactionFilter {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            date: DateRange { from: now, to: now },
            operation_type: Vec::new(),
            posting_number: String::new(),
            transaction_type: default_transaction_type(),
        }
    }
}

/// Request for `/v3/finance/transaction/list`; `page` starts at 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionListRequest {
    pub filter: TransactionFilter,
    pub page: u32,
    pub page_size: u32,
}

/// A single financial operation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Operation {
    pub operation_id: u64,
    #[serde(default)]
    pub operation_type: String,
    #[serde(default)]
    pub operation_type_name: String,
    #[serde(default)]
    pub operation_date: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub accruals_for_sale: f64,
    #[serde(default)]
    pub sale_commission: f64,
    #[serde(default)]
    pub delivery_charge: f64,
    #[serde(default)]
    pub return_delivery_charge: f64,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub posting: Option<serde_json::Value>,
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
    #[serde(default)]
    pub services: Vec<serde_json::Value>,
}

/// One page of financial operations.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TransactionList {
    #[serde(default)]
    pub operations: Vec<Operation>,
    #[serde(default)]
    pub page_count: u64,
    #[serde(default)]
    pub row_count: u64,
}

/// Request for `/v3/finance/transaction/totals`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionTotalsRequest {
    pub date: DateRange,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub posting_number: String,
    pub transaction_type: String,
}

/// Sums over a period, by component.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct TransactionTotals {
    #[serde(default)]
    pub accruals_for_sale: f64,
    #[serde(default)]
    pub compensation_amount: f64,
    #[serde(default)]
    pub money_transfer: f64,
    #[serde(default)]
    pub others_amount: f64,
    #[serde(default)]
    pub processing_and_delivery: f64,
    #[serde(default)]
    pub refunds_and_cancellations: f64,
    #[serde(default)]
    pub sale_commission: f64,
    #[serde(default)]
    pub services_amount: f64,
}

/// Request for `/v2/finance/realization`, addressed by `YYYY-MM`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RealizationRequest {
    pub month: u32,
    pub year: i32,
}

/// The monthly realization report.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RealizationReport {
    #[serde(default)]
    pub header: Option<serde_json::Value>,
    #[serde(default)]
    pub rows: Vec<serde_json::Value>,
}

/// Transactions, totals and the monthly realization report.
///
/// Obtained from [`OzonClient::finance`](crate::OzonClient::finance).
#[derive(Debug, Clone)]
pub struct FinanceApi {
    http: Arc<HttpClient>,
}

impl FinanceApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists financial operations.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn transaction_list(
        &self,
        request: &TransactionListRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<TransactionList>, OzonError> {
        self.http
            .post("/v3/finance/transaction/list", request, options)
            .await
    }

    /// Returns operation totals for a period.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn transaction_totals(
        &self,
        request: &TransactionTotalsRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<TransactionTotals>, OzonError> {
        self.http
            .post("/v3/finance/transaction/totals", request, options)
            .await
    }

    /// Returns the monthly realization report.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn realization(
        &self,
        request: &RealizationRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<RealizationReport>, OzonError> {
        self.http
            .post("/v2/finance/realization", request, options)
            .await
    }
}
