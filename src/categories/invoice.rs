//! Customs invoices for cross-border postings.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;
use crate::types::ResultResponse;

/// Request for `/v2/invoice/create-or-update`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InvoiceUpsertRequest {
    pub posting_number: String,
    pub date: Option<DateTime<Utc>>,
    pub number: String,
    /// Link to the uploaded invoice file.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hs_codes: Option<Vec<serde_json::Value>>,
}

/// Request for `/v2/invoice/get` and `/v1/invoice/delete`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InvoicePostingRequest {
    pub posting_number: String,
}

/// A customs invoice attached to a posting.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Invoice {
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub file_url: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub hs_codes: Vec<serde_json::Value>,
}

/// Customs invoices for cross-border postings.
#[derive(Debug, Clone)]
pub struct InvoiceApi {
    http: Arc<HttpClient>,
}

impl InvoiceApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Creates or replaces the invoice of a posting.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn create_or_update(
        &self,
        request: &InvoiceUpsertRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<bool>, OzonError> {
        self.http
            .post("/v2/invoice/create-or-update", request, options)
            .await
    }

    /// Returns the invoice of a posting.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn get(
        &self,
        request: &InvoicePostingRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<Invoice>, OzonError> {
        self.http.post("/v2/invoice/get", request, options).await
    }

    /// Deletes the invoice of a posting.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn delete(
        &self,
        request: &InvoicePostingRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<bool>, OzonError> {
        self.http.post("/v1/invoice/delete", request, options).await
    }
}
