//! Product exemplar marking (Chestny ZNAK codes, GTD and RNPT numbers).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;

/// Marking data for one physical item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Exemplar {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exemplar_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rnpt: Option<String>,
    #[serde(default)]
    pub is_gtd_absent: bool,
    #[serde(default)]
    pub is_rnpt_absent: bool,
    /// Marking codes, e.g. `{"mark": "...", "mark_type": "mandatory_mark"}`.
    #[serde(default)]
    pub marks: Vec<serde_json::Value>,
}

/// Labelling data for one product of a posting.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ExemplarProduct {
    pub product_id: u64,
    pub exemplars: Vec<Exemplar>,
}

/// Request for `/v4/fbs/posting/product/exemplar/set`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SetExemplarsRequest {
    pub posting_number: String,
    pub products: Vec<ExemplarProduct>,
}

/// Request for `/v4/fbs/posting/product/exemplar/status`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ExemplarStatusRequest {
    pub posting_number: String,
}

/// Validation status of the exemplars of a posting.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ExemplarStatusResponse {
    pub posting_number: String,
    /// `ship_available`, `ship_not_available` or `validation_in_process`.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub products: Vec<serde_json::Value>,
}

/// Labelling codes (exemplars) for FBS and rFBS postings.
#[derive(Debug, Clone)]
pub struct FbsRfbsMarksApi {
    http: Arc<HttpClient>,
}

impl FbsRfbsMarksApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Submits exemplar marking data for validation.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn set_exemplars(
        &self,
        request: &SetExemplarsRequest,
        options: Option<RequestOptions>,
    ) -> Result<serde_json::Value, OzonError> {
        self.http
            .post("/v4/fbs/posting/product/exemplar/set", request, options)
            .await
    }

    /// Returns the validation status of submitted exemplars.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn exemplar_status(
        &self,
        request: &ExemplarStatusRequest,
        options: Option<RequestOptions>,
    ) -> Result<ExemplarStatusResponse, OzonError> {
        self.http
            .post("/v4/fbs/posting/product/exemplar/status", request, options)
            .await
    }
}
