//! Product quality certificates.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;
use crate::types::ResultResponse;

/// A certificate document type.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CertificateType {
    pub code: String,
    #[serde(default)]
    pub name: String,
}

/// Request for `/v1/product/certificate/list`; `page` starts at 1.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CertificateListRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_code: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

/// A certificate uploaded by the seller.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Certificate {
    pub certificate_id: u64,
    #[serde(default)]
    pub certificate_number: String,
    #[serde(default)]
    pub certificate_name: String,
    #[serde(default)]
    pub type_code: String,
    #[serde(default)]
    pub status_code: String,
    #[serde(default)]
    pub accordance_type_code: String,
    #[serde(default)]
    pub issue_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expire_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub products_count: u64,
}

/// One page of certificates.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CertificateList {
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    #[serde(default)]
    pub page_count: u64,
}

/// Product certificates and the certificate types Ozon accepts.
#[derive(Debug, Clone)]
pub struct CertificationApi {
    http: Arc<HttpClient>,
}

impl CertificationApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Returns the certificate type dictionary.
    ///
    /// This is one of the few GET endpoints; no body is sent.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn types(
        &self,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<Vec<CertificateType>>, OzonError> {
        self.http.get("/v1/product/certificate/types", options).await
    }

    /// Lists uploaded certificates.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn list(
        &self,
        request: &CertificateListRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<CertificateList>, OzonError> {
        self.http
            .post("/v1/product/certificate/list", request, options)
            .await
    }
}
