//! Brands that require certification.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;
use crate::types::ResultResponse;

/// Request for `/v1/brand/company-certification/list`; `page` starts at 1.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BrandCertificationListRequest {
    pub page: u32,
    pub page_size: u32,
}

/// A brand that requires a certificate.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BrandCertification {
    pub brand_id: u64,
    #[serde(default)]
    pub brand_name: String,
    #[serde(default)]
    pub has_certificate: bool,
}

/// One page of brands requiring certification.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BrandCertificationList {
    #[serde(default)]
    pub brand_certification: Vec<BrandCertification>,
    #[serde(default)]
    pub total: u64,
}

/// Brand certification requirements.
#[derive(Debug, Clone)]
pub struct BrandApi {
    http: Arc<HttpClient>,
}

impl BrandApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists brands whose products need a certificate.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn certification_list(
        &self,
        request: &BrandCertificationListRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<BrandCertificationList>, OzonError> {
        self.http
            .post("/v1/brand/company-certification/list", request, options)
            .await
    }
}
