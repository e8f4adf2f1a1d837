//! Description category tree and attribute dictionaries.
//!
//! Every product is created inside a description category and a type; the
//! attributes that must be filled in depend on that pair.
//!
//! # Example
//!
//! ```rust,ignore
//! use ozon_seller_api::categories::category::{CategoryTreeRequest, Language};
//!
//! let tree = client
//!     .category()
//!     .tree(&CategoryTreeRequest { language: Language::En }, None)
//!     .await?;
//! for node in &tree.result {
//!     println!("{}", node.category_name.as_deref().unwrap_or_default());
//! }
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;
use crate::types::ResultResponse;

/// Response language for dictionary endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Language {
    /// Russian unless the account is configured otherwise.
    #[default]
    Default,
    /// Russian.
    Ru,
    /// English.
    En,
    /// Turkish.
    Tr,
    /// Simplified Chinese.
    ZhHans,
}

/// Request for `/v1/description-category/tree`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CategoryTreeRequest {
    /// Language of the category names.
    pub language: Language,
}

/// A node of the category tree.
///
/// Leaves carry a `type_id` instead of a `description_category_id`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CategoryNode {
    /// Category identifier.
    #[serde(default)]
    pub description_category_id: Option<u64>,
    /// Category name.
    #[serde(default)]
    pub category_name: Option<String>,
    /// Product type identifier (leaves only).
    #[serde(default)]
    pub type_id: Option<u64>,
    /// Product type name (leaves only).
    #[serde(default)]
    pub type_name: Option<String>,
    /// `true` if products can no longer be created here.
    #[serde(default)]
    pub disabled: bool,
    /// Child nodes.
    #[serde(default)]
    pub children: Vec<CategoryNode>,
}

/// Request for `/v1/description-category/attribute`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CategoryAttributeRequest {
    pub description_category_id: u64,
    pub type_id: u64,
    pub language: Language,
}

/// An attribute of a category and type.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CategoryAttribute {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub value_type: String,
    #[serde(default)]
    pub is_collection: bool,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub dictionary_id: u64,
    #[serde(default)]
    pub group_id: u64,
    #[serde(default)]
    pub group_name: String,
}

/// Request for `/v1/description-category/attribute/values`.
///
/// Dictionary values are paged with `last_value_id`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AttributeValuesRequest {
    pub attribute_id: u64,
    pub description_category_id: u64,
    pub type_id: u64,
    pub language: Language,
    /// Id of the last value on the previous page, `0` for the first page.
    pub last_value_id: u64,
    pub limit: u32,
}

/// A dictionary value of an attribute.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AttributeValue {
    pub id: u64,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub info: String,
    #[serde(default)]
    pub picture: String,
}

/// Response of `/v1/description-category/attribute/values`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AttributeValuesResponse {
    #[serde(default)]
    pub result: Vec<AttributeValue>,
    #[serde(default)]
    pub has_next: bool,
}

/// Category tree and attribute dictionary endpoints.
#[derive(Debug, Clone)]
pub struct CategoryApi {
    http: Arc<HttpClient>,
}

impl CategoryApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Returns the full description category tree.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn tree(
        &self,
        request: &CategoryTreeRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<Vec<CategoryNode>>, OzonError> {
        self.http
            .post("/v1/description-category/tree", request, options)
            .await
    }

    /// Returns the attributes of a category and type.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn attributes(
        &self,
        request: &CategoryAttributeRequest,
        options: Option<RequestOptions>,
    ) -> Result<ResultResponse<Vec<CategoryAttribute>>, OzonError> {
        self.http
            .post("/v1/description-category/attribute", request, options)
            .await
    }

    /// Returns one page of an attribute's dictionary values.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn attribute_values(
        &self,
        request: &AttributeValuesRequest,
        options: Option<RequestOptions>,
    ) -> Result<AttributeValuesResponse, OzonError> {
        self.http
            .post("/v1/description-category/attribute/values", request, options)
            .await
    }
}
