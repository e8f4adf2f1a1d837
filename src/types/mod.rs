//! Wire types shared by every API category.
//!
//! This module holds the envelope shapes the Ozon Seller API uses across
//! categories: the error body, pagination parameters and page responses,
//! and the ubiquitous `{"result": ...}` wrapper.
//!
//! # Example
//!
//! ```rust
//! use ozon_seller_api::types::{ApiErrorResponse, PaginatedResponse};
//!
//! let error: ApiErrorResponse =
//!     serde_json::from_str(r#"{"code": 5, "message": "not found"}"#).unwrap();
//! assert_eq!(error.code.as_deref(), Some("5"));
//!
//! let page: PaginatedResponse<u64> =
//!     serde_json::from_str(r#"{"items": [1, 2], "total": 10, "last_id": "abc"}"#).unwrap();
//! assert!(page.has_next_page());
//! ```

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Marker for types that can be sent as a request body.
///
/// Blanket-implemented for every serializable, thread-safe type.
pub trait BaseRequest: Serialize + Send + Sync {}

impl<T: Serialize + Send + Sync + ?Sized> BaseRequest for T {}

/// Marker for types that can be parsed from a successful response body.
///
/// Blanket-implemented for every owned deserializable type.
pub trait BaseResponse: DeserializeOwned + Send {}

impl<T: DeserializeOwned + Send> BaseResponse for T {}

/// The wire shape of a failed response body.
///
/// Ozon sends `code` either as a gRPC status number or as a string; both are
/// normalized to a string.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    #[serde(default, deserialize_with = "deserialize_code")]
    pub code: Option<String>,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
    /// Structured details, shape varies by endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

fn deserialize_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        match Option::<serde_json::Value>::deserialize(deserializer)? {
            Some(serde_json::Value::String(code)) => Some(code),
            Some(serde_json::Value::Number(code)) => Some(code.to_string()),
            _ => None,
        },
    )
}

/// Offset- or cursor-based pagination, flattened into list requests.
///
/// Offset endpoints read `limit`/`offset`; cursor endpoints read
/// `limit`/`last_id`. Unset fields are omitted from the JSON.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct PaginationParams {
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of items to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Cursor returned by the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_id: Option<String>,
}

impl PaginationParams {
    /// Offset-based page.
    #[must_use]
    pub const fn offset(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
            last_id: None,
        }
    }

    /// Cursor-based page; pass an empty cursor for the first page.
    #[must_use]
    pub fn cursor(limit: u32, last_id: impl Into<String>) -> Self {
        Self {
            limit: Some(limit),
            offset: None,
            last_id: Some(last_id.into()),
        }
    }
}

/// One page of a list response.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct PaginatedResponse<T> {
    /// Items on this page.
    #[serde(default)]
    pub items: Vec<T>,
    /// Total number of items, when the endpoint reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// Cursor for the next page, when the endpoint is cursor-based.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_id: Option<String>,
    /// Explicit "more pages" flag, when the endpoint reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_next: Option<bool>,
}

impl<T> Default for PaginatedResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: None,
            last_id: None,
            has_next: None,
        }
    }
}

impl<T> PaginatedResponse<T> {
    /// Returns `true` if another page can be requested.
    ///
    /// Uses `has_next` when present, otherwise a non-empty `last_id` cursor.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.has_next
            .unwrap_or_else(|| self.last_id.as_deref().is_some_and(|id| !id.is_empty()))
    }

    /// Cursor parameters for the page after this one, if there is one.
    #[must_use]
    pub fn next_cursor(&self, limit: u32) -> Option<PaginationParams> {
        if !self.has_next_page() {
            return None;
        }
        self.last_id
            .as_ref()
            .map(|last_id| PaginationParams::cursor(limit, last_id.clone()))
    }
}

/// The `{"result": ...}` wrapper most Ozon endpoints respond with.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ResultResponse<T> {
    /// The payload.
    pub result: T,
}

/// A request with no parameters; serializes to `{}`.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct EmptyRequest {}

/// Sort direction for list endpoints.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    /// Oldest first.
    #[default]
    Asc,
    /// Newest first.
    Desc,
}

/// An inclusive time range.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct DateRange {
    /// Range start.
    pub from: DateTime<Utc>,
    /// Range end.
    pub to: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_error_code_accepts_string_and_number() {
        let numeric: ApiErrorResponse =
            serde_json::from_value(json!({"code": 7, "message": "denied"})).unwrap();
        assert_eq!(numeric.code.as_deref(), Some("7"));

        let named: ApiErrorResponse = serde_json::from_value(
            json!({"code": "NOT_FOUND", "message": "x", "details": [{"field": "sku"}]}),
        )
        .unwrap();
        assert_eq!(named.code.as_deref(), Some("NOT_FOUND"));
        assert_eq!(named.details, Some(json!([{"field": "sku"}])));
    }

    #[test]
    fn test_error_body_without_code() {
        let error: ApiErrorResponse = serde_json::from_value(json!({"message": "oops"})).unwrap();
        assert!(error.code.is_none());
        assert_eq!(error.message, "oops");
    }

    #[test]
    fn test_pagination_params_omit_unset_fields() {
        let value = serde_json::to_value(PaginationParams::cursor(100, "")).unwrap();
        assert_eq!(value, json!({"limit": 100, "last_id": ""}));

        let value = serde_json::to_value(PaginationParams::offset(50, 100)).unwrap();
        assert_eq!(value, json!({"limit": 50, "offset": 100}));
    }

    #[test]
    fn test_has_next_page_prefers_explicit_flag() {
        let page = PaginatedResponse::<u8> {
            last_id: Some("cursor".to_string()),
            has_next: Some(false),
            ..PaginatedResponse::default()
        };
        assert!(!page.has_next_page());
        assert!(page.next_cursor(10).is_none());
    }

    #[test]
    fn test_empty_cursor_means_last_page() {
        let page = PaginatedResponse::<u8> {
            last_id: Some(String::new()),
            ..PaginatedResponse::default()
        };
        assert!(!page.has_next_page());

        let page = PaginatedResponse::<u8> {
            last_id: Some("next".to_string()),
            ..PaginatedResponse::default()
        };
        assert_eq!(page.next_cursor(10), Some(PaginationParams::cursor(10, "next")));
    }

    #[test]
    fn test_empty_request_serializes_to_object() {
        assert_eq!(serde_json::to_string(&EmptyRequest::default()).unwrap(), "{}");
    }

    #[test]
    fn test_sort_direction_and_date_range() {
        assert_eq!(serde_json::to_value(SortDirection::Desc).unwrap(), json!("DESC"));

        let range = DateRange {
            from: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            to: Utc.with_ymd_and_hms(2025, 1, 31, 23, 59, 59).unwrap(),
        };
        let value = serde_json::to_value(range).unwrap();
        assert_eq!(value["from"], json!("2025-01-01T00:00:00Z"));
    }
}
