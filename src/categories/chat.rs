//! Buyer and support chats.
//!
//! # Example
//!
//! ```rust,ignore
//! use ozon_seller_api::categories::chat::SendMessageRequest;
//!
//! client
//!     .chat()
//!     .send_message(
//!         &SendMessageRequest {
//!             chat_id: chat_id.clone(),
//!             text: "Your order has shipped".to_string(),
//!         },
//!         None,
//!     )
//!     .await?;
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;
use crate::types::SortDirection;

/// Filter for [`ChatListRequest`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ChatFilter {
    /// `All`, `Opened` or `Closed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unread_only: Option<bool>,
}

/// Request for `/v2/chat/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ChatListRequest {
    pub filter: ChatFilter,
    pub limit: u32,
    pub offset: u32,
}

/// Chat identity and status.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ChatInfo {
    pub chat_id: String,
    #[serde(default)]
    pub chat_status: String,
    #[serde(default)]
    pub chat_type: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A chat with its unread counters.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ChatSummary {
    pub chat: ChatInfo,
    #[serde(default)]
    pub first_unread_message_id: u64,
    #[serde(default)]
    pub last_message_id: u64,
    #[serde(default)]
    pub unread_count: u64,
}

/// Response of `/v2/chat/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ChatListResponse {
    #[serde(default)]
    pub chats: Vec<ChatSummary>,
    #[serde(default)]
    pub total_chats_count: u64,
    #[serde(default)]
    pub total_unread_count: u64,
}

/// Request for `/v2/chat/history`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ChatHistoryRequest {
    pub chat_id: String,
    pub direction: SortDirection,
    /// Message to start from; omitted for the newest messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_message_id: Option<u64>,
    pub limit: u32,
}

/// One message in a chat history.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ChatMessage {
    pub message_id: u64,
    #[serde(default)]
    pub user: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub data: Vec<String>,
}

/// Response of `/v2/chat/history`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ChatHistoryResponse {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub has_next: bool,
}

/// Request for `/v1/chat/send/message`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SendMessageRequest {
    pub chat_id: String,
    /// Plain text, 1 to 1000 characters.
    pub text: String,
}

/// Response of `/v1/chat/send/message`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SendMessageResponse {
    /// `"success"` when the message was accepted.
    pub result: String,
}

/// Seller-buyer chats.
///
/// Obtained from [`OzonClient::chat`](crate::OzonClient::chat).
#[derive(Debug, Clone)]
pub struct ChatApi {
    http: Arc<HttpClient>,
}

impl ChatApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists chats.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn list(
        &self,
        request: &ChatListRequest,
        options: Option<RequestOptions>,
    ) -> Result<ChatListResponse, OzonError> {
        self.http.post("/v2/chat/list", request, options).await
    }

    /// Returns the message history of a chat.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn history(
        &self,
        request: &ChatHistoryRequest,
        options: Option<RequestOptions>,
    ) -> Result<ChatHistoryResponse, OzonError> {
        self.http.post("/v2/chat/history", request, options).await
    }

    /// Sends a text message.
    ///
    /// Retried sends carry the same idempotency key, so a message is not
    /// delivered twice when only the response was lost.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn send_message(
        &self,
        request: &SendMessageRequest,
        options: Option<RequestOptions>,
    ) -> Result<SendMessageResponse, OzonError> {
        self.http
            .post("/v1/chat/send/message", request, options)
            .await
    }
}
