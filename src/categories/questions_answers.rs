//! Buyer questions about products and the seller's answers.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestOptions};
use crate::error::OzonError;

/// Filter for [`QuestionListRequest`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<DateTime<Utc>>,
    /// `NEW`, `ALL`, `VIEWED`, `PROCESSED` or `UNPROCESSED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Request for `/v1/question/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct QuestionListRequest {
    pub filter: QuestionFilter,
    pub last_id: String,
}

/// A buyer question about a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    #[serde(default)]
    pub sku: u64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub answers_count: u64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub product_url: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// Response of `/v1/question/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct QuestionListResponse {
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub last_id: String,
}

/// Request for `/v1/question/answer/create`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CreateAnswerRequest {
    pub question_id: String,
    pub sku: u64,
    pub text: String,
}

/// Response of `/v1/question/answer/create`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CreateAnswerResponse {
    pub answer_id: String,
}

/// Buyer questions about products and seller answers.
#[derive(Debug, Clone)]
pub struct QuestionsAnswersApi {
    http: Arc<HttpClient>,
}

impl QuestionsAnswersApi {
    pub(crate) const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists buyer questions.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn list(
        &self,
        request: &QuestionListRequest,
        options: Option<RequestOptions>,
    ) -> Result<QuestionListResponse, OzonError> {
        self.http.post("/v1/question/list", request, options).await
    }

    /// Answers a question.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError`] if the request fails.
    pub async fn create_answer(
        &self,
        request: &CreateAnswerRequest,
        options: Option<RequestOptions>,
    ) -> Result<CreateAnswerResponse, OzonError> {
        self.http
            .post("/v1/question/answer/create", request, options)
            .await
    }
}
