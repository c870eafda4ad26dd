//! API response bodies that are not a bare [`Article`] or list of articles.

use serde::{Deserialize, Serialize};

use super::messages::DELETE_SUCCESS;
use super::types::Article;

/// Body returned by `DELETE /articles/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedArticleResponse {
    pub message: String,
    pub deleted_article: Article,
}

impl DeletedArticleResponse {
    pub fn new(deleted_article: Article) -> Self {
        Self {
            message: DELETE_SUCCESS.to_string(),
            deleted_article,
        }
    }
}

/// Body returned by every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
