//! API request types for article operations.

use serde::{Deserialize, Serialize};

/// Request payload for creating an article or replacing its fields.
///
/// Every field is optional at the JSON level. A missing or `null` field is
/// handed to storage as SQL `NULL` and rejected there by the column's
/// `NOT NULL` constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl ArticleRequest {
    /// Create a request with all three fields set.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
            author: Some(author.into()),
        }
    }

    /// Name of the first required column left unset, if any.
    ///
    /// Columns are checked in table order: `title`, `content`, `author`.
    pub fn missing_column(&self) -> Option<&'static str> {
        if self.title.is_none() {
            Some("title")
        } else if self.content.is_none() {
            Some("content")
        } else if self.author.is_none() {
            Some("author")
        } else {
            None
        }
    }
}
