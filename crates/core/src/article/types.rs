use serde::{Deserialize, Serialize};

/// A persisted article, one row of the `articles` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Assigned by storage on insert, never changed afterwards.
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: String,
}

impl Article {
    /// Creates an article with an already-assigned id.
    pub fn new(
        id: i32,
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            author: author.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_serializes_flat_record() {
        let article = Article::new(1, "A", "B", "C");

        let json = serde_json::to_value(&article).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": 1, "title": "A", "content": "B", "author": "C"})
        );
    }
}
