//! Pure rules applied to repository results, shared by every backend.

use crate::storage::{RepositoryError, Result};

use super::types::Article;

/// Table name reported when a listing comes back empty.
pub const ARTICLES_TABLE: &str = "articles";

/// Entity name used in not-found errors.
pub const ARTICLE_ENTITY: &str = "Article";

/// Rejects an empty listing.
///
/// A listing with zero rows is reported as [`RepositoryError::Empty`] instead
/// of an empty success, so clients cannot tell an empty table from a missing
/// one.
pub fn require_non_empty(articles: Vec<Article>) -> Result<Vec<Article>> {
    if articles.is_empty() {
        return Err(RepositoryError::Empty {
            entity_type: ARTICLES_TABLE,
        });
    }
    Ok(articles)
}

/// Not-found error for the article with the given id.
pub fn article_not_found(id: i32) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: ARTICLE_ENTITY,
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_listing_is_an_error() {
        let result = require_non_empty(Vec::new());

        assert_eq!(
            result,
            Err(RepositoryError::Empty {
                entity_type: "articles"
            })
        );
    }

    #[test]
    fn test_non_empty_listing_passes_through() {
        let articles = vec![Article::new(1, "A", "B", "C"), Article::new(2, "D", "E", "F")];

        let result = require_non_empty(articles.clone()).unwrap();

        assert_eq!(result, articles);
    }

    #[test]
    fn test_article_not_found_carries_id() {
        let error = article_not_found(42);

        assert_eq!(error.to_string(), "Article not found: 42");
    }
}
