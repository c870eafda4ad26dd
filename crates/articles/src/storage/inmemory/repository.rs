//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use articles_core::article::{article_not_found, require_non_empty, Article, ArticleRequest};
use articles_core::storage::{ArticleRepository, RepositoryError, Result};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i32, Article>,
    last_id: i32,
}

/// In-memory storage backend.
///
/// Mirrors the PostgreSQL table: ids come from a monotonically increasing
/// counter, rows are kept ordered by id, and unset fields are rejected like a
/// `NOT NULL` column would. Data is lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Takes the three fields out of a request, failing on the first unset one.
fn required_fields(request: &ArticleRequest) -> Result<(String, String, String)> {
    match (&request.title, &request.content, &request.author) {
        (Some(title), Some(content), Some(author)) => {
            Ok((title.clone(), content.clone(), author.clone()))
        }
        _ => {
            let column = request.missing_column().unwrap_or("unknown");
            Err(RepositoryError::InvalidData(format!(
                "null value in column \"{column}\" of relation \"articles\" violates not-null constraint"
            )))
        }
    }
}

#[async_trait]
impl ArticleRepository for InMemoryRepository {
    async fn create_article(&self, request: &ArticleRequest) -> Result<Article> {
        let (title, content, author) = required_fields(request)?;

        let mut table = self.table.write().await;
        let id = table.last_id.checked_add(1).ok_or_else(|| {
            RepositoryError::QueryFailed(
                "nextval: reached maximum value of sequence \"articles_id_seq\"".to_string(),
            )
        })?;
        table.last_id = id;
        let article = Article::new(id, title, content, author);
        table.rows.insert(article.id, article.clone());

        Ok(article)
    }

    async fn list_articles(&self) -> Result<Vec<Article>> {
        let table = self.table.read().await;
        require_non_empty(table.rows.values().cloned().collect())
    }

    async fn update_article(&self, id: i32, request: &ArticleRequest) -> Result<Article> {
        let mut table = self.table.write().await;
        // An UPDATE matching no row never evaluates the column constraints.
        let article = table.rows.get_mut(&id).ok_or_else(|| article_not_found(id))?;
        let (title, content, author) = required_fields(request)?;

        article.title = title;
        article.content = content;
        article.author = author;

        Ok(article.clone())
    }

    async fn delete_article(&self, id: i32) -> Result<Article> {
        let mut table = self.table.write().await;
        table.rows.remove(&id).ok_or_else(|| article_not_found(id))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str) -> ArticleRequest {
        ArticleRequest::new(title, "content", "author")
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryRepository::new();

        let first = repo.create_article(&request("one")).await.unwrap();
        let second = repo.create_article(&request("two")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.title, "two");
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryRepository::new();

        let first = repo.create_article(&request("one")).await.unwrap();
        repo.delete_article(first.id).await.unwrap();
        let second = repo.create_article(&request("two")).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_create_fails_when_ids_are_exhausted() {
        let repo = InMemoryRepository::new();
        repo.table.write().await.last_id = i32::MAX;

        let result = repo.create_article(&request("overflow")).await;

        assert!(matches!(result, Err(RepositoryError::QueryFailed(_))));
        assert!(repo.list_articles().await.is_err());
    }

    #[tokio::test]
    async fn test_create_rejects_missing_field() {
        let repo = InMemoryRepository::new();
        let partial = ArticleRequest {
            author: None,
            ..request("one")
        };

        let result = repo.create_article(&partial).await;

        match result {
            Err(RepositoryError::InvalidData(message)) => assert!(message.contains("author")),
            other => panic!("Expected InvalidData, got {other:?}"),
        }
        assert!(repo.list_articles().await.is_err());
    }

    #[tokio::test]
    async fn test_list_empty_table_is_an_error() {
        let repo = InMemoryRepository::new();

        let result = repo.list_articles().await;

        assert!(matches!(result, Err(RepositoryError::Empty { .. })));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let repo = InMemoryRepository::new();
        for title in ["c", "a", "b"] {
            repo.create_article(&request(title)).await.unwrap();
        }

        let ids: Vec<i32> = repo
            .list_articles()
            .await
            .unwrap()
            .iter()
            .map(|a| a.id)
            .collect();

        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_id() {
        let repo = InMemoryRepository::new();
        let created = repo.create_article(&request("old")).await.unwrap();

        let updated = repo
            .update_article(created.id, &ArticleRequest::new("new", "body", "someone"))
            .await
            .unwrap();

        assert_eq!(updated, Article::new(created.id, "new", "body", "someone"));
        assert_eq!(repo.list_articles().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let repo = InMemoryRepository::new();

        let result = repo.update_article(9, &request("x")).await;

        assert_eq!(result, Err(article_not_found(9)));
    }

    #[tokio::test]
    async fn test_update_missing_id_with_null_field_is_still_not_found() {
        let repo = InMemoryRepository::new();

        let result = repo.update_article(9, &ArticleRequest::default()).await;

        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_with_null_field_leaves_row_untouched() {
        let repo = InMemoryRepository::new();
        let created = repo.create_article(&request("keep")).await.unwrap();
        let partial = ArticleRequest {
            content: None,
            ..request("changed")
        };

        let result = repo.update_article(created.id, &partial).await;

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
        assert_eq!(repo.list_articles().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_delete_returns_prior_values() {
        let repo = InMemoryRepository::new();
        let created = repo.create_article(&request("gone")).await.unwrap();

        let deleted = repo.delete_article(created.id).await.unwrap();

        assert_eq!(deleted, created);
        assert_eq!(
            repo.delete_article(created.id).await,
            Err(article_not_found(created.id))
        );
    }
}
