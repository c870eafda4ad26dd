use async_trait::async_trait;

use crate::article::{Article, ArticleRequest};

use super::Result;

/// Repository for article operations.
///
/// Each method maps to exactly one statement against storage.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Inserts a new article and returns it with its assigned id.
    async fn create_article(&self, request: &ArticleRequest) -> Result<Article>;

    /// Returns every article ordered by ascending id.
    ///
    /// Fails with [`RepositoryError::Empty`](super::RepositoryError::Empty)
    /// when there are none.
    async fn list_articles(&self) -> Result<Vec<Article>>;

    /// Replaces title, content and author of an existing article.
    async fn update_article(&self, id: i32, request: &ArticleRequest) -> Result<Article>;

    /// Deletes an article, returning the values it had.
    async fn delete_article(&self, id: i32) -> Result<Article>;

    /// Checks that storage is reachable.
    async fn ping(&self) -> Result<()>;
}
