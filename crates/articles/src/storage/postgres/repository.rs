//! PostgreSQL repository implementation.
//!
//! Implements `ArticleRepository` from `articles_core::storage` using `sqlx`.

use async_trait::async_trait;
use sqlx::PgPool;

use articles_core::article::{article_not_found, require_non_empty, Article, ArticleRequest};
use articles_core::storage::{ArticleRepository, Result};

use super::conversions::{row_to_article, ArticleRow};
use super::error::map_sqlx_error;
use super::schema;

/// PostgreSQL-based repository implementation.
///
/// Holds a handle to the shared pool; each operation checks out a connection
/// for the duration of a single statement.
#[derive(Debug, Clone)]
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Creates a repository on top of an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the articles table if it does not exist.
    ///
    /// Never alters an existing table.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(schema::CREATE_ARTICLES_TABLE)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}

#[async_trait]
impl ArticleRepository for PostgresRepository {
    async fn create_article(&self, request: &ArticleRequest) -> Result<Article> {
        sqlx::query_as::<_, ArticleRow>(schema::INSERT_ARTICLE)
            .bind(request.title.as_deref())
            .bind(request.content.as_deref())
            .bind(request.author.as_deref())
            .fetch_one(&self.pool)
            .await
            .map(row_to_article)
            .map_err(map_sqlx_error)
    }

    async fn list_articles(&self) -> Result<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(schema::SELECT_ARTICLES)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        require_non_empty(rows.into_iter().map(row_to_article).collect())
    }

    async fn update_article(&self, id: i32, request: &ArticleRequest) -> Result<Article> {
        sqlx::query_as::<_, ArticleRow>(schema::UPDATE_ARTICLE)
            .bind(request.title.as_deref())
            .bind(request.content.as_deref())
            .bind(request.author.as_deref())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .map(row_to_article)
            .ok_or_else(|| article_not_found(id))
    }

    async fn delete_article(&self, id: i32) -> Result<Article> {
        sqlx::query_as::<_, ArticleRow>(schema::DELETE_ARTICLE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .map(row_to_article)
            .ok_or_else(|| article_not_found(id))
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query(schema::PING)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}
