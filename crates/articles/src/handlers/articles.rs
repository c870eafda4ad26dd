//! Article CRUD handlers.
//!
//! Each handler performs exactly one repository call. Extraction failures
//! and repository errors both end up as an [`ApiError`].

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use articles_core::article::{Article, ArticleOperation, ArticleRequest, DeletedArticleResponse};

use crate::{handlers::ApiError, state::AppState};

/// Create a new article (POST /articles).
pub async fn create_article(
    State(state): State<AppState>,
    payload: Result<Json<ArticleRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Article>), ApiError> {
    let operation = ArticleOperation::Create;
    let Json(request) =
        payload.map_err(|e| ApiError::rejection(operation, &e, state.status_policy))?;

    let article = state
        .article_repo
        .create_article(&request)
        .await
        .map_err(|e| ApiError::repository(operation, &e, state.status_policy))?;

    tracing::info!(article_id = article.id, title = %article.title, "Created new article");

    Ok((StatusCode::CREATED, Json(article)))
}

/// List all articles ordered by id (GET /articles).
pub async fn list_articles(
    State(state): State<AppState>,
) -> Result<Json<Vec<Article>>, ApiError> {
    let articles = state
        .article_repo
        .list_articles()
        .await
        .map_err(|e| ApiError::repository(ArticleOperation::List, &e, state.status_policy))?;

    Ok(Json(articles))
}

/// Replace the fields of an article (PATCH /articles/{id}).
pub async fn update_article(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ArticleRequest>, JsonRejection>,
) -> Result<Json<Article>, ApiError> {
    let operation = ArticleOperation::Update;
    let Path(id) = id.map_err(|e| ApiError::rejection(operation, &e, state.status_policy))?;
    let Json(request) =
        payload.map_err(|e| ApiError::rejection(operation, &e, state.status_policy))?;

    let article = state
        .article_repo
        .update_article(id, &request)
        .await
        .map_err(|e| ApiError::repository(operation, &e, state.status_policy))?;

    tracing::info!(article_id = id, "Updated article");

    Ok(Json(article))
}

/// Delete an article (DELETE /articles/{id}).
pub async fn delete_article(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<DeletedArticleResponse>, ApiError> {
    let operation = ArticleOperation::Delete;
    let Path(id) = id.map_err(|e| ApiError::rejection(operation, &e, state.status_policy))?;

    let article = state
        .article_repo
        .delete_article(id)
        .await
        .map_err(|e| ApiError::repository(operation, &e, state.status_policy))?;

    tracing::info!(article_id = id, "Deleted article");

    Ok(Json(DeletedArticleResponse::new(article)))
}
