use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use articles_core::article::{failure_message, ArticleOperation, ErrorResponse};
use articles_core::storage::{
    rejection_status_code, repository_error_to_status_code, RepositoryError, StatusPolicy,
};

/// A failed article request, rendered as `{"message": ...}`.
#[derive(Debug)]
pub struct ApiError {
    operation: ArticleOperation,
    status: StatusCode,
    message: String,
    cause: String,
}

impl ApiError {
    /// Failure reported by the repository.
    pub fn repository(
        operation: ArticleOperation,
        error: &RepositoryError,
        policy: StatusPolicy,
    ) -> Self {
        Self::build(
            operation,
            repository_error_to_status_code(error, policy),
            error,
        )
    }

    /// Request that could not be extracted (malformed body, non-integer id).
    pub fn rejection(
        operation: ArticleOperation,
        rejection: &dyn fmt::Display,
        policy: StatusPolicy,
    ) -> Self {
        Self::build(operation, rejection_status_code(policy), rejection)
    }

    fn build(operation: ArticleOperation, code: u16, cause: &dyn fmt::Display) -> Self {
        Self {
            operation,
            status: StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            message: failure_message(operation, cause),
            cause: cause.to_string(),
        }
    }
}

#[cfg(test)]
impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(
            operation = %self.operation,
            status = %self.status,
            error = %self.cause,
            "Article request failed"
        );

        (self.status, Json(ErrorResponse::new(self.message))).into_response()
    }
}
