//! Application state shared by every request handler.

use std::sync::Arc;

use articles_core::storage::{ArticleRepository, StatusPolicy};

/// Shared application state.
///
/// Cloned for each request; holds no mutable data of its own.
#[derive(Clone)]
pub struct AppState {
    /// Article repository backing every endpoint.
    pub article_repo: Arc<dyn ArticleRepository>,
    /// How failures are turned into HTTP status codes.
    pub status_policy: StatusPolicy,
}

impl AppState {
    /// Creates a new AppState with the given repository and the default status policy.
    pub fn new(article_repo: Arc<dyn ArticleRepository>) -> Self {
        Self {
            article_repo,
            status_policy: StatusPolicy::default(),
        }
    }

    /// Sets the status policy.
    pub fn with_status_policy(mut self, status_policy: StatusPolicy) -> Self {
        self.status_policy = status_policy;
        self
    }
}

#[cfg(test)]
impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(crate::storage::inmemory::InMemoryRepository::new()))
    }
}
