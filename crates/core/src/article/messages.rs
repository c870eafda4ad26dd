//! Human-readable messages returned to API clients.

use std::fmt;

/// Message sent alongside a successfully deleted article.
pub const DELETE_SUCCESS: &str = "Article deleted successfully.";

/// The article operation a request was performing when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleOperation {
    Create,
    List,
    Update,
    Delete,
}

impl fmt::Display for ArticleOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArticleOperation::Create => "create",
            ArticleOperation::List => "list",
            ArticleOperation::Update => "update",
            ArticleOperation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Builds the client-facing message for a failed operation.
///
/// Creation failures never expose the underlying cause; the other operations
/// append it.
pub fn failure_message(operation: ArticleOperation, cause: &dyn fmt::Display) -> String {
    match operation {
        ArticleOperation::Create => "Error while creating the article.".to_string(),
        ArticleOperation::List => {
            format!("An error occurred while retrieving the articles: {cause}.")
        }
        ArticleOperation::Update => {
            format!("An error occurred while updating the article: {cause}")
        }
        ArticleOperation::Delete => {
            format!("An error occurred while deleting the article: {cause}")
        }
    }
}
