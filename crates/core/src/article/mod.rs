mod messages;
mod operations;
mod requests;
mod responses;
mod types;

pub use messages::{failure_message, ArticleOperation, DELETE_SUCCESS};
pub use operations::{article_not_found, require_non_empty, ARTICLES_TABLE, ARTICLE_ENTITY};
pub use requests::ArticleRequest;
pub use responses::{DeletedArticleResponse, ErrorResponse};
pub use types::Article;
