use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("The {entity_type} table is empty or missing")]
    Empty { entity_type: &'static str },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::NotFound {
            entity_type: "Article",
            id: "12".to_string(),
        };
        assert_eq!(error.to_string(), "Article not found: 12");
    }

    #[test]
    fn test_repository_error_empty_display() {
        let error = RepositoryError::Empty {
            entity_type: "articles",
        };
        assert_eq!(error.to_string(), "The articles table is empty or missing");
    }

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("pool timed out".to_string());
        assert_eq!(error.to_string(), "Connection failed: pool timed out");
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("relation \"articles\" does not exist".to_string());
        assert_eq!(
            error.to_string(),
            "Query failed: relation \"articles\" does not exist"
        );
    }

    #[test]
    fn test_repository_error_serialization_display() {
        let error = RepositoryError::Serialization("column title is not TEXT".to_string());
        assert_eq!(
            error.to_string(),
            "Serialization error: column title is not TEXT"
        );
    }

    #[test]
    fn test_repository_error_invalid_data_display() {
        let error = RepositoryError::InvalidData("null value in column \"author\"".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid data: null value in column \"author\""
        );
    }
}
