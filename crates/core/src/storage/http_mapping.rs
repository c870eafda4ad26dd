//! Pure functions for mapping repository errors to HTTP status codes.

use std::{fmt, str::FromStr};

use thiserror::Error;

use super::RepositoryError;

/// How failures are translated into HTTP status codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Every failure is reported as 500 Internal Server Error.
    #[default]
    Uniform,
    /// Failures get a status code matching their category.
    Distinct,
}

/// Returned when a status policy name cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown status policy '{0}', expected 'uniform' or 'distinct'")]
pub struct StatusPolicyError(String);

impl FromStr for StatusPolicy {
    type Err = StatusPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" => Ok(StatusPolicy::Uniform),
            "distinct" => Ok(StatusPolicy::Distinct),
            _ => Err(StatusPolicyError(s.to_string())),
        }
    }
}

impl fmt::Display for StatusPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusPolicy::Uniform => f.write_str("uniform"),
            StatusPolicy::Distinct => f.write_str("distinct"),
        }
    }
}

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// Under [`StatusPolicy::Uniform`] the answer is always 500. Under
/// [`StatusPolicy::Distinct`]:
///
/// - `NotFound` -> 404 (Not Found)
/// - `Empty` -> 404 (Not Found)
/// - `InvalidData` -> 400 (Bad Request)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `Serialization` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use articles_core::storage::{repository_error_to_status_code, RepositoryError, StatusPolicy};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "Article",
///     id: "1".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error, StatusPolicy::Uniform), 500);
/// assert_eq!(repository_error_to_status_code(&error, StatusPolicy::Distinct), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError, policy: StatusPolicy) -> u16 {
    if policy == StatusPolicy::Uniform {
        return 500;
    }

    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::Empty { .. } => 404,
        RepositoryError::InvalidData(_) => 400,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::Serialization(_) => 500,
    }
}

/// Status code for a request that could not be parsed (bad JSON body, bad path id).
pub fn rejection_status_code(policy: StatusPolicy) -> u16 {
    match policy {
        StatusPolicy::Uniform => 500,
        StatusPolicy::Distinct => 400,
    }
}
