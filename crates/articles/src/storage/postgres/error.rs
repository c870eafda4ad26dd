//! PostgreSQL error mapping.
//!
//! Maps `sqlx::Error` to `RepositoryError` from `articles_core::storage`.

use articles_core::storage::RepositoryError;
use sqlx::error::ErrorKind;

/// Maps a sqlx error to a RepositoryError.
///
/// # Error Mapping
///
/// - `NOT NULL` / `CHECK` violations → `RepositoryError::InvalidData`
/// - Other database errors → `RepositoryError::QueryFailed`
/// - Pool timeout/closed, I/O, TLS → `RepositoryError::ConnectionFailed`
/// - Column decoding errors → `RepositoryError::Serialization`
/// - All other errors → `RepositoryError::QueryFailed`
pub fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                RepositoryError::InvalidData(db_err.message().to_string())
            }
            _ => RepositoryError::QueryFailed(db_err.message().to_string()),
        },

        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => RepositoryError::ConnectionFailed(err.to_string()),

        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::Decode(_) => RepositoryError::Serialization(err.to_string()),

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}
