//! PostgreSQL storage backend implementation.
//!
//! Uses a lazily connected `sqlx` pool shared by every request.

mod conversions;
mod error;
mod pool;
mod repository;
mod schema;

pub use pool::create_pool;
pub use repository::PostgresRepository;
