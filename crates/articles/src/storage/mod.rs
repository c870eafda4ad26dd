//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `ArticleRepository`
//! trait defined in `articles_core::storage`. The backend is selected at
//! compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `postgres` (default): PostgreSQL backend using `sqlx`
//! - `inmemory`: process-local backend, no database required
//!
//! Build with the in-memory backend:
//! ```bash
//! cargo build -p articles --no-default-features --features inmemory
//! ```

use std::sync::Arc;

use articles_core::storage::ArticleRepository;

use crate::config::Config;

#[cfg(all(feature = "postgres", feature = "inmemory"))]
compile_error!(
    "Features 'postgres' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "postgres", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'postgres' or 'inmemory' feature. \
    Example: cargo build -p articles --features postgres"
);

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

/// The storage backend for the lifetime of the process.
pub struct Storage {
    pub repository: Arc<dyn ArticleRepository>,
    #[cfg(feature = "postgres")]
    pool: sqlx::PgPool,
}

impl Storage {
    /// Creates the PostgreSQL pool and ensures the articles table exists.
    ///
    /// A failed schema creation is logged and otherwise ignored: the service
    /// still starts and requests fail until the table becomes available.
    #[cfg(feature = "postgres")]
    pub async fn init(config: &Config) -> anyhow::Result<Self> {
        let pool = postgres::create_pool(config)?;
        let repository = postgres::PostgresRepository::new(pool.clone());

        match repository.migrate().await {
            Ok(()) => tracing::info!("The articles table was created or already exists"),
            Err(e) => tracing::error!(
                error = %e,
                "Failed to create the articles table"
            ),
        }

        Ok(Self {
            repository: Arc::new(repository),
            pool,
        })
    }

    /// Creates an empty in-memory backend.
    #[cfg(all(feature = "inmemory", not(feature = "postgres")))]
    pub async fn init(_config: &Config) -> anyhow::Result<Self> {
        tracing::warn!("Using in-memory storage, data will not be persisted");

        Ok(Self {
            repository: Arc::new(inmemory::InMemoryRepository::new()),
        })
    }

    /// Releases every pooled connection.
    pub async fn close(self) {
        #[cfg(feature = "postgres")]
        self.pool.close().await;

        tracing::info!("Storage closed");
    }
}
