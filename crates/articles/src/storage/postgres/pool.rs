//! Connection pool construction.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use crate::config::Config;

/// Builds connection options from the configuration.
///
/// `DATABASE_URL` wins when set; otherwise the discrete `DB_*` settings are used.
pub fn connect_options(config: &Config) -> Result<PgConnectOptions, sqlx::Error> {
    if let Some(url) = &config.database_url {
        return PgConnectOptions::from_str(url);
    }

    Ok(PgConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .username(&config.db_user)
        .password(&config.db_password)
        .database(&config.db_database))
}

/// Creates the PostgreSQL pool without opening any connection.
///
/// Connections are established on first use, so an unreachable database at
/// startup turns into per-request errors instead of a failed boot.
pub fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    let options = connect_options(config)?;

    tracing::debug!(
        max_connections = config.max_connections,
        acquire_timeout_secs = config.acquire_timeout_secs,
        "Creating database pool"
    );

    Ok(PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect_lazy_with(options))
}
