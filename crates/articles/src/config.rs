use std::{env, fmt, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Clone)]
#[cfg_attr(not(feature = "postgres"), allow(dead_code))]
pub struct Config {
    /// Full PostgreSQL connection URL. Takes precedence over the discrete fields.
    pub database_url: Option<String>,
    /// Database host (default: "localhost")
    pub db_host: String,
    /// Database port (default: 5432)
    pub db_port: u16,
    /// Database user (default: "postgres")
    pub db_user: String,
    /// Database password (default: empty)
    pub db_password: String,
    /// Database name (default: "articles")
    pub db_database: String,
    /// Maximum number of pooled connections (default: 10)
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection before failing (default: 30)
    pub acquire_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DATABASE_URL` - Full connection URL (optional)
    /// - `DB_HOST` - Database host (default: "localhost")
    /// - `DB_PORT` - Database port (default: 5432)
    /// - `DB_USER` - Database user (default: "postgres")
    /// - `DB_PASSWORD` - Database password (default: empty)
    /// - `DB_DATABASE` - Database name (default: "articles")
    /// - `DB_MAX_CONNECTIONS` - Pool size (default: 10)
    /// - `DB_ACQUIRE_TIMEOUT_SECS` - Pool acquire timeout (default: 30)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            database_url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            db_host: lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
            db_port: lookup("DB_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5432),
            db_user: lookup("DB_USER").unwrap_or_else(|| "postgres".to_string()),
            db_password: lookup("DB_PASSWORD").unwrap_or_default(),
            db_database: lookup("DB_DATABASE").unwrap_or_else(|| "articles".to_string()),
            max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            acquire_timeout_secs: lookup("DB_ACQUIRE_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Get the pool acquire timeout as a Duration.
    #[cfg_attr(not(feature = "postgres"), allow(dead_code))]
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field(
                "database_url",
                &self.database_url.as_ref().map(|_| "[REDACTED]"),
            )
            .field("db_host", &self.db_host)
            .field("db_port", &self.db_port)
            .field("db_user", &self.db_user)
            .field("db_password", &"[REDACTED]")
            .field("db_database", &self.db_database)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_lookup(lookup_from(&[]));

        assert_eq!(config.database_url, None);
        assert_eq!(config.db_host, "localhost");
        assert_eq!(config.db_port, 5432);
        assert_eq!(config.db_user, "postgres");
        assert_eq!(config.db_password, "");
        assert_eq!(config.db_database, "articles");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.acquire_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_reads_discrete_database_settings() {
        let config = Config::from_lookup(lookup_from(&[
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "6543"),
            ("DB_USER", "writer"),
            ("DB_PASSWORD", "hunter2"),
            ("DB_DATABASE", "blog"),
            ("DB_MAX_CONNECTIONS", "4"),
        ]));

        assert_eq!(config.db_host, "db.internal");
        assert_eq!(config.db_port, 6543);
        assert_eq!(config.db_user, "writer");
        assert_eq!(config.db_password, "hunter2");
        assert_eq!(config.db_database, "blog");
        assert_eq!(config.max_connections, 4);
    }

    #[test]
    fn test_unparseable_numbers_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("DB_PORT", "not-a-port"),
            ("DB_ACQUIRE_TIMEOUT_SECS", "-1"),
        ]));

        assert_eq!(config.db_port, 5432);
        assert_eq!(config.acquire_timeout_secs, 30);
    }

    #[test]
    fn test_empty_database_url_is_ignored() {
        let config = Config::from_lookup(lookup_from(&[("DATABASE_URL", "")]));

        assert_eq!(config.database_url, None);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://u:secret@h/db"),
            ("DB_PASSWORD", "hunter2"),
        ]));

        let debug = format!("{config:?}");

        assert!(!debug.contains("secret"));
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("[REDACTED]"));
    }
}
