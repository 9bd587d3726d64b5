//! User service configuration.

use std::env;

use common::DatabaseConfig;

/// User service configuration.
#[derive(Debug, Clone, Default)]
pub struct UserServiceConfig {
    /// Backing store connection pool settings
    pub database: DatabaseConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Service-prefixed keys win over the shared `DATABASE_URL`; unset or
    /// unparsable values fall back to [`DatabaseConfig::default`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = DatabaseConfig::default();
        let number = |key: &str| lookup(key).and_then(|v| v.parse().ok());

        Self {
            database: DatabaseConfig {
                url: lookup("USER_SERVICE_DATABASE_URL")
                    .or_else(|| lookup("DATABASE_URL"))
                    .unwrap_or(defaults.url),
                max_connections: number("USER_SERVICE_DB_MAX_CONNECTIONS")
                    .unwrap_or(defaults.max_connections as u64) as u32,
                min_connections: number("USER_SERVICE_DB_MIN_CONNECTIONS")
                    .unwrap_or(defaults.min_connections as u64) as u32,
                connect_timeout_secs: number("USER_SERVICE_DB_CONNECT_TIMEOUT_SECS")
                    .unwrap_or(defaults.connect_timeout_secs),
                sqlx_logging: lookup("USER_SERVICE_DB_LOG_STATEMENTS")
                    .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                    .unwrap_or(defaults.sqlx_logging),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = UserServiceConfig::from_lookup(lookup_from(&[]));
        let defaults = DatabaseConfig::default();

        assert_eq!(config.database.url, defaults.url);
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.database.connect_timeout_secs, 8);
        assert!(!config.database.sqlx_logging);
    }

    #[test]
    fn test_service_url_wins_over_shared_url() {
        let config = UserServiceConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://shared/db"),
            ("USER_SERVICE_DATABASE_URL", "sqlite::memory:"),
        ]));
        assert_eq!(config.database.url, "sqlite::memory:");

        let config = UserServiceConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://shared/db")]));
        assert_eq!(config.database.url, "postgres://shared/db");
    }

    #[test]
    fn test_pool_settings_parsed() {
        let config = UserServiceConfig::from_lookup(lookup_from(&[
            ("USER_SERVICE_DB_MAX_CONNECTIONS", "25"),
            ("USER_SERVICE_DB_MIN_CONNECTIONS", "not-a-number"),
            ("USER_SERVICE_DB_CONNECT_TIMEOUT_SECS", "3"),
            ("USER_SERVICE_DB_LOG_STATEMENTS", "true"),
        ]));

        assert_eq!(config.database.max_connections, 25);
        assert_eq!(config.database.min_connections, 1);
        assert_eq!(config.database.connect_timeout_secs, 3);
        assert!(config.database.sqlx_logging);
    }
}
