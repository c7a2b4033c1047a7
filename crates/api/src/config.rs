use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:3001";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub skip_migrations: bool,
    pub gql_introspection: bool,
    pub allowed_origins: Vec<String>,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unparseable values fall back to
    /// their defaults; only `DATABASE_URL` is required.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let flag = |key: &str| {
            lookup(key)
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(false)
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").context("DATABASE_URL must be set")?,
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            port: lookup("PORT").and_then(|s| s.parse().ok()).unwrap_or(8080),
            skip_migrations: flag("SKIP_MIGRATIONS"),
            gql_introspection: flag("GQL_INTROSPECTION"),
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string())
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            request_timeout: Duration::from_secs(
                lookup("REQUEST_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/league")]).unwrap();

        assert_eq!(config.database_max_connections, 30);
        assert_eq!(config.port, 8080);
        assert!(!config.skip_migrations);
        assert!(!config.gql_introspection);
        assert_eq!(config.allowed_origins.len(), 2);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/league"),
            ("PORT", "9000"),
            ("SKIP_MIGRATIONS", "TRUE"),
            ("GQL_INTROSPECTION", "true"),
            ("ALLOWED_ORIGINS", "https://league.example, "),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("DATABASE_MAX_CONNECTIONS", "not-a-number"),
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert!(config.skip_migrations);
        assert!(config.gql_introspection);
        assert_eq!(config.allowed_origins, vec!["https://league.example"]);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.database_max_connections, 30);
    }

    #[test]
    fn test_database_url_is_required() {
        assert!(config_from(&[("PORT", "9000")]).is_err());
    }
}
