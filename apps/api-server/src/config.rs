//! Application configuration loaded from environment variables.

use std::env;

use blog_core::domain::CategoryDeletePolicy;
use blog_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    /// Run pending migrations before serving.
    #[cfg(feature = "postgres")]
    pub auto_migrate: bool,
    pub category_delete_policy: CategoryDeletePolicy,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| {
            let mut config = DatabaseConfig::new(url);
            if let Some(max) = parse_var("DB_MAX_CONNECTIONS") {
                config.max_connections = max;
            }
            if let Some(min) = parse_var("DB_MIN_CONNECTIONS") {
                config.min_connections = min;
            }
            config
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            database,
            #[cfg(feature = "postgres")]
            auto_migrate: env::var("DB_AUTO_MIGRATE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            category_delete_policy: Self::parse_delete_policy(),
        }
    }

    /// Parse CATEGORY_DELETE_POLICY (`detach`, `reject` or `cascade`).
    /// Unknown values fall back to the default with a warning.
    fn parse_delete_policy() -> CategoryDeletePolicy {
        match env::var("CATEGORY_DELETE_POLICY") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{}; using default", e);
                CategoryDeletePolicy::default()
            }),
            Err(_) => CategoryDeletePolicy::default(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
