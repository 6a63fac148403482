//! Application configuration loaded from environment variables.

use std::env;

use tenantblog_infra::database::DatabaseConfig;
use tenantblog_infra::{IdentityApiConfig, SessionTokenConfig};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub session: SessionTokenConfig,
    pub identity: IdentityConfig,
}

/// Where organization metadata comes from.
#[derive(Debug, Clone)]
pub enum IdentityConfig {
    /// The identity provider's backend API.
    Api(IdentityApiConfig),
    /// A fixed list, `ORGANIZATIONS=org_1=Acme,org_2=Globex`.
    Static(String),
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Fails when no session verification key is configured.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env_parse("PORT").unwrap_or(8080),
            database: Self::database_from_env(),
            session: SessionTokenConfig::from_env()?,
            identity: Self::identity_from_env(),
        })
    }

    /// `DATABASE_URL`, or a URL assembled from `DB_HOST`/`DB_PORT`/`DB_USER`/
    /// `DB_PASSWORD`/`DB_NAME` when `DB_HOST` is set.
    fn database_from_env() -> Option<DatabaseConfig> {
        let mut config = match env::var("DATABASE_URL") {
            Ok(url) => DatabaseConfig::new(url),
            Err(_) => {
                let host = env::var("DB_HOST").ok()?;
                DatabaseConfig::from_parts(
                    &host,
                    env_parse("DB_PORT").unwrap_or(5432),
                    &env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
                    &env::var("DB_PASSWORD").unwrap_or_else(|_| "postgres".to_string()),
                    &env::var("DB_NAME").unwrap_or_else(|_| "multi_tenant_next".to_string()),
                )
            }
        };

        if let Some(max) = env_parse("DB_MAX_CONNECTIONS") {
            config.max_connections = max;
        }
        if let Some(min) = env_parse("DB_MIN_CONNECTIONS") {
            config.min_connections = min;
        }

        Some(config)
    }

    fn identity_from_env() -> IdentityConfig {
        match env::var("IDENTITY_SECRET_KEY") {
            Ok(secret_key) if !secret_key.is_empty() => IdentityConfig::Api(IdentityApiConfig {
                api_url: env::var("IDENTITY_API_URL")
                    .unwrap_or_else(|_| IdentityApiConfig::DEFAULT_API_URL.to_string()),
                secret_key,
            }),
            _ => IdentityConfig::Static(env::var("ORGANIZATIONS").unwrap_or_default()),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
