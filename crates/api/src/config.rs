use std::time::Duration;

use sqlx::postgres::PgConnectOptions;

/// Configuration problems detected at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Where the Postgres database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseSource {
    /// A full `postgres://` URL from `DATABASE_URL`.
    Url(String),
    /// Individual `DB_*` settings.
    Parts {
        host: String,
        port: u16,
        user: String,
        password: String,
        name: String,
    },
}

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub source: DatabaseSource,
    /// Pool size (default: `20`).
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Build sqlx connect options. Parts are passed through the typed
    /// builder, so passwords need no URL escaping.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match &self.source {
            DatabaseSource::Url(url) => url.parse(),
            DatabaseSource::Parts {
                host,
                port,
                user,
                password,
                name,
            } => Ok(PgConnectOptions::new()
                .host(host)
                .port(*port)
                .username(user)
                .password(password)
                .database(name)),
        }
    }
}

/// Song details provider settings.
#[derive(Debug, Clone)]
pub struct EnrichmentConfig {
    /// Provider endpoint, e.g. `http://provider:8080/info`.
    pub base_url: String,
    /// Per-request timeout (default: `10` seconds).
    pub timeout: Duration,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the provider URL and database location have defaults
/// suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub database: DatabaseConfig,
    pub enrichment: EnrichmentConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                   | Default                    |
    /// |---------------------------|----------------------------|
    /// | `HOST`                    | `0.0.0.0`                  |
    /// | `PORT`                    | `3000`                     |
    /// | `CORS_ORIGINS`            | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                       |
    /// | `DATABASE_URL`            | built from `DB_*`          |
    /// | `DB_HOST` / `DB_PORT`     | `localhost` / `5432`       |
    /// | `DB_USER` / `DB_PASSWORD` | required without URL / empty |
    /// | `DB_NAME`                 | required without URL       |
    /// | `DB_MAX_CONNECTIONS`      | `20`                       |
    /// | `EXTERNAL_URL`            | required                   |
    /// | `ENRICHMENT_TIMEOUT_SECS` | `10`                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 3000u16)?;

        let cors_origins: Vec<String> = var("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30u64)?;

        let source = match var("DATABASE_URL") {
            Some(url) => DatabaseSource::Url(url),
            None => DatabaseSource::Parts {
                host: var("DB_HOST").unwrap_or_else(|| "localhost".into()),
                port: parse_or(&lookup, "DB_PORT", 5432u16)?,
                user: var("DB_USER").ok_or(ConfigError::Missing("DATABASE_URL or DB_USER"))?,
                password: lookup("DB_PASSWORD").unwrap_or_default(),
                name: var("DB_NAME").ok_or(ConfigError::Missing("DATABASE_URL or DB_NAME"))?,
            },
        };
        let database = DatabaseConfig {
            source,
            max_connections: parse_or(
                &lookup,
                "DB_MAX_CONNECTIONS",
                songbook_db::DEFAULT_MAX_CONNECTIONS,
            )?,
        };

        let enrichment = EnrichmentConfig {
            base_url: var("EXTERNAL_URL").ok_or(ConfigError::Missing("EXTERNAL_URL"))?,
            timeout: Duration::from_secs(parse_or(
                &lookup,
                "ENRICHMENT_TIMEOUT_SECS",
                songbook_enrichment::DEFAULT_TIMEOUT.as_secs(),
            )?),
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database,
            enrichment,
        })
    }
}

/// Parse `key` if set, otherwise fall back to `default`.
fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key).filter(|v| !v.trim().is_empty()) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
