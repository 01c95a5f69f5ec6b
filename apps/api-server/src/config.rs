//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use socialplan_infra::{DatabaseConfig, RateLimitConfig};

/// Configuration problems. All of them abort startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` when neither `DATABASE_URL` nor `DB_HOST` is set.
    pub database: Option<DatabaseConfig>,
    pub rate_limit: RateLimitConfig,
    /// Empty means any origin is allowed.
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(lookup);

        let database = if vars.get("DATABASE_URL").is_some() || vars.get("DB_HOST").is_some() {
            Some(Self::database(&vars)?)
        } else {
            None
        };

        let rate_limit = RateLimitConfig {
            max_requests: vars.parse("RATE_LIMIT_MAX_REQUESTS", 15)?,
            window: Duration::from_secs(vars.parse("RATE_LIMIT_WINDOW_SECS", 60)?),
        };

        let cors_allowed_origins = vars
            .get("CORS_ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty() && *o != "*")
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host: vars.get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: vars.parse("PORT", 3000)?,
            database,
            rate_limit,
            cors_allowed_origins,
        })
    }

    fn database<F>(vars: &Vars<F>) -> Result<DatabaseConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url_override = vars.get("DATABASE_URL");
        let part = |key: &'static str| match (&url_override, vars.get(key)) {
            (_, Some(value)) => Ok(value),
            (Some(_), None) => Ok(String::new()),
            (None, None) => Err(ConfigError::Missing(key)),
        };

        Ok(DatabaseConfig {
            host: part("DB_HOST")?,
            port: vars.parse("DB_PORT", 5432)?,
            user: part("DB_USER")?,
            password: part("DB_PASSWORD")?,
            name: part("DB_NAME")?,
            max_connections: vars.parse("DB_MAX_CONNECTIONS", 20)?,
            min_connections: vars.parse("DB_MIN_CONNECTIONS", 2)?,
            url_override,
        })
    }
}

struct Vars<F>(F);

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|v| !v.is_empty())
    }

    fn parse<T: FromStr>(&self, key: &'static str, default: T) -> Result<T, ConfigError> {
        match self.get(key) {
            None => Ok(default),
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { key, value }),
        }
    }
}
