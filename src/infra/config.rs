//! Centralized configuration (environment variables + defaults).

use crate::storage::variants::VariantOrder;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("database configuration variables are missing: {}", .0.join(", "))]
    MissingDatabase(Vec<&'static str>),
    #[error("{name} has an invalid value '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    pub variant_order: VariantOrder,
    /// Upper bound for a single gateway call. `None` waits indefinitely.
    pub query_timeout: Option<Duration>,
    pub run_migrations: bool,
}

impl Config {
    /// Reads the process environment. Call `dotenv::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let database_url = match get("DATABASE_URL") {
            Some(url) => url,
            None => database_url_from_parts(&get)?,
        };

        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let max_connections = match get("DB_MAX_CONNECTIONS") {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(v) => match v.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(invalid("DB_MAX_CONNECTIONS", v, "expected a positive integer")),
            },
        };

        let variant_order = match get("VARIANT_ORDER") {
            None => VariantOrder::default(),
            Some(v) => v
                .parse::<VariantOrder>()
                .map_err(|reason| invalid("VARIANT_ORDER", v.clone(), reason))?,
        };

        let query_timeout = match get("QUERY_TIMEOUT_MS") {
            None => None,
            Some(v) => match v.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => Some(Duration::from_millis(ms)),
                _ => return Err(invalid("QUERY_TIMEOUT_MS", v, "expected milliseconds > 0")),
            },
        };

        let run_migrations = match get("RUN_MIGRATIONS") {
            None => true,
            Some(v) => match v.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => return Err(invalid("RUN_MIGRATIONS", v, "expected true or false")),
            },
        };

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
            variant_order,
            query_timeout,
            run_migrations,
        })
    }
}

fn database_url_from_parts<G>(get: &G) -> Result<String, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    let names = ["DB_USER", "DB_PASSWORD", "DB_HOST", "DB_NAME"];
    let values: Vec<Option<String>> = names.iter().map(|n| get(*n)).collect();

    let missing: Vec<&'static str> = names
        .iter()
        .zip(&values)
        .filter(|(_, v)| v.is_none())
        .map(|(n, _)| *n)
        .collect();
    if !missing.is_empty() {
        return Err(ConfigError::MissingDatabase(missing));
    }

    let parts: Vec<String> = values.into_iter().flatten().collect();
    Ok(format!(
        "postgres://{}:{}@{}/{}?sslmode=disable",
        parts[0], parts[1], parts[2], parts[3]
    ))
}

fn invalid(name: &'static str, value: String, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        name,
        value,
        reason: reason.into(),
    }
}
