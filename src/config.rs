use anyhow::Context;
use std::env;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8500;
pub const DEFAULT_LOG_FILTER: &str =
    "nl2sql_service=info,tower_http=debug,axum::rejection=trace";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_port(env::var("PORT").ok())?,
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Parses the `PORT` value, falling back to [`DEFAULT_PORT`] when unset.
pub fn parse_port(raw: Option<String>) -> anyhow::Result<u16> {
    match raw {
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .with_context(|| format!("PORT must be a valid port number, got {raw:?}")),
        None => Ok(DEFAULT_PORT),
    }
}
