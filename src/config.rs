// src/config.rs
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the city REST backend, without a trailing slash.
    pub api_base: String,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub http_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:8000".to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            http_timeout: Duration::from_secs(30),
        }
    }
}

impl AppConfig {
    /// Load from the process environment (after `.env`, if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; missing keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(base) = lookup("CITY_API_URL") {
            let trimmed = base.trim().trim_end_matches('/').to_string();
            url::Url::parse(&trimmed).map_err(|e| ConfigError::Invalid {
                key: "CITY_API_URL",
                value: base.clone(),
                reason: e.to_string(),
            })?;
            cfg.api_base = trimmed;
        }

        if let Some(addr) = lookup("BIND_ADDR") {
            cfg.bind_addr = addr.trim().parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    key: "BIND_ADDR",
                    value: addr.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(workers) = lookup("MAX_WORKERS") {
            cfg.max_workers = parse_positive("MAX_WORKERS", &workers)? as usize;
        }

        if let Some(secs) = lookup("HTTP_TIMEOUT_SECS") {
            cfg.http_timeout = Duration::from_secs(parse_positive("HTTP_TIMEOUT_SECS", &secs)?);
        }

        Ok(cfg)
    }
}

fn parse_positive(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        Ok(_) => Err(ConfigError::Invalid {
            key,
            value: raw.to_string(),
            reason: "must be greater than zero".into(),
        }),
        Err(e) => Err(ConfigError::Invalid {
            key,
            value: raw.to_string(),
            reason: e.to_string(),
        }),
    }
}
