use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::debug;

/// Everything the server reads from the environment, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_file: PathBuf,
    pub delay_min_ms: u64,
    pub delay_max_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| {
            lookup(key).unwrap_or_else(|| {
                debug!("{key} not set, using default: {default}");
                default.to_string()
            })
        };

        let port = var("PORT", "3000");
        let delay_min = var("GIGGLE_DELAY_MIN_MS", "1000");
        let delay_max = var("GIGGLE_DELAY_MAX_MS", "2000");

        let config = Self {
            host: var("GIGGLE_HOST", "0.0.0.0"),
            port: port.parse().with_context(|| format!("invalid PORT: {port}"))?,
            data_file: var("GIGGLE_DATA_FILE", "data/submissions.json").into(),
            delay_min_ms: delay_min
                .parse()
                .with_context(|| format!("invalid GIGGLE_DELAY_MIN_MS: {delay_min}"))?,
            delay_max_ms: delay_max
                .parse()
                .with_context(|| format!("invalid GIGGLE_DELAY_MAX_MS: {delay_max}"))?,
        };

        if config.delay_min_ms > config.delay_max_ms {
            bail!(
                "GIGGLE_DELAY_MIN_MS ({}) is greater than GIGGLE_DELAY_MAX_MS ({})",
                config.delay_min_ms,
                config.delay_max_ms
            );
        }

        Ok(config)
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}
