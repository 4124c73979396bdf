use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {name} {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub news_path: PathBuf,
    pub comments_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub request_timeout: Duration,
}

impl Config {
    pub const DEFAULT_NEWS_PATH: &'static str = "data/news.json";
    pub const DEFAULT_COMMENTS_PATH: &'static str = "data/comments.json";
    pub const DEFAULT_BIND_ADDR: &'static str = "0.0.0.0:3000";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let news_path = lookup("NEWS_PATH").unwrap_or_else(|| Self::DEFAULT_NEWS_PATH.into());
        let comments_path =
            lookup("COMMENTS_PATH").unwrap_or_else(|| Self::DEFAULT_COMMENTS_PATH.into());

        let raw_addr = lookup("BIND_ADDR").unwrap_or_else(|| Self::DEFAULT_BIND_ADDR.into());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::Invalid {
                name: "BIND_ADDR",
                reason: err.to_string(),
                value: raw_addr.clone(),
            })?;

        let timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(value) => value.parse::<u64>().map_err(|err| ConfigError::Invalid {
                name: "REQUEST_TIMEOUT_SECS",
                reason: err.to_string(),
                value,
            })?,
            None => Self::DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            news_path: news_path.into(),
            comments_path: comments_path.into(),
            bind_addr,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
