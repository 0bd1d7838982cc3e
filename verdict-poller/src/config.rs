//! Poller configuration
//!
//! Credentials, remote endpoints and the polling interval. Everything is
//! read once at startup and never changes afterwards.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_RETRY_SECS: u64 = 600;
pub const DEFAULT_LOG_FILE: &str = "main.log";

/// Poller configuration
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the review API
    pub practicum_token: String,

    /// Bot token for the Telegram Bot API
    pub telegram_token: String,

    /// Chat that receives every notification
    pub telegram_chat_id: String,

    /// Full URL of the homework status endpoint
    pub practicum_endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Pause between two poll cycles
    pub retry_interval: Duration,
}

impl Config {
    /// Creates configuration from an arbitrary variable source
    ///
    /// Expected variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - RETRY_TIME (optional, seconds, default: 600)
    /// - PRACTICUM_ENDPOINT (optional)
    /// - TELEGRAM_API_URL (optional, default: https://api.telegram.org)
    ///
    /// Empty values count as missing. Credentials are checked in the order
    /// PRACTICUM_TOKEN, TELEGRAM_TOKEN, TELEGRAM_CHAT_ID and the error names
    /// the first missing one.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let require = |key: &str| {
            get(key).ok_or_else(|| anyhow::anyhow!("Missing required environment variable: {}", key))
        };

        let practicum_token = require("PRACTICUM_TOKEN")?;
        let telegram_token = require("TELEGRAM_TOKEN")?;
        let telegram_chat_id = require("TELEGRAM_CHAT_ID")?;

        let retry_interval = match get("RETRY_TIME") {
            Some(raw) => raw
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| anyhow::anyhow!("RETRY_TIME must be a number of seconds, got {:?}", raw))?,
            None => Duration::from_secs(DEFAULT_RETRY_SECS),
        };

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            practicum_endpoint: get("PRACTICUM_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_PRACTICUM_ENDPOINT.to_string()),
            telegram_api_url: get("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            retry_interval,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, url) in [
            ("practicum_endpoint", &self.practicum_endpoint),
            ("telegram_api_url", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://", name);
            }
        }

        if self.retry_interval.is_zero() {
            anyhow::bail!("retry_interval must be greater than 0");
        }

        Ok(())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("practicum_endpoint", &self.practicum_endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_interval", &self.retry_interval)
            .finish_non_exhaustive()
    }
}

/// Log file location, `LOG_FILE` or `main.log` in the working directory
///
/// Resolved separately from [`Config`] so logging is up before
/// credentials are checked.
pub fn log_file_path() -> PathBuf {
    std::env::var("LOG_FILE")
        .ok()
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
}
