use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{AppError, Result};

/// Process configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub chat_id: String,
    pub telegram_api_base: String,
    pub database_path: PathBuf,
    pub port: u16,
    pub poll_interval: Duration,
    pub http_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` uses the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| AppError::config(format!("{} must be set", key)))
        };
        let seconds = |key: &str, default: u64| -> Result<Duration> {
            let secs = match lookup(key) {
                Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                    AppError::config(format!("{} must be a whole number of seconds", key))
                })?,
                None => default,
            };
            if secs == 0 {
                return Err(AppError::config(format!("{} must be greater than zero", key)));
            }
            Ok(Duration::from_secs(secs))
        };

        Ok(Self {
            bot_token: required("BOT_TOKEN")?,
            chat_id: required("CHAT_ID")?,
            telegram_api_base: lookup("TELEGRAM_API_BASE")
                .unwrap_or_else(|| "https://api.telegram.org".to_string()),
            database_path: lookup("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("jobs.db")),
            port: match lookup("PORT") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| AppError::config("PORT must be a valid number"))?,
                None => 3000,
            },
            poll_interval: seconds("POLL_INTERVAL_SECS", 300)?,
            http_timeout: seconds("HTTP_TIMEOUT_SECS", 10)?,
        })
    }
}
