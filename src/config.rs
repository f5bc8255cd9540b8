use std::time::Duration;

use anyhow::{Error, Result};
use clap::Parser;
use reqwest::Url;

use crate::{api::DEFAULT_API_BASE_URL, models::RiskProfile};

#[derive(Clone, Debug, Parser)]
#[command(name = "marketpulse", version, about = "Terminal stock dashboard with AI predictions")]
pub struct Config {
    /// Base URL of the MarketPulse API
    #[arg(long, env = "MARKETPULSE_API_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_url: String,

    /// Ticker shown on startup
    #[arg(short, long, env = "MARKETPULSE_SYMBOL", default_value = "AAPL")]
    pub symbol: String,

    /// Initial risk profile for predictions (low, medium, high)
    #[arg(long, env = "MARKETPULSE_RISK_PROFILE", default_value = "medium")]
    pub risk_profile: RiskProfile,

    /// Seconds between snapshot refreshes
    #[arg(long, env = "MARKETPULSE_REFRESH_SECS", default_value_t = 60)]
    pub refresh_secs: u64,

    /// Milliseconds a typed query must stay unchanged before it is searched; 0 searches on every keystroke
    #[arg(long, env = "MARKETPULSE_SEARCH_DEBOUNCE_MS", default_value_t = 300)]
    pub search_debounce_ms: u64,

    /// Write tracing output to this file; logging is off without it
    #[arg(long, env = "MARKETPULSE_LOG_FILE")]
    pub log_file: Option<String>,
}

impl Config {
    pub fn validate(mut self) -> Result<Self> {
        self.symbol = self.symbol.trim().to_uppercase();
        if self.symbol.is_empty() {
            return Err(Error::msg("Startup symbol must not be empty"));
        }

        if self.refresh_secs == 0 {
            return Err(Error::msg("Refresh interval must be at least one second"));
        }

        let url = Url::parse(&self.api_url)
            .map_err(|e| Error::msg(format!("Invalid API URL '{}': {}", self.api_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::msg(format!(
                "API URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        Ok(self)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_secs)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}
