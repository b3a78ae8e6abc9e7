//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use rates_cbr::CbrApiOptions;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub cache_url: String,
    pub cbr: CbrApiOptions,
}

impl Config {
    /// Loads configuration from environment variables. Every value has a
    /// default suitable for a local run against the production rate source.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let cache_url = env::var("CACHE_URL").unwrap_or_else(|_| "memory://".to_string());

        let mut cbr = CbrApiOptions::default();
        if let Ok(url) = env::var("CBR_SERVICE_URL") {
            cbr.service_url = url;
        }
        if let Ok(secs) = env::var("CBR_TIMEOUT_SECS") {
            cbr.timeout = Duration::from_secs(secs.parse()?);
        }

        Ok(Self {
            port,
            cache_url,
            cbr,
        })
    }
}
