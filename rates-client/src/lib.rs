//! # Rates Client SDK
//!
//! A typed Rust client for the Currency Rates Gateway API.

use chrono::NaiveDate;
use reqwest::{Client, StatusCode};

use rates_types::CurrencyRateSet;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

/// Currency rates API client.
pub struct RatesClient {
    base_url: String,
    http: Client,
}

impl RatesClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Rates for `date` (today when `None`), optionally filtered by ISO 4217
    /// numeric code. Returns `Ok(None)` when a filter was given and no
    /// currency matched.
    pub async fn by_numeric_code(
        &self,
        date: Option<NaiveDate>,
        code: Option<u16>,
    ) -> Result<Option<CurrencyRateSet>, ClientError> {
        let mut query = Vec::new();
        if let Some(date) = date {
            query.push(("date", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(code) = code {
            query.push(("currencyCode", code.to_string()));
        }
        self.get_rates("/api/currency/byNumCode", &query).await
    }

    /// Rates for `date` (today when `None`), optionally filtered by ISO 4217
    /// alpha code. Returns `Ok(None)` when a filter was given and no
    /// currency matched.
    pub async fn by_char_code(
        &self,
        date: Option<NaiveDate>,
        code: Option<&str>,
    ) -> Result<Option<CurrencyRateSet>, ClientError> {
        let mut query = Vec::new();
        if let Some(date) = date {
            query.push(("date", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(code) = code {
            query.push(("currencyCharCode", code.to_string()));
        }
        self.get_rates("/api/currency/byCharCode", &query).await
    }

    async fn get_rates(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Option<CurrencyRateSet>, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if status.is_success() {
            return Ok(Some(resp.json().await?));
        }

        let message = resp.text().await.unwrap_or_default();
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
