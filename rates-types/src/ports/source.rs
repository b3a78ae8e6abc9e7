//! Upstream rate source port.
//!
//! This trait defines the interface for the external rate provider.
//! Implementations can be SOAP clients, mock sources, etc.

use chrono::NaiveDate;

use crate::domain::CurrencyRateSet;

/// Error type for upstream fetches.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Transport failure, timeout, or a non-success response status.
    #[error("Upstream service unavailable: {0}")]
    Unavailable(String),

    /// Structurally invalid response or a record with missing/non-numeric
    /// fields. The whole fetch fails; partial data is never returned.
    #[error("Malformed upstream response: {0}")]
    Malformed(String),
}

/// Port trait for the upstream rate provider.
#[async_trait::async_trait]
pub trait RateSource: Send + Sync + 'static {
    /// Fetches the full rate sheet for `date`.
    ///
    /// Exactly one upstream call per invocation; no retries and no caching
    /// at this layer. Retry/backoff policy belongs to infrastructure.
    async fn rates_on_date(&self, date: NaiveDate) -> Result<CurrencyRateSet, SourceError>;
}
