//! Currency Rate Application Service
//!
//! Orchestrates the cache-aside retrieval pipeline through the source and
//! cache ports: normalize the date, consult the cache, fall back to the
//! upstream source, repopulate, filter. Contains NO transport or backend
//! logic - pure orchestration.

use std::time::Duration;

use chrono::{Datelike, NaiveDate, Weekday};

use rates_types::{AppError, CurrencyRateSet, RateCache, RateFilter, RateSource};

/// How long a fetched rate sheet stays cached.
///
/// Weekend requests share the preceding Friday's entry, so one day is the
/// natural horizon.
const CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Normalizes a requested date to the working date: while the date falls on
/// Saturday or Sunday, step back one day.
///
/// Public holidays are NOT skipped - a known limitation, kept as-is.
pub fn working_date(mut date: NaiveDate) -> NaiveDate {
    while matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        date = date.pred_opt().expect("date has a predecessor");
    }
    date
}

/// Cache key for one working date.
fn cache_key(date: NaiveDate) -> String {
    format!("currency_rates_{}", date.format("%Y%m%d"))
}

/// Application service for currency rate retrieval.
///
/// Generic over `S: RateSource` and `C: RateCache` - the adapters are
/// injected at compile time. Stateless between calls; safe for concurrent
/// use. Concurrent misses on the same key may each fetch upstream: the
/// fetch is idempotent and cache writes carry identical content, so no
/// single-flight guard is taken here.
pub struct CurrencyRateService<S: RateSource, C: RateCache> {
    source: S,
    cache: C,
}

impl<S: RateSource, C: RateCache> CurrencyRateService<S, C> {
    /// Creates a new service with the given source and cache.
    pub fn new(source: S, cache: C) -> Self {
        Self { source, cache }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Public filter variants
    // ─────────────────────────────────────────────────────────────────────────────

    /// Rates for `date`, optionally narrowed to one ISO 4217 numeric code.
    pub async fn rates_by_numeric_code(
        &self,
        date: NaiveDate,
        code: Option<u16>,
    ) -> Result<CurrencyRateSet, AppError> {
        self.rates_on_date(date, code.map(RateFilter::NumericCode))
            .await
    }

    /// Rates for `date`, optionally narrowed to one ISO 4217 alpha code.
    pub async fn rates_by_char_code(
        &self,
        date: NaiveDate,
        code: Option<String>,
    ) -> Result<CurrencyRateSet, AppError> {
        self.rates_on_date(date, code.map(RateFilter::CharCode))
            .await
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Retrieval pipeline
    // ─────────────────────────────────────────────────────────────────────────────

    /// The single retrieval routine both public variants delegate to.
    ///
    /// A filter matching nothing yields an empty set, not an error; the
    /// boundary decides how to present that.
    pub async fn rates_on_date(
        &self,
        date: NaiveDate,
        filter: Option<RateFilter>,
    ) -> Result<CurrencyRateSet, AppError> {
        let working = working_date(date);
        let key = cache_key(working);

        tracing::info!(date = %working, ?filter, "currency rates requested");

        if let Some(cached) = self.cached(&key).await {
            tracing::debug!(key, "cache hit");
            return Ok(cached.filtered(filter.as_ref()));
        }

        let rates = self.source.rates_on_date(working).await?;
        self.store(&key, &rates).await;

        tracing::info!(
            date = %working,
            count = rates.currency_rates.len(),
            "rates fetched and cached"
        );

        Ok(rates.filtered(filter.as_ref()))
    }

    /// Cache read. Backend failures and undecodable entries both count as
    /// misses; the pipeline cannot tell "never cached" from "cache down".
    async fn cached(&self, key: &str) -> Option<CurrencyRateSet> {
        let raw = match self.cache.get(key).await {
            Ok(raw) => raw?,
            Err(err) => {
                tracing::warn!(key, %err, "cache read failed, treating as miss");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(rates) => Some(rates),
            Err(err) => {
                tracing::warn!(key, %err, "undecodable cache entry, treating as miss");
                None
            }
        }
    }

    /// Best-effort cache write of the unfiltered sheet; never fails the
    /// request.
    async fn store(&self, key: &str, rates: &CurrencyRateSet) {
        let payload = match serde_json::to_string(rates) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(key, %err, "failed to encode rates for caching");
                return;
            }
        };

        if let Err(err) = self.cache.set(key, &payload, CACHE_TTL).await {
            tracing::warn!(key, %err, "cache write failed");
        }
    }
}
