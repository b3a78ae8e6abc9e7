//! Domain model: currency rates quoted by the central bank for one date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::DomainError;

/// One currency's quoted rate on a business date.
///
/// `unit_rate` is derived from `rate / nominal` by the constructor; it is
/// never read from an external source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyRate {
    /// Display name of the currency
    #[schema(example = "US Dollar")]
    pub name: String,
    /// Number of currency units the quote applies to (e.g. rate per 100 units)
    pub nominal: Decimal,
    /// Rubles per `nominal` units
    pub rate: Decimal,
    /// ISO 4217 numeric code
    #[schema(example = 840)]
    pub numeric_code: u16,
    /// ISO 4217 alpha code
    #[schema(example = "USD")]
    pub char_code: String,
    /// Rubles per single unit of the currency
    #[schema(example = 90.1234)]
    pub unit_rate: f64,
    /// Effective business date of the quote
    pub date: NaiveDate,
}

impl CurrencyRate {
    /// Creates a validated rate. Nominal, rate and numeric code must be
    /// strictly positive.
    pub fn new(
        name: impl Into<String>,
        nominal: Decimal,
        rate: Decimal,
        numeric_code: u16,
        char_code: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, DomainError> {
        if nominal <= Decimal::ZERO {
            return Err(DomainError::NonPositiveNominal(nominal));
        }
        if rate <= Decimal::ZERO {
            return Err(DomainError::NonPositiveRate(rate));
        }
        if numeric_code == 0 {
            return Err(DomainError::ZeroNumericCode);
        }

        let unit_rate = (rate / nominal).to_f64().unwrap_or_default();

        Ok(Self {
            name: name.into(),
            nominal,
            rate,
            numeric_code,
            char_code: char_code.into(),
            unit_rate,
            date,
        })
    }
}

/// The full rate sheet for one normalized business date.
///
/// Immutable once constructed; [`CurrencyRateSet::filtered`] produces a new
/// set rather than mutating in place. Rates keep the upstream order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyRateSet {
    /// Normalized business date the rates apply to
    pub date: NaiveDate,
    /// Rates in upstream order
    pub currency_rates: Vec<CurrencyRate>,
}

impl CurrencyRateSet {
    pub fn new(date: NaiveDate, currency_rates: Vec<CurrencyRate>) -> Self {
        Self {
            date,
            currency_rates,
        }
    }

    /// Returns a new set with the same date containing only rates matching
    /// the filter. `None` returns the full set.
    pub fn filtered(&self, filter: Option<&RateFilter>) -> Self {
        match filter {
            None => self.clone(),
            Some(filter) => Self {
                date: self.date,
                currency_rates: self
                    .currency_rates
                    .iter()
                    .filter(|rate| filter.matches(rate))
                    .cloned()
                    .collect(),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.currency_rates.is_empty()
    }
}

/// Which currency to select from a rate sheet.
///
/// An explicit sum type instead of overloaded optional parameters: both HTTP
/// endpoints funnel into one retrieval routine carrying `Option<RateFilter>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateFilter {
    /// Match by ISO 4217 numeric code (e.g. 840)
    NumericCode(u16),
    /// Match by ISO 4217 alpha code (e.g. "USD"), case-insensitive
    CharCode(String),
}

impl RateFilter {
    pub fn matches(&self, rate: &CurrencyRate) -> bool {
        match self {
            RateFilter::NumericCode(code) => rate.numeric_code == *code,
            RateFilter::CharCode(code) => rate.char_code.eq_ignore_ascii_case(code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    fn usd() -> CurrencyRate {
        CurrencyRate::new(
            "US Dollar",
            "1".parse().unwrap(),
            "90.1234".parse().unwrap(),
            840,
            "USD",
            date(),
        )
        .unwrap()
    }

    fn jpy() -> CurrencyRate {
        CurrencyRate::new(
            "Japanese Yen",
            "100".parse().unwrap(),
            "61.48".parse().unwrap(),
            392,
            "JPY",
            date(),
        )
        .unwrap()
    }

    #[test]
    fn unit_rate_is_rate_over_nominal() {
        assert!((usd().unit_rate - 90.1234).abs() < 1e-9);
        assert!((jpy().unit_rate - 0.6148).abs() < 1e-9);
    }

    #[test]
    fn rejects_non_positive_nominal() {
        let result = CurrencyRate::new(
            "Broken",
            Decimal::ZERO,
            "1".parse().unwrap(),
            1,
            "BRK",
            date(),
        );
        assert!(matches!(result, Err(DomainError::NonPositiveNominal(_))));
    }

    #[test]
    fn rejects_non_positive_rate() {
        let result = CurrencyRate::new(
            "Broken",
            "1".parse().unwrap(),
            "-5".parse().unwrap(),
            1,
            "BRK",
            date(),
        );
        assert!(matches!(result, Err(DomainError::NonPositiveRate(_))));
    }

    #[test]
    fn rejects_zero_numeric_code() {
        let result = CurrencyRate::new(
            "Broken",
            "1".parse().unwrap(),
            "1".parse().unwrap(),
            0,
            "BRK",
            date(),
        );
        assert!(matches!(result, Err(DomainError::ZeroNumericCode)));
    }

    #[test]
    fn filter_by_numeric_code_selects_subset() {
        let set = CurrencyRateSet::new(date(), vec![usd(), jpy()]);
        let filtered = set.filtered(Some(&RateFilter::NumericCode(840)));

        assert_eq!(filtered.date, set.date);
        assert_eq!(filtered.currency_rates.len(), 1);
        assert_eq!(filtered.currency_rates[0].char_code, "USD");
        // the original set is untouched
        assert_eq!(set.currency_rates.len(), 2);
    }

    #[test]
    fn filter_by_char_code_is_case_insensitive() {
        let set = CurrencyRateSet::new(date(), vec![usd(), jpy()]);
        let filtered = set.filtered(Some(&RateFilter::CharCode("jpy".into())));

        assert_eq!(filtered.currency_rates.len(), 1);
        assert_eq!(filtered.currency_rates[0].numeric_code, 392);
    }

    #[test]
    fn filter_none_returns_full_set() {
        let set = CurrencyRateSet::new(date(), vec![usd(), jpy()]);
        assert_eq!(set.filtered(None), set);
    }

    #[test]
    fn filter_with_no_match_is_empty_not_error() {
        let set = CurrencyRateSet::new(date(), vec![usd(), jpy()]);
        let filtered = set.filtered(Some(&RateFilter::NumericCode(999)));

        assert!(filtered.is_empty());
        assert_eq!(filtered.date, set.date);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(CurrencyRateSet::new(date(), vec![usd()])).unwrap();

        assert_eq!(json["date"], "2024-01-10");
        let rate = &json["currencyRates"][0];
        assert_eq!(rate["numericCode"], 840);
        assert_eq!(rate["charCode"], "USD");
        assert!(rate["unitRate"].is_f64());
    }
}
