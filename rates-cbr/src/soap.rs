//! SOAP 1.2 wire format for `GetCursOnDate`: request envelope construction
//! and response parsing.
//!
//! Field names (`ValuteCursOnDate`, `Vname`, `Vnom`, `Vcurs`, `Vcode`,
//! `VchCode`) are a fixed, versioned contract with the provider.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use rates_types::{CurrencyRate, CurrencyRateSet, SourceError};

/// Builds the fixed request envelope; only `On_date` varies.
pub(crate) fn curs_on_date_request(date: NaiveDate) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<soap12:Envelope xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
                 xmlns:xsd="http://www.w3.org/2001/XMLSchema"
                 xmlns:soap12="http://www.w3.org/2003/05/soap-envelope">
  <soap12:Body>
    <GetCursOnDate xmlns="http://web.cbr.ru/">
      <On_date>{}</On_date>
    </GetCursOnDate>
  </soap12:Body>
</soap12:Envelope>"#,
        date.format("%Y-%m-%d")
    )
}

// Response envelope, namespace prefixes stripped by the deserializer.
// Numeric fields stay as strings here so a bad value can be reported with
// the field name instead of an opaque decode error.

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "Body")]
    body: Body,
}

#[derive(Debug, Deserialize)]
struct Body {
    #[serde(rename = "GetCursOnDateResponse")]
    response: CursOnDateResponse,
}

#[derive(Debug, Deserialize)]
struct CursOnDateResponse {
    #[serde(rename = "GetCursOnDateResult")]
    result: CursOnDateResult,
}

#[derive(Debug, Deserialize)]
struct CursOnDateResult {
    #[serde(rename = "diffgram")]
    diffgram: Diffgram,
}

#[derive(Debug, Deserialize)]
struct Diffgram {
    // absent entirely when the service has no data for the date
    #[serde(rename = "ValuteData", default)]
    data: Option<ValuteData>,
}

#[derive(Debug, Deserialize)]
struct ValuteData {
    #[serde(rename = "ValuteCursOnDate", default)]
    records: Vec<ValuteCursOnDate>,
}

#[derive(Debug, Deserialize)]
struct ValuteCursOnDate {
    #[serde(rename = "Vname")]
    name: String,
    #[serde(rename = "Vnom")]
    nominal: String,
    #[serde(rename = "Vcurs")]
    rate: String,
    #[serde(rename = "Vcode")]
    numeric_code: String,
    #[serde(rename = "VchCode")]
    char_code: String,
}

impl ValuteCursOnDate {
    fn into_rate(self, date: NaiveDate) -> Result<CurrencyRate, SourceError> {
        let nominal = parse_field::<Decimal>("Vnom", &self.nominal)?;
        let rate = parse_field::<Decimal>("Vcurs", &self.rate)?;
        let numeric_code = parse_field::<u16>("Vcode", &self.numeric_code)?;

        CurrencyRate::new(
            self.name.trim(),
            nominal,
            rate,
            numeric_code,
            self.char_code.trim(),
            date,
        )
        .map_err(|err| SourceError::Malformed(err.to_string()))
    }
}

fn parse_field<T: std::str::FromStr>(field: &str, raw: &str) -> Result<T, SourceError> {
    raw.trim()
        .parse()
        .map_err(|_| SourceError::Malformed(format!("non-numeric value {raw:?} in {field}")))
}

/// Parses a `GetCursOnDate` response into a rate set stamped with `date`.
///
/// Any missing or non-numeric field fails the whole fetch; an envelope with
/// no rate records yields an empty set.
pub(crate) fn parse_curs_on_date(
    xml: &str,
    date: NaiveDate,
) -> Result<CurrencyRateSet, SourceError> {
    let envelope: Envelope = serde_xml_rs::from_str(xml)
        .map_err(|err| SourceError::Malformed(format!("undecodable CBR envelope: {err}")))?;

    let records = envelope
        .body
        .response
        .result
        .diffgram
        .data
        .map(|data| data.records)
        .unwrap_or_default();

    let rates = records
        .into_iter()
        .map(|record| record.into_rate(date))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CurrencyRateSet::new(date, rates))
}
