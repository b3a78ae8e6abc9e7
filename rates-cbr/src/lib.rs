//! # Rates CBR
//!
//! Outbound adapter for the Central Bank of Russia DailyInfo SOAP service.
//! Implements the `RateSource` port: one `GetCursOnDate` call per
//! invocation, with failures classified as unavailable (transport, timeout,
//! non-success status) or malformed (undecodable payload).

mod soap;

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use rates_types::{CurrencyRateSet, RateSource, SourceError};

/// Connection settings for the CBR DailyInfo SOAP endpoint.
///
/// The envelope framing is fixed; these options cover where and how the
/// request is sent. Defaults point at the production endpoint.
#[derive(Debug, Clone)]
pub struct CbrApiOptions {
    /// Service URL of the DailyInfo web service
    pub service_url: String,
    /// Request timeout applied to the whole call
    pub timeout: Duration,
    /// Content type of the SOAP request
    pub content_type: String,
    /// Name of the SOAP action header
    pub soap_action_header: String,
    /// SOAP action value for `GetCursOnDate`
    pub soap_action_value: String,
}

impl Default for CbrApiOptions {
    fn default() -> Self {
        Self {
            service_url: "https://www.cbr.ru/DailyInfoWebServ/DailyInfo.asmx".into(),
            timeout: Duration::from_secs(30),
            content_type: "application/soap+xml; charset=utf-8".into(),
            soap_action_header: "SOAPAction".into(),
            soap_action_value: "http://web.cbr.ru/GetCursOnDate".into(),
        }
    }
}

/// SOAP client for the CBR daily currency rates service.
///
/// Holds a shared `reqwest::Client`; safe for concurrent use. No retries
/// and no cache of its own.
pub struct CbrClient {
    http: reqwest::Client,
    options: CbrApiOptions,
}

impl CbrClient {
    /// Creates a client with the configured timeout baked into the
    /// underlying HTTP client.
    pub fn new(options: CbrApiOptions) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()?;
        Ok(Self { http, options })
    }
}

#[async_trait]
impl RateSource for CbrClient {
    async fn rates_on_date(&self, date: NaiveDate) -> Result<CurrencyRateSet, SourceError> {
        tracing::debug!(%date, "requesting currency rates from CBR");

        let envelope = soap::curs_on_date_request(date);
        let response = self
            .http
            .post(&self.options.service_url)
            .header(
                reqwest::header::CONTENT_TYPE,
                self.options.content_type.as_str(),
            )
            .header(
                self.options.soap_action_header.as_str(),
                self.options.soap_action_value.as_str(),
            )
            .body(envelope)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    SourceError::Unavailable(format!("CBR request timed out: {err}"))
                } else {
                    SourceError::Unavailable(format!("CBR request failed: {err}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            // the body of a failed response is not trusted for partial data
            return Err(SourceError::Unavailable(format!(
                "CBR responded with status {status}"
            )));
        }

        let body = response.text().await.map_err(|err| {
            SourceError::Unavailable(format!("failed to read CBR response: {err}"))
        })?;

        let rates = soap::parse_curs_on_date(&body, date)?;
        tracing::debug!(
            %date,
            count = rates.currency_rates.len(),
            "parsed CBR rate sheet"
        );
        Ok(rates)
    }
}
