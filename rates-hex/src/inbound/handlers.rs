//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use rates_types::{AppError, CurrencyRateSet, RateCache, RateSource};

use crate::CurrencyRateService;

/// Application state shared across handlers.
pub struct AppState<S: RateSource, C: RateCache> {
    pub service: CurrencyRateService<S, C>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(error = ?self.0, "request failed");
        } else {
            tracing::warn!(error = ?self.0, "request rejected");
        }

        let body = serde_json::json!({
            "error": self.0.to_string(),
            "kind": self.0.kind(),
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Query parameters for `/api/currency/byNumCode`.
///
/// Both parameters are parsed by hand so a bad value gets the structured
/// error body instead of the extractor's plain-text rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumCodeQuery {
    /// Rate date (`YYYY-MM-DD`); today when omitted
    pub date: Option<String>,
    /// ISO 4217 numeric code to filter by
    pub currency_code: Option<String>,
}

/// Query parameters for `/api/currency/byCharCode`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharCodeQuery {
    /// Rate date (`YYYY-MM-DD`); today when omitted
    pub date: Option<String>,
    /// ISO 4217 alpha code to filter by
    pub currency_char_code: Option<String>,
}

/// Currency rates filtered by numeric code.
#[tracing::instrument(skip(state))]
pub async fn by_num_code<S: RateSource, C: RateCache>(
    State(state): State<Arc<AppState<S, C>>>,
    Query(query): Query<NumCodeQuery>,
) -> Result<Response, ApiError> {
    let date = parse_date(query.date.as_deref())?;
    let code = query
        .currency_code
        .as_deref()
        .map(|raw| {
            raw.parse::<u16>()
                .map_err(|_| AppError::BadRequest(format!("Invalid currency code: {raw:?}")))
        })
        .transpose()?;

    let rates = state.service.rates_by_numeric_code(date, code).await?;
    Ok(rates_response(code.is_some(), rates))
}

/// Currency rates filtered by alpha code.
#[tracing::instrument(skip(state))]
pub async fn by_char_code<S: RateSource, C: RateCache>(
    State(state): State<Arc<AppState<S, C>>>,
    Query(query): Query<CharCodeQuery>,
) -> Result<Response, ApiError> {
    let date = parse_date(query.date.as_deref())?;
    let code = match query.currency_char_code {
        Some(raw) if raw.trim().is_empty() => {
            return Err(AppError::BadRequest("Currency char code cannot be empty".into()).into());
        }
        other => other,
    };

    let filtered = code.is_some();
    let rates = state.service.rates_by_char_code(date, code).await?;
    Ok(rates_response(filtered, rates))
}

/// An explicitly requested filter with zero matches is "no content", not an
/// error; everything else is the sheet as JSON.
fn rates_response(filtered: bool, rates: CurrencyRateSet) -> Response {
    if filtered && rates.is_empty() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        Json(rates).into_response()
    }
}

fn parse_date(raw: Option<&str>) -> Result<NaiveDate, AppError> {
    match raw {
        None => Ok(Local::now().date_naive()),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| AppError::BadRequest(format!("Invalid date: {raw:?}, expected YYYY-MM-DD"))),
    }
}
