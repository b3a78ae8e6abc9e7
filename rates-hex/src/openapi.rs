//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use rates_types::domain::{CurrencyRate, CurrencyRateSet};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Currency rates, optionally filtered by ISO 4217 numeric code
#[utoipa::path(
    get,
    path = "/api/currency/byNumCode",
    tag = "currency",
    params(
        ("date" = Option<String>, Query, description = "Rate date (YYYY-MM-DD); defaults to today, normalized to the nearest working day"),
        ("currencyCode" = Option<u16>, Query, description = "ISO 4217 numeric code, e.g. 840")
    ),
    responses(
        (status = 200, description = "Rates for the working date", body = CurrencyRateSet),
        (status = 204, description = "Filter given and no currency matched"),
        (status = 400, description = "Unparsable date or currency code"),
        (status = 503, description = "Rate source unavailable")
    )
)]
async fn by_num_code() {}

/// Currency rates, optionally filtered by ISO 4217 alpha code
#[utoipa::path(
    get,
    path = "/api/currency/byCharCode",
    tag = "currency",
    params(
        ("date" = Option<String>, Query, description = "Rate date (YYYY-MM-DD); defaults to today, normalized to the nearest working day"),
        ("currencyCharCode" = Option<String>, Query, description = "ISO 4217 alpha code, e.g. USD")
    ),
    responses(
        (status = 200, description = "Rates for the working date", body = CurrencyRateSet),
        (status = 204, description = "Filter given and no currency matched"),
        (status = 400, description = "Unparsable date or empty char code"),
        (status = 503, description = "Rate source unavailable")
    )
)]
async fn by_char_code() {}

/// OpenAPI document for the currency rates gateway.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Currency Rates Gateway API",
        description = "Central bank currency rates over JSON, cached per working date"
    ),
    paths(health, by_num_code, by_char_code),
    components(schemas(CurrencyRate, CurrencyRateSet)),
    tags(
        (name = "currency", description = "Central bank currency rates"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
