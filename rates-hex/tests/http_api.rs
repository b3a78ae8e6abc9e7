//! Integration tests for the HTTP API surface.
//!
//! These tests verify the status-code contract of the currency endpoints
//! (200 / 204 / 400 / 503) and the shape of JSON bodies, driving the full
//! router without a network listener.

use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tower::ServiceExt;

use rates_hex::{CurrencyRateService, inbound::HttpServer};
use rates_types::{
    CacheError, CurrencyRate, CurrencyRateSet, RateCache, RateSource, SourceError,
};

/// Serves a fixed USD/EUR sheet for whatever date is asked.
struct FixedSource;

#[async_trait]
impl RateSource for FixedSource {
    async fn rates_on_date(&self, date: NaiveDate) -> Result<CurrencyRateSet, SourceError> {
        let rates = vec![
            CurrencyRate::new(
                "US Dollar",
                "1".parse().unwrap(),
                "90.1234".parse().unwrap(),
                840,
                "USD",
                date,
            )
            .unwrap(),
            CurrencyRate::new(
                "Euro",
                "1".parse().unwrap(),
                "98.5".parse().unwrap(),
                978,
                "EUR",
                date,
            )
            .unwrap(),
        ];
        Ok(CurrencyRateSet::new(date, rates))
    }
}

/// Always misses; handler tests don't exercise caching.
struct NoCache;

#[async_trait]
impl RateCache for NoCache {
    async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<(), CacheError> {
        Ok(())
    }
}

/// Upstream that is always down.
struct DownSource;

#[async_trait]
impl RateSource for DownSource {
    async fn rates_on_date(&self, _date: NaiveDate) -> Result<CurrencyRateSet, SourceError> {
        Err(SourceError::Unavailable("connect timeout".into()))
    }
}

fn app() -> axum::Router {
    HttpServer::new(CurrencyRateService::new(FixedSource, NoCache)).router()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let response = app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn full_sheet_without_filter() {
    let response = app()
        .oneshot(get("/api/currency/byNumCode?date=2024-01-10"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["date"], "2024-01-10");
    assert_eq!(json["currencyRates"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn numeric_filter_narrows_to_one_currency() {
    let response = app()
        .oneshot(get("/api/currency/byNumCode?date=2024-01-10&currencyCode=840"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    let rates = json["currencyRates"].as_array().unwrap();
    assert_eq!(rates.len(), 1);
    assert_eq!(rates[0]["charCode"], "USD");
    assert_eq!(rates[0]["numericCode"], 840);
}

#[tokio::test]
async fn char_filter_is_case_insensitive() {
    let response = app()
        .oneshot(get(
            "/api/currency/byCharCode?date=2024-01-10&currencyCharCode=usd",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["currencyRates"][0]["charCode"], "USD");
}

#[tokio::test]
async fn unmatched_filter_is_no_content() {
    let response = app()
        .oneshot(get("/api/currency/byNumCode?date=2024-01-10&currencyCode=999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn weekend_date_is_normalized_to_friday() {
    let response = app()
        .oneshot(get("/api/currency/byNumCode?date=2024-01-13"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["date"], "2024-01-12");
}

#[tokio::test]
async fn omitted_date_defaults_to_today() {
    let response = app().oneshot(get("/api/currency/byNumCode")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unparsable_date_is_bad_request() {
    let response = app()
        .oneshot(get("/api/currency/byNumCode?date=13.01.2024"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(json["kind"], "validation");
    assert_eq!(json["code"], 400);
}

#[tokio::test]
async fn unparsable_currency_code_is_bad_request() {
    let response = app()
        .oneshot(get("/api/currency/byNumCode?currencyCode=USD"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(json["kind"], "validation");
}

#[tokio::test]
async fn empty_char_code_is_bad_request() {
    let response = app()
        .oneshot(get("/api/currency/byCharCode?currencyCharCode="))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn upstream_outage_is_service_unavailable() {
    let app = HttpServer::new(CurrencyRateService::new(DownSource, NoCache)).router();

    let response = app
        .oneshot(get("/api/currency/byNumCode?date=2024-01-10"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = json_body(response).await;
    assert_eq!(json["kind"], "unavailable");
    assert_eq!(json["code"], 503);
}
