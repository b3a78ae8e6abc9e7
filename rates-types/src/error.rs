//! Error types for the rates gateway.

use rust_decimal::Decimal;

use crate::ports::SourceError;

/// Domain-level errors (invariant violations at construction).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Nominal must be positive, got {0}")]
    NonPositiveNominal(Decimal),

    #[error("Rate must be positive, got {0}")]
    NonPositiveRate(Decimal),

    #[error("Numeric currency code must be positive")]
    ZeroNumericCode,
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes. Only `Unavailable` and
/// `MalformedUpstream` cross the service boundary as failures; cache
/// problems are absorbed inside the service and never appear here.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("External service unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed upstream response: {0}")]
    MalformedUpstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::BadRequest(_) => 400,
            // Malformed upstream data is as unusable as an outage; neither
            // yields partial results.
            AppError::Unavailable(_) | AppError::MalformedUpstream(_) => 503,
            AppError::Internal(_) => 500,
        }
    }

    /// Stable discriminator for error bodies, independent of the
    /// human-readable message.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "validation",
            AppError::Unavailable(_) | AppError::MalformedUpstream(_) => "unavailable",
            AppError::Internal(_) => "internal",
        }
    }
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Unavailable(msg) => AppError::Unavailable(msg),
            SourceError::Malformed(msg) => AppError::MalformedUpstream(msg),
        }
    }
}
