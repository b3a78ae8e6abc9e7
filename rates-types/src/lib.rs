//! # Rates Types
//!
//! Domain types and port traits for the currency rates gateway.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain` - Pure domain types (CurrencyRate, CurrencyRateSet, RateFilter)
//! - `ports` - Trait definitions that adapters must implement
//! - `error` - Domain and application error types

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{CurrencyRate, CurrencyRateSet, RateFilter};
pub use error::{AppError, DomainError};
pub use ports::{CacheError, RateCache, RateSource, SourceError};
