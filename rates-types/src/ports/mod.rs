//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod cache;
mod source;

pub use cache::{CacheError, RateCache};
pub use source::{RateSource, SourceError};
