//! Stockfolio Core - holdings store, valuation engine and input validation.
//!
//! This crate contains the core business logic for Stockfolio.
//! It is storage-agnostic and defines the key-value repository trait that is
//! implemented by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod utils;

// Re-export common types from the portfolio module
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
