//! Error types for fetching and transforming income-statement data.
//!
//! This module defines [`DataError`] which covers all error cases that can
//! occur when fetching reports from a provider or building the record table.

use thiserror::Error;

/// Errors that can occur while fetching or transforming income-statement data.
#[derive(Error, Debug)]
pub enum DataError {
    /// Transport-level failure before any HTTP status was received.
    #[error("Network error: {0}")]
    Network(String),

    /// The upstream API answered with a non-200 status.
    ///
    /// Rate limiting surfaces here too (status 429).
    #[error("HTTP error: status {status}")]
    Http {
        /// The HTTP status code of the response.
        status: u16,
    },

    /// The response was valid JSON but did not have the expected shape,
    /// e.g. a rate-limit note instead of the report list.
    #[error("Schema error: {0}")]
    Schema(String),

    /// Error parsing a response body or a report's period-end date.
    #[error("Parse error: {0}")]
    Parse(String),

    /// An invalid parameter was provided by the caller.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Missing or invalid runtime configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type alias using [`DataError`].
pub type Result<T> = std::result::Result<T, DataError>;
