//! Error types for strikedown operations.
//!
//! This module defines the main error type [`StrikedownError`] which represents
//! all possible errors that can occur while fetching the library metadata,
//! fetching the takedown list, and building the report.

use thiserror::Error;

/// Main error type for library auditing operations.
///
/// This enum represents all possible errors that can occur during HTTP
/// fetching, GraphQL envelope handling, and CSV parsing.
#[derive(Error, Debug)]
pub enum StrikedownError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// non-success status codes, and other HTTP-related problems.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed or is malformed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The GraphQL response carried an `errors` payload.
    #[error("GraphQL query failed: {0}")]
    GraphQl(String),

    /// The GraphQL response omitted the expected `data` envelope.
    #[error("Invalid GraphQL response: no `data` field")]
    MissingData,

    /// CSV parsing errors.
    ///
    /// Returned when the takedown list export cannot be parsed, typically
    /// due to an unterminated quoted field.
    #[error("Failed to parse CSV: {0}")]
    CsvParse(String),

    /// A spawned chapter fetch task failed to join.
    #[error("Chapter fetch task failed: {0}")]
    TaskJoin(String),
}

/// Result type alias for StrikedownError.
///
/// This is a convenience alias for `std::result::Result<T, StrikedownError>`.
pub type Result<T> = std::result::Result<T, StrikedownError>;
