//! Error types for sitegauge operations.
//!
//! This module defines the main error type [`SitegaugeError`] which represents
//! all possible errors that can occur during fetching, parsing, and report
//! aggregation.
//!
//! Rule evaluation itself never fails: a missing title or absent viewport tag
//! is a [`Finding`](crate::report::Finding), not an error.
//!
//! # Example
//!
//! ```rust
//! use sitegauge_core::{SitegaugeError, Result};
//!
//! fn require_http(url: &str) -> Result<()> {
//!     if !url.starts_with("http") {
//!         return Err(SitegaugeError::InvalidUrl(url.to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Main error type for analysis operations.
///
/// This enum represents all possible errors that can occur during HTTP
/// fetching, HTML parsing, file I/O, and report aggregation.
#[derive(Error, Debug)]
pub enum SitegaugeError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems. None of these are retried; the
    /// fetcher makes a single best-effort attempt.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed or is malformed. Surfaced before
    /// any network I/O is attempted.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors.
    ///
    /// The document parser itself is lenient and never fails on malformed
    /// markup; this variant covers invalid CSS selectors and serialization
    /// problems.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// Configuration errors.
    ///
    /// Returned for inconsistent analysis configuration, e.g. category
    /// weights that sum to zero, or an aggregation input that is missing a
    /// category result.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// File write errors.
    ///
    /// Wraps standard I/O errors for file operations.
    #[error("Failed to write to file: {0}")]
    WriteError(#[from] std::io::Error),
}

/// Result type alias for SitegaugeError.
///
/// This is a convenience alias for `std::result::Result<T, SitegaugeError>`.
pub type Result<T> = std::result::Result<T, SitegaugeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SitegaugeError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_timeout_error() {
        let err = SitegaugeError::Timeout { timeout: 10 };
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_config_error() {
        let err = SitegaugeError::ConfigError("weights sum to zero".to_string());
        assert!(err.to_string().contains("weights sum to zero"));
    }
}
