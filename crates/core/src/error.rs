//! Error types for Jisho operations.
//!
//! This module defines [`JishoError`], which covers transport failures,
//! undecodable API bodies and local input problems. Pages that simply lack a
//! section, or queries the site does not know, are not errors: they surface
//! as empty fields or `found: false` records.
//!
//! # Example
//!
//! ```rust
//! use jisho_core::{JishoError, Result};
//!
//! fn require_term(term: &str) -> Result<&str> {
//!     if term.is_empty() {
//!         return Err(JishoError::InvalidUrl("empty search term".to_string()));
//!     }
//!     Ok(term)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fetching and extraction operations.
///
/// # Example
///
/// ```rust,no_run
/// use jisho_core::{Jisho, JishoError};
///
/// # async fn run() {
/// let jisho = Jisho::new();
/// match jisho.search_for_kanji("車").await {
///     Ok(record) => println!("found: {}", record.found),
///     Err(JishoError::Timeout { timeout }) => println!("gave up after {timeout}s"),
///     Err(e) => println!("Error: {}", e),
/// }
/// # }
/// ```
#[derive(Error, Debug)]
pub enum JishoError {
    /// HTTP request errors from reqwest.
    ///
    /// Network errors, DNS failures, connection resets and body decoding
    /// problems end up here.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// The server answered with a non-success status.
    ///
    /// The word page endpoint turns a 404 into a not-found record instead,
    /// every other endpoint and status lands here.
    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// Invalid URL or base endpoint.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML selector errors.
    ///
    /// Returned by the DOM wrapper when a CSS selector does not parse.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// The word search API returned a body that is not the expected JSON.
    #[error("Failed to decode API response: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File not found.
    ///
    /// Returned when a saved page is read from a path that doesn't exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O errors while reading saved pages or stdin.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for JishoError.
pub type Result<T> = std::result::Result<T, JishoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = JishoError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_http_status_error() {
        let err = JishoError::HttpStatus { status: 503, url: "https://jisho.org/word/x".to_string() };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("jisho.org/word/x"));
    }

    #[test]
    fn test_timeout_error() {
        let err = JishoError::Timeout { timeout: 10 };
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_json_error_conversion() {
        let err: JishoError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, JishoError::JsonError(_)));
    }
}
