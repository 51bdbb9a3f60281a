/*!
 * Error types for the word collector.
 *
 * This module contains custom error types for the different layers of the
 * application, using the thiserror crate for ergonomic error definitions.
 * Library functions return `anyhow::Result`; callers that need to tell the
 * cases apart downcast to [`CollectorError`].
 */

use thiserror::Error;

/// Errors that can occur when talking to the dictionary provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),
}

/// Errors raised by the caching and ranking engine
#[derive(Error, Debug)]
pub enum CollectorError {
    /// An empty or otherwise unusable word reached the engine boundary
    #[error("Invalid word: {0:?}")]
    InvalidWord(String),

    /// A day identifier that is not in canonical `YYYY-MM-DD` form
    #[error("Invalid day: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// The persistent store is missing, unreadable or of an unknown version
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl CollectorError {
    /// Whether the error was caused by bad caller input rather than the store
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::InvalidWord(_) | Self::InvalidDate(_))
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_connect() || error.is_timeout() {
            Self::ConnectionError(error.to_string())
        } else if error.is_decode() {
            Self::ParseError(error.to_string())
        } else {
            Self::RequestFailed(error.to_string())
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(error: serde_json::Error) -> Self {
        Self::ParseError(error.to_string())
    }
}
