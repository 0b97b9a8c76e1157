//! Error types for the mail.tm generator.

use thiserror::Error;

/// Errors that can occur while talking to mail.tm or touching the local store.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed before a response was received.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote answered with a non-success status.
    ///
    /// `body` carries the raw response text (truncated) so callers can show it.
    #[error("HTTP {status} for {url}: {body}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// Request URL.
        url: String,
        /// Raw response body snippet.
        body: String,
    },

    /// The response parsed as JSON but lacked an expected field.
    #[error("Unexpected response: {msg}")]
    ResponseParseContext {
        /// Description of what was missing.
        msg: String,
    },

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// A header value could not be built (e.g. a token with control characters).
    #[error("Invalid header value: {0}")]
    HeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    /// Local file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Replacing the store file after a rewrite failed.
    #[error("Failed to replace store file: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// Invalid runtime configuration.
    #[error("Invalid configuration: {msg}")]
    Config {
        /// Description of the offending setting.
        msg: String,
    },

    /// No domains available.
    #[error("No domains available")]
    NoDomains,
}
