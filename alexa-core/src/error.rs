//! Error types for the Alexa API client

use thiserror::Error;

/// Result type for API client operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur talking to the Alexa shopping-list API
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport failure or non-2xx status from the remote service
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Cookie file could not be read
    #[error("Failed to read cookie file '{path}': {source}")]
    CookieFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Cookie file is not a JSON array of cookie objects
    #[error("Cookie file '{path}' is not a JSON list of cookie objects: {source}")]
    CookieFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configured base URL does not parse
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Item cannot be deleted or updated without a server-assigned id
    #[error("Cannot modify item '{value}' without a server-assigned id")]
    MissingItemId { value: String },

    /// List response did not contain the expected item structure
    #[error("Unexpected response from list API: {reason}")]
    UnexpectedResponse { reason: String },
}
