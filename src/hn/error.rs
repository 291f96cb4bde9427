//! Search API-specific error types.

/// Errors that can occur while searching for stories.
///
/// The stories controller collapses all of these into a single failed
/// status; the variants only exist to make the log useful.
#[derive(Debug, thiserror::Error)]
pub enum HnError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Response body was not valid JSON or did not match the hit model
    #[error("Failed to deserialize API response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Response body has no hits collection
    #[error("Invalid response body: missing '{field}' field")]
    MissingField { field: &'static str },

    /// A hit carried an object ID that is not an integer
    #[error("Invalid object ID: {0}")]
    InvalidObjectId(String),
}
