use thiserror::Error;

/// Failures that prevent a response from being obtained at all.
///
/// A non-2xx status is not an error here; it comes back in
/// [`ApiResponse`](super::ApiResponse) for the caller to inspect.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Invalid URL '{url}'")]
    InvalidUrl { url: String },

    #[error("Request to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
