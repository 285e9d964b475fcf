use thiserror::Error;

/// Failure to complete the request/response cycle with the decode service.
///
/// These never reach the user verbatim; the controller replaces them with a
/// fixed message and only logs the details.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid decode service URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to send request to decode service: {0}")]
    Send(#[source] reqwest::Error),

    #[error("failed to read decode service response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("malformed decode service response (status {status}): {source}; body: {body}")]
    Json {
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },
}
