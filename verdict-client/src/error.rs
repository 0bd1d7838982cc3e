//! Error types for the Verdict clients

use thiserror::Error;
use verdict_core::CycleError;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when calling the review API or the bot API
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error at {endpoint} (status {status}): {message}")]
    ApiError {
        /// Endpoint label (never carries credentials)
        endpoint: String,
        /// HTTP status code
        status: u16,
        /// Error body returned by the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The bot API accepted the request but refused to deliver
    #[error("Message rejected: {0}")]
    Rejected(String),
}

impl ClientError {
    /// Create an API error from endpoint, status code and message
    pub fn api_error(endpoint: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            endpoint: endpoint.into(),
            status,
            message: message.into(),
        }
    }
}

/// Maps review API failures onto the fetch stage kinds
///
/// `Rejected` only comes from the Bot API, whose failures stay inside the
/// notifier; it still maps to `Transport` since delivery never completed.
impl From<ClientError> for CycleError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::RequestFailed(e) => CycleError::Transport(e.to_string()),
            ClientError::ApiError {
                endpoint, status, ..
            } => CycleError::UnavailableEndpoint { endpoint, status },
            ClientError::ParseError(msg) => CycleError::MalformedPayload(msg),
            ClientError::Rejected(msg) => CycleError::Transport(msg),
        }
    }
}
