//! Homework review API

use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::handle_response;

/// HTTP client for the homework status endpoint
#[derive(Clone)]
pub struct PracticumClient {
    /// Full URL of the status endpoint
    endpoint: String,
    /// OAuth token sent with every request
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new review API client
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the homework status endpoint
    /// * `token` - OAuth token of the student account
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new review API client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Fetch homework statuses changed since `from_date`
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp in seconds; defaults to now
    ///
    /// # Returns
    /// The raw JSON payload. Its shape is not checked here.
    ///
    /// # Errors
    /// * [`ClientError::RequestFailed`] if the request could not complete
    /// * [`ClientError::ApiError`] if the status code is not 200
    /// * [`ClientError::ParseError`] if the body is not JSON
    pub async fn homework_statuses(&self, from_date: Option<i64>) -> Result<JsonValue> {
        let from_date = from_date.unwrap_or_else(|| chrono::Utc::now().timestamp());

        debug!("Requesting homework statuses from_date={}", from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        // Only 200 counts, other 2xx codes are treated as unavailability
        if response.status() != reqwest::StatusCode::OK {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::api_error(&self.endpoint, status, body));
        }

        handle_response(&self.endpoint, response).await
    }
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .finish()
    }
}
