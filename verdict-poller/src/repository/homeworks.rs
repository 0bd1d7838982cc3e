//! Homeworks repository
//!
//! Fetches raw homework status payloads from the review API.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use verdict_client::PracticumClient;
use verdict_core::{CycleError, CycleResult};

/// Repository trait for the review API
#[async_trait]
pub trait HomeworkRepository: Send + Sync {
    /// Fetches homework statuses changed since `from_date`
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp in seconds
    ///
    /// # Returns
    /// The raw payload, or one of the fetch failure kinds
    /// ([`CycleError::Transport`], [`CycleError::UnavailableEndpoint`],
    /// [`CycleError::MalformedPayload`])
    async fn fetch_statuses(&self, from_date: i64) -> CycleResult<JsonValue>;
}

/// HTTP implementation of HomeworkRepository
pub struct HttpHomeworkRepository {
    client: PracticumClient,
}

impl HttpHomeworkRepository {
    /// Creates a new HTTP homework repository
    pub fn new(client: PracticumClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HomeworkRepository for HttpHomeworkRepository {
    async fn fetch_statuses(&self, from_date: i64) -> CycleResult<JsonValue> {
        self.client
            .homework_statuses(Some(from_date))
            .await
            .map_err(CycleError::from)
    }
}
