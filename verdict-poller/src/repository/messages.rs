//! Messages repository
//!
//! Delivers plain text messages through the Telegram Bot API.

use anyhow::{Context, Result};
use async_trait::async_trait;
use verdict_client::TelegramClient;

/// Repository trait for the messaging bot
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Sends `text` to `chat_id`
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<()>;
}

/// Telegram implementation of MessageRepository
pub struct TelegramMessageRepository {
    client: TelegramClient,
}

impl TelegramMessageRepository {
    /// Creates a new Telegram message repository
    pub fn new(client: TelegramClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MessageRepository for TelegramMessageRepository {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        self.client
            .send_message(chat_id, text)
            .await
            .context("Failed to send Telegram message")
    }
}
