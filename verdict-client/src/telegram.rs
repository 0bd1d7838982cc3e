//! Telegram Bot API

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::handle_response;

const SEND_MESSAGE: &str = "sendMessage";

/// HTTP client for the Telegram Bot API
#[derive(Clone)]
pub struct TelegramClient {
    /// Base URL of the Bot API (e.g., "https://api.telegram.org")
    base_url: String,
    /// Bot token, part of every method URL
    token: String,
    /// HTTP client instance
    client: Client,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct BotReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramClient {
    /// Create a new Bot API client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the Bot API
    /// * `token` - Bot token issued by BotFather
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(base_url, token, Client::new())
    }

    /// Create a new Bot API client with a custom HTTP client
    pub fn with_client(base_url: impl Into<String>, token: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Send a plain text message to a chat
    ///
    /// # Arguments
    /// * `chat_id` - Numeric chat id or `@channel` name
    /// * `text` - Message text
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        // The token is part of the URL; keep it out of errors
        let url = format!("{}/bot{}/{}", self.base_url, self.token, SEND_MESSAGE);

        debug!("Sending message to chat {}", chat_id);

        let response = self
            .client
            .post(&url)
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.without_url()))?;

        let reply: BotReply = handle_response(SEND_MESSAGE, response).await?;

        if !reply.ok {
            return Err(ClientError::Rejected(
                reply
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            ));
        }

        Ok(())
    }
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{closed_port_url, spawn_server};
    use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
    use serde_json::{Value as JsonValue, json};
    use std::sync::{Arc, Mutex};

    type Sent = Arc<Mutex<Vec<JsonValue>>>;

    async fn record_message(State(sent): State<Sent>, Json(body): Json<JsonValue>) -> Json<JsonValue> {
        sent.lock().unwrap().push(body);
        Json(json!({"ok": true, "result": {"message_id": 1}}))
    }

    #[test]
    fn test_debug_hides_token_and_trims_slash() {
        let client = TelegramClient::new("https://api.telegram.org/", "bot-token");
        let rendered = format!("{:?}", client);
        assert!(rendered.contains("\"https://api.telegram.org\""));
        assert!(!rendered.contains("bot-token"));
    }

    #[tokio::test]
    async fn test_send_message_posts_chat_and_text() {
        let sent: Sent = Arc::default();
        let app = Router::new()
            .route("/botbot-token/sendMessage", post(record_message))
            .with_state(Arc::clone(&sent));
        let base = spawn_server(app).await;
        let client = TelegramClient::new(base, "bot-token");

        client.send_message("42", "hello").await.unwrap();

        let sent = sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], json!({"chat_id": "42", "text": "hello"}));
    }

    #[tokio::test]
    async fn test_error_status_is_api_error_without_token() {
        let app = Router::new().route(
            "/botbot-token/sendMessage",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    r#"{"ok":false,"description":"Bad Request: chat not found"}"#,
                )
            }),
        );
        let base = spawn_server(app).await;
        let client = TelegramClient::new(base, "bot-token");

        let err = client.send_message("42", "hello").await.unwrap_err();

        assert!(matches!(err, ClientError::ApiError { status: 400, .. }));
        assert!(!err.to_string().contains("bot-token"));
    }

    #[tokio::test]
    async fn test_ok_false_is_rejected() {
        let app = Router::new().route(
            "/botbot-token/sendMessage",
            post(|| async { Json(json!({"ok": false, "description": "blocked"})) }),
        );
        let base = spawn_server(app).await;
        let client = TelegramClient::new(base, "bot-token");

        let err = client.send_message("42", "hello").await.unwrap_err();

        assert!(matches!(err, ClientError::Rejected(ref d) if d == "blocked"));
    }

    #[tokio::test]
    async fn test_unreachable_api_hides_token() {
        let client = TelegramClient::new(closed_port_url().await, "bot-token");

        let err = client.send_message("42", "hello").await.unwrap_err();

        assert!(matches!(err, ClientError::RequestFailed(_)));
        assert!(!err.to_string().contains("bot-token"));
    }
}
