//! Verdict HTTP Clients
//!
//! Typed clients for the two remote services the watcher talks to:
//! - [`PracticumClient`]: the homework review API (status polling)
//! - [`TelegramClient`]: the Telegram Bot API (notification delivery)
//!
//! # Example
//!
//! ```no_run
//! use verdict_client::{PracticumClient, TelegramClient};
//!
//! #[tokio::main]
//! async fn main() -> verdict_client::Result<()> {
//!     let practicum = PracticumClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "api-token",
//!     );
//!     let payload = practicum.homework_statuses(None).await?;
//!
//!     let bot = TelegramClient::new("https://api.telegram.org", "bot-token");
//!     bot.send_message("123456", &payload.to_string()).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
mod practicum;
mod telegram;

pub use error::{ClientError, Result};
pub use practicum::PracticumClient;
pub use telegram::TelegramClient;

use serde::de::DeserializeOwned;

/// Handle an API response and deserialize JSON
///
/// Checks the status code and returns an appropriate error if the request
/// failed, or deserializes the response body if successful. `endpoint` is
/// only used to label errors.
pub(crate) async fn handle_response<T: DeserializeOwned>(
    endpoint: &str,
    response: reqwest::Response,
) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::api_error(endpoint, status.as_u16(), error_text));
    }

    response
        .json()
        .await
        .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
}
