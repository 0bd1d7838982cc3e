//! Notification service
//!
//! Best-effort delivery of operator messages to a single fixed chat.
//! Delivery failures are logged and swallowed.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error};

use crate::repository::MessageRepository;

/// Service trait for operator notifications
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Delivers `text` to the configured destination
    ///
    /// # Returns
    /// `true` if the message was delivered. A failed delivery is logged,
    /// never raised.
    async fn notify(&self, text: &str) -> bool;
}

/// Bot-backed implementation of NotificationService
pub struct BotNotificationService {
    messages: Arc<dyn MessageRepository>,
    chat_id: String,
}

impl BotNotificationService {
    /// Creates a notification service bound to one chat
    ///
    /// # Arguments
    /// * `messages` - Messaging repository used for delivery
    /// * `chat_id` - Destination chat id
    pub fn new(messages: Arc<dyn MessageRepository>, chat_id: String) -> Self {
        Self { messages, chat_id }
    }
}

#[async_trait]
impl NotificationService for BotNotificationService {
    async fn notify(&self, text: &str) -> bool {
        match self.messages.send_message(&self.chat_id, text).await {
            Ok(()) => {
                debug!("Message delivered to chat {}: {}", self.chat_id, text);
                true
            }
            Err(e) => {
                error!("Failed to send message to chat {}: {:#}", self.chat_id, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FakeMessages {
        fail: bool,
        sent: Mutex<Vec<(String, String)>>,
    }

    impl FakeMessages {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                fail,
                sent: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl MessageRepository for FakeMessages {
        async fn send_message(&self, chat_id: &str, text: &str) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("bot API unreachable");
            }
            self.sent
                .lock()
                .unwrap()
                .push((chat_id.to_string(), text.to_string()));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_delivers_to_configured_chat() {
        let messages = FakeMessages::new(false);
        let notifier = BotNotificationService::new(messages.clone(), "123456".to_string());

        assert!(notifier.notify("hello").await);

        let sent = messages.sent.lock().unwrap();
        assert_eq!(*sent, vec![("123456".to_string(), "hello".to_string())]);
    }

    #[tokio::test]
    async fn test_delivery_failure_is_swallowed() {
        let messages = FakeMessages::new(true);
        let notifier = BotNotificationService::new(messages.clone(), "123456".to_string());

        assert!(!notifier.notify("hello").await);
        assert!(messages.sent.lock().unwrap().is_empty());
    }
}
