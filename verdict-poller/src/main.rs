//! Verdict Poller
//!
//! A long-running daemon that watches the homework review API and reports
//! status changes to a Telegram chat.
//!
//! Architecture:
//! - Configuration: Credentials and endpoints from the environment (or `.env`)
//! - Repositories: Adapters over the review API and Bot API clients
//! - Services: Best-effort notification delivery
//! - Scheduler: The poll/detect-change/notify loop
//!
//! The poller fetches the latest homework status every interval, notifies
//! once per status change and reports failed cycles to the same chat.

mod config;
mod logging;
mod repository;
mod scheduler;
mod service;

use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};

use crate::config::Config;
use crate::repository::{HomeworkRepository, HttpHomeworkRepository, TelegramMessageRepository};
use crate::scheduler::StatusPoller;
use crate::service::BotNotificationService;
use verdict_client::{PracticumClient, TelegramClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine, the variables may come from the environment
    dotenvy::dotenv().ok();

    logging::init(&config::log_file_path())?;

    info!("Starting Verdict poller");

    let mut poller = build_poller(
        |key| std::env::var(key).ok(),
        |config: &Config| -> Arc<dyn HomeworkRepository> {
            Arc::new(HttpHomeworkRepository::new(PracticumClient::new(
                config.practicum_endpoint.clone(),
                config.practicum_token.clone(),
            )))
        },
    )?;

    if let Err(e) = poller.run().await {
        error!("Poller error: {}", e);
        return Err(e);
    }

    Ok(())
}

/// Loads configuration and wires the poller
///
/// Nothing is built if a credential is missing or the configuration is
/// invalid: the failure is logged as critical and returned, so no request
/// is ever sent.
///
/// # Arguments
/// * `lookup` - Source of configuration variables
/// * `homeworks` - Builds the review API repository from the loaded config
fn build_poller<L, H>(lookup: L, homeworks: H) -> Result<StatusPoller>
where
    L: Fn(&str) -> Option<String>,
    H: FnOnce(&Config) -> Arc<dyn HomeworkRepository>,
{
    let config = match Config::from_lookup(lookup).and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            error!(critical = true, "{:#}. Program stopped.", e);
            return Err(e);
        }
    };
    info!("Loaded configuration: {:?}", config);

    let telegram = TelegramClient::new(
        config.telegram_api_url.clone(),
        config.telegram_token.clone(),
    );
    let messages = Arc::new(TelegramMessageRepository::new(telegram));
    let notifier = Arc::new(BotNotificationService::new(
        messages,
        config.telegram_chat_id.clone(),
    ));
    let homeworks = homeworks(&config);

    info!("Clients initialized");

    Ok(StatusPoller::new(config.retry_interval, homeworks, notifier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{Value as JsonValue, json};
    use std::collections::HashMap;
    use std::io;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use verdict_core::CycleResult;

    /// Shared buffer the test subscriber writes into
    #[derive(Clone, Default)]
    struct LogCapture(Arc<Mutex<Vec<u8>>>);

    impl LogCapture {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for LogCapture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct CountingHomeworks {
        fetches: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl HomeworkRepository for CountingHomeworks {
        async fn fetch_statuses(&self, _from_date: i64) -> CycleResult<JsonValue> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(json!({"homeworks": [], "current_date": 0}))
        }
    }

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    /// Runs `build_poller` under a capturing subscriber
    ///
    /// Returns the result, the captured log, how many times the repository
    /// factory ran and how many fetches were made.
    fn start(vars: &[(&str, &str)]) -> (Result<StatusPoller>, String, usize, usize) {
        let capture = LogCapture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let fetches = Arc::new(AtomicUsize::new(0));
        let built = AtomicUsize::new(0);

        let result = tracing::subscriber::with_default(subscriber, || {
            build_poller(lookup_from(vars), |_: &Config| -> Arc<dyn HomeworkRepository> {
                built.fetch_add(1, Ordering::SeqCst);
                Arc::new(CountingHomeworks {
                    fetches: Arc::clone(&fetches),
                })
            })
        });

        (
            result,
            capture.contents(),
            built.load(Ordering::SeqCst),
            fetches.load(Ordering::SeqCst),
        )
    }

    #[test]
    fn test_missing_bot_token_stops_before_any_request() {
        let (result, logs, built, fetches) = start(&[
            ("PRACTICUM_TOKEN", "api-token"),
            ("TELEGRAM_CHAT_ID", "123456"),
        ]);

        let err = result.err().expect("startup should fail");
        assert!(err.to_string().contains("TELEGRAM_TOKEN"));

        assert!(logs.contains("ERROR"));
        assert!(logs.contains("TELEGRAM_TOKEN"));
        assert!(logs.contains("Program stopped"));
        assert!(logs.contains("critical=true"));

        assert_eq!(built, 0);
        assert_eq!(fetches, 0);
    }

    #[test]
    fn test_invalid_endpoint_stops_before_any_request() {
        let (result, logs, built, fetches) = start(&[
            ("PRACTICUM_TOKEN", "api-token"),
            ("TELEGRAM_TOKEN", "bot-token"),
            ("TELEGRAM_CHAT_ID", "123456"),
            ("TELEGRAM_API_URL", "api.telegram.org"),
        ]);

        assert!(result.is_err());
        assert!(logs.contains("critical=true"));
        assert_eq!(built, 0);
        assert_eq!(fetches, 0);
    }

    #[test]
    fn test_complete_config_builds_poller_without_fetching() {
        let (result, logs, built, fetches) = start(&[
            ("PRACTICUM_TOKEN", "api-token"),
            ("TELEGRAM_TOKEN", "bot-token"),
            ("TELEGRAM_CHAT_ID", "123456"),
        ]);

        assert!(result.is_ok());
        assert!(logs.contains("Clients initialized"));
        assert!(!logs.contains("bot-token"));
        assert!(!logs.contains("api-token"));
        assert_eq!(built, 1);
        assert_eq!(fetches, 0);
    }
}
