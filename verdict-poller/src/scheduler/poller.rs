//! Status poller
//!
//! Polls the review API on a fixed interval and notifies the operator when
//! the latest homework status changes. A failed cycle is reported through
//! the same channel and never stops the loop.

use anyhow::Result;
use std::sync::Arc;
use tokio::time::{self, Duration};
use tracing::{debug, error, info};
use verdict_core::format::format_status;
use verdict_core::validation::check_response;
use verdict_core::{CycleError, CycleResult};

use crate::repository::HomeworkRepository;
use crate::service::NotificationService;

/// Prefix of the diagnostic sent for a failed cycle
const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// What a single poll cycle did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The status message changed and a notification was attempted
    Notified,
    /// The status message matches the last one, nothing was sent
    Unchanged,
    /// A stage failed and a diagnostic was attempted
    Failed(CycleError),
}

/// Poller that watches the latest homework status
pub struct StatusPoller {
    retry_interval: Duration,
    homeworks: Arc<dyn HomeworkRepository>,
    notifier: Arc<dyn NotificationService>,
    /// Message of the last successful cycle
    last_message: Option<String>,
}

impl StatusPoller {
    /// Creates a new status poller with an empty dedup memory
    pub fn new(
        retry_interval: Duration,
        homeworks: Arc<dyn HomeworkRepository>,
        notifier: Arc<dyn NotificationService>,
    ) -> Self {
        Self {
            retry_interval,
            homeworks,
            notifier,
            last_message: None,
        }
    }

    /// Message recorded by the last successful cycle
    #[cfg(test)]
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    /// Starts the polling loop
    ///
    /// Runs until the process is terminated.
    pub async fn run(&mut self) -> Result<()> {
        info!(
            "Starting status poller (interval: {:?})",
            self.retry_interval
        );

        loop {
            let now = chrono::Utc::now().timestamp();

            match self.poll_once(now).await {
                CycleOutcome::Notified => info!("Status change reported"),
                CycleOutcome::Unchanged => debug!("Status unchanged"),
                CycleOutcome::Failed(_) => debug!("Cycle failed, retrying after interval"),
            }

            time::sleep(self.retry_interval).await;
        }
    }

    /// Performs a single poll cycle
    ///
    /// The dedup memory is assigned on every successful cycle and left
    /// untouched on a failed one.
    pub async fn poll_once(&mut self, now: i64) -> CycleOutcome {
        match self.current_message(now).await {
            Ok(message) => {
                let outcome = if self.last_message.as_deref() != Some(message.as_str()) {
                    info!("Homework status changed, sending notification");
                    self.notifier.notify(&message).await;
                    CycleOutcome::Notified
                } else {
                    debug!("No new statuses in response");
                    CycleOutcome::Unchanged
                };

                self.last_message = Some(message);
                outcome
            }
            Err(e) => {
                // Not deduplicated: a persistent failure alerts every cycle
                let diagnostic = format!("{}: {}", FAILURE_PREFIX, e);
                if self.notifier.notify(&diagnostic).await {
                    info!("Failure notification sent");
                }
                error!(fetch = e.is_fetch_error(), "Poll cycle failed: {:?}", e);

                CycleOutcome::Failed(e)
            }
        }
    }

    /// Fetches, validates and formats the latest homework status
    async fn current_message(&self, now: i64) -> CycleResult<String> {
        let payload = self.homeworks.fetch_statuses(now).await?;
        let homework = check_response(&payload)?;
        format_status(homework)
    }
}
