//! Service layer
//!
//! Services contain the delivery policy of the poller. They use
//! repositories and never let a remote failure escape to the scheduler.
//!
//! All services are trait-based to enable testing and dependency injection.

mod notifier;

// Re-export traits
pub use notifier::NotificationService;

// Re-export implementations
pub use notifier::BotNotificationService;
