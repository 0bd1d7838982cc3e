//! Scheduler layer for the poller
//!
//! This layer owns the polling timer and the last-notified message. It
//! sequences fetch, validation, formatting and notification once per cycle.

pub mod poller;

pub use poller::StatusPoller;
