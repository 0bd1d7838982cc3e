//! Verdict Core
//!
//! Core types and pure processing stages for the homework review watcher.
//!
//! This crate contains:
//! - Domain types: homework statuses, records and the verdict catalog
//! - Validation: shape checks on the review API payload
//! - Formatting: turning a homework record into a notification text
//! - Errors: the failure kinds a single poll cycle can produce

pub mod domain;
pub mod error;
pub mod format;
pub mod validation;

pub use error::{CycleError, CycleResult};
