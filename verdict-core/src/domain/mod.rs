//! Core domain types
//!
//! Types shared between the HTTP clients (which produce raw payloads) and
//! the poller (which turns them into notifications).

pub mod homework;
