//! `ralph-stream` core library
//!
//! Turns Claude Code `stream-json` output into terminal lines:
//! - NDJSON classification into typed records
//! - Line rendering per record
//! - Streaming dispatcher with per-line flush
//! - Shared error and tracing setup

pub mod error;
pub mod ndjson;
pub mod render;
pub mod stream;
pub mod tracing_init;

pub use error::{Error, Result};
pub use stream::{StreamStats, pump};
