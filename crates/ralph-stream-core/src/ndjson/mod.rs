//! NDJSON parser for Claude Code stream-json output.
//!
//! This module classifies newline-delimited JSON events into typed
//! records, implementing a tolerant reader pattern.

mod parser;
mod types;

pub use parser::{parse_line, parse_value};
pub use types::*;
