//! Tracing/logging initialization.
//!
//! Diagnostics always go to stderr: stdout carries the rendered stream and
//! must contain nothing else.

use std::io;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialise the global tracing subscriber.
///
/// * `default_filter` -- directive used when `RUST_LOG` is unset or invalid
///   (e.g. `"ralph_stream=warn"`).
/// * `log_json` -- emit one JSON object per diagnostic instead of the
///   human-readable format.
pub fn init_tracing(default_filter: &str, log_json: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let stderr_layer = fmt::layer().with_writer(io::stderr);
    let registry = tracing_subscriber::registry().with(env_filter);

    if log_json {
        registry.with(stderr_layer.json()).init();
    } else {
        registry.with(stderr_layer).init();
    }
}
