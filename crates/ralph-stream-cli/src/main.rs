//! ralph-stream CLI
//!
//! Reads Claude Code `stream-json` output on stdin and prints a
//! human-readable transcript on stdout as events arrive.

use std::io;

use clap::Parser;
use tracing::{debug, info};

use ralph_stream_core::pump;
use ralph_stream_core::tracing_init::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "ralph-stream")]
#[command(version, about = "Render Claude stream-json events as terminal lines", long_about = None)]
struct Cli {
    /// Emit stderr diagnostics as JSON lines
    #[arg(long, env = "RALPH_STREAM_LOG_JSON")]
    log_json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing("ralph_stream=warn", cli.log_json);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting ralph-stream");

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let stats = pump(stdin, &mut stdout)?;

    debug!(
        lines = stats.lines,
        malformed = stats.malformed,
        emitted = stats.emitted,
        "Stream finished"
    );
    Ok(())
}
