//! Streaming dispatcher.
//!
//! Reads NDJSON lines one at a time, renders each record and writes the
//! resulting lines immediately, flushing after every line so a downstream
//! terminal sees output as the session progresses.

use std::io::{BufRead, Write};

use tracing::{debug, trace};

use crate::error::Result;
use crate::ndjson::parse_line;
use crate::render::render;

/// Counters describing one run of [`pump`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Input lines read, blank ones included.
    pub lines: u64,
    /// Lines skipped because they were empty or whitespace.
    pub blank: u64,
    /// Lines skipped because they were not valid JSON.
    pub malformed: u64,
    /// Lines decoded into a record.
    pub records: u64,
    /// Output lines written.
    pub emitted: u64,
}

/// Translate every line of `reader` into terminal lines on `writer`.
///
/// Malformed and blank lines are skipped. Returns at end-of-stream; I/O
/// errors on either side are returned to the caller.
pub fn pump<R, W>(reader: R, writer: &mut W) -> Result<StreamStats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = StreamStats::default();

    for line in reader.lines() {
        let line = line?;
        stats.lines += 1;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            stats.blank += 1;
            continue;
        }

        let record = match parse_line(trimmed) {
            Ok(record) => record,
            Err(e) => {
                debug!(line = stats.lines, error = %e, "Skipping malformed line");
                stats.malformed += 1;
                continue;
            }
        };
        stats.records += 1;
        trace!(line = stats.lines, kind = record.kind(), "Dispatching record");

        for out in render(&record) {
            writeln!(writer, "{out}")?;
            writer.flush()?;
            stats.emitted += 1;
        }
    }

    debug!(?stats, "End of stream");
    Ok(stats)
}
