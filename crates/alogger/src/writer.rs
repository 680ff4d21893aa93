use std::io::{self, Write};
use std::sync::Mutex;

use chrono::{DateTime, Local, TimeZone, Utc};

/// Layout of the standard stamp written ahead of every line.
const STAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Which wall clock stamps each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    Local,
    Utc,
}

impl Clock {
    /// The current time rendered in the standard stamp layout.
    pub fn stamp(self) -> String {
        match self {
            Clock::Local => format_stamp(&Local::now()),
            Clock::Utc => format_stamp(&Utc::now()),
        }
    }
}

/// Render `at` as `YYYY/MM/DD HH:MM:SS`.
pub fn format_stamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format(STAMP_FORMAT).to_string()
}

/// Writes whole, timestamped lines to a sink.
///
/// Each call to [`write_line`](Self::write_line) produces exactly one
/// newline-terminated line, issued as a single `write_all` while holding the
/// sink lock, then flushed.
pub struct LineWriter {
    sink: Mutex<Box<dyn Write + Send>>,
    clock: Clock,
}

impl LineWriter {
    pub fn new(sink: Box<dyn Write + Send>, clock: Clock) -> Self {
        Self {
            sink: Mutex::new(sink),
            clock,
        }
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Stamp `line` and append it to the sink.
    ///
    /// A trailing newline is added only when `line` does not already end with
    /// one. I/O failures are reported through `tracing` and the line is lost.
    pub fn write_line(&self, line: &str) {
        let stamp = self.clock.stamp();
        let mut buf = String::with_capacity(stamp.len() + line.len() + 2);
        buf.push_str(&stamp);
        buf.push(' ');
        buf.push_str(line);
        if !buf.ends_with('\n') {
            buf.push('\n');
        }

        if let Err(err) = self.append(buf.as_bytes()) {
            tracing::warn!(%err, "failed to write log line");
        }
    }

    fn append(&self, bytes: &[u8]) -> io::Result<()> {
        // A panic while holding the lock cannot leave a half-written line
        // behind, so a poisoned sink is still usable.
        let mut sink = self.sink.lock().unwrap_or_else(|e| e.into_inner());
        sink.write_all(bytes)?;
        sink.flush()
    }
}

impl std::fmt::Debug for LineWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineWriter")
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}
