use std::fmt;
use std::io::{self, Write};

use crate::label::{LabelError, Severity, SeverityLabels, LOCAL_TIME_LABEL, UTC_TIME_LABEL};
use crate::writer::{Clock, LineWriter};

/// Exit status used by the fatal emitters.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Decorates lines with a time label, a severity label and accumulated tags
/// before handing them to a [`LineWriter`].
///
/// Configuration (`set_*`, `add_tag`, `with_tag`) needs `&mut self`, emission
/// only `&self`: configure a logger fully, then share it by reference.
#[derive(Debug)]
pub struct Logger {
    labels: SeverityLabels,
    local_time: bool,
    time_label: String,
    tags: String,
    writer: LineWriter,
}

impl Logger {
    /// Create a logger writing to `sink`, or to standard error when `sink`
    /// is `None`.
    ///
    /// `local_time` selects local wall-clock stamps and the `[lcl]` label;
    /// otherwise lines are stamped in UTC and labelled `[utc]`.
    pub fn new(sink: Option<Box<dyn Write + Send>>, local_time: bool) -> Self {
        let sink = sink.unwrap_or_else(|| Box::new(io::stderr()));
        let (clock, time_label) = if local_time {
            (Clock::Local, LOCAL_TIME_LABEL)
        } else {
            (Clock::Utc, UTC_TIME_LABEL)
        };

        Self {
            labels: SeverityLabels::default(),
            local_time,
            time_label: time_label.to_string(),
            tags: String::new(),
            writer: LineWriter::new(sink, clock),
        }
    }

    /// Create a logger over any owned writer.
    pub fn with_writer<W>(sink: W, local_time: bool) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::new(Some(Box::new(sink)), local_time)
    }

    /// Create a logger writing to standard error.
    pub fn stderr(local_time: bool) -> Self {
        Self::new(None, local_time)
    }

    /// Override the five severity labels.
    ///
    /// Every label must be non-empty. All arguments are checked before any
    /// label is replaced, so on error the logger keeps its previous labels
    /// and the error names the first empty one.
    pub fn set_severity_labels(
        &mut self,
        info: &str,
        debug: &str,
        warn: &str,
        error: &str,
        fatal: &str,
    ) -> Result<(), LabelError> {
        self.labels = SeverityLabels::new(info, debug, warn, error, fatal)?;
        tracing::debug!(labels = ?self.labels, "severity labels replaced");
        Ok(())
    }

    /// Install an already validated label set.
    pub fn set_labels(&mut self, labels: SeverityLabels) {
        self.labels = labels;
    }

    /// The active severity labels.
    pub fn labels(&self) -> &SeverityLabels {
        &self.labels
    }

    /// Override the time label. Only the argument matching the clock chosen
    /// at construction is kept; the other is ignored.
    pub fn set_time_labels(&mut self, local_label: &str, utc_label: &str) {
        self.time_label = if self.local_time {
            local_label.to_string()
        } else {
            utc_label.to_string()
        };
    }

    /// The active time label, `[lcl]` or `[utc]` unless overridden.
    pub fn time_label(&self) -> &str {
        &self.time_label
    }

    /// Whether lines are stamped in local time rather than UTC.
    pub fn is_local_time(&self) -> bool {
        self.local_time
    }

    /// Append `[tag]` to the tag prefix. Empty tags are ignored.
    pub fn add_tag(&mut self, tag: impl AsRef<str>) -> &mut Self {
        let tag = tag.as_ref();
        if !tag.is_empty() {
            self.tags.push('[');
            self.tags.push_str(tag);
            self.tags.push(']');
        }
        self
    }

    /// Builder form of [`add_tag`](Self::add_tag).
    pub fn with_tag(mut self, tag: impl AsRef<str>) -> Self {
        self.add_tag(tag);
        self
    }

    /// The accumulated tag prefix, e.g. `[db][pool]`; empty without tags.
    pub fn tags(&self) -> &str {
        &self.tags
    }

    /// Emit a formatted message at info severity.
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Info, &args.to_string());
    }

    /// Emit the arguments, space separated, at info severity.
    pub fn infoln(&self, args: &[&dyn fmt::Display]) {
        self.emit(Severity::Info, &join_spaced(args));
    }

    /// Emit a formatted message at debug severity.
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Debug, &args.to_string());
    }

    /// Emit the arguments, space separated, at debug severity.
    pub fn debugln(&self, args: &[&dyn fmt::Display]) {
        self.emit(Severity::Debug, &join_spaced(args));
    }

    /// Emit a formatted message at warning severity.
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Warn, &args.to_string());
    }

    /// Emit the arguments, space separated, at warning severity.
    pub fn warnln(&self, args: &[&dyn fmt::Display]) {
        self.emit(Severity::Warn, &join_spaced(args));
    }

    /// Emit a formatted message at error severity.
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Error, &args.to_string());
    }

    /// Emit the arguments, space separated, at error severity.
    pub fn errorln(&self, args: &[&dyn fmt::Display]) {
        self.emit(Severity::Error, &join_spaced(args));
    }

    /// Write the line, then exit the process with [`FATAL_EXIT_CODE`].
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.emit(Severity::Fatal, &args.to_string());
        std::process::exit(FATAL_EXIT_CODE)
    }

    /// Write the line, then exit the process with [`FATAL_EXIT_CODE`].
    pub fn fatalln(&self, args: &[&dyn fmt::Display]) -> ! {
        self.emit(Severity::Fatal, &join_spaced(args));
        std::process::exit(FATAL_EXIT_CODE)
    }

    /// Emit at a severity chosen at runtime. `Severity::Fatal` exits the
    /// process like [`fatalf`](Self::fatalf).
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        match severity {
            Severity::Fatal => self.fatalf(args),
            _ => self.emit(severity, &args.to_string()),
        }
    }

    fn emit(&self, severity: Severity, message: &str) {
        let line = compose_line(
            &self.time_label,
            self.labels.get(severity),
            &self.tags,
            message,
        );
        self.writer.write_line(&line);
    }
}

/// Lay out one log line (without the timestamp).
///
/// `<time> <severity>: <message>` when `tags` is empty, otherwise
/// `<time> <severity>:<tags> <message>`.
pub fn compose_line(time_label: &str, severity_label: &str, tags: &str, message: &str) -> String {
    if tags.is_empty() {
        format!("{time_label} {severity_label}: {message}")
    } else {
        format!("{time_label} {severity_label}:{tags} {message}")
    }
}

fn join_spaced(args: &[&dyn fmt::Display]) -> String {
    args.iter()
        .map(|arg| arg.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
