//! Line logger that decorates every message with a time label, a severity
//! label and accumulated component tags.
//!
//! Each emitted line has the form
//!
//! ```text
//! 2023/04/05 06:07:08 [lcl] ERROR:[db][pool] connection refused
//! ```
//!
//! The leading stamp is written by the [`LineWriter`] in local time or UTC;
//! `[lcl]` / `[utc]` is the overridable time label; `ERROR` the overridable
//! severity label; `[db][pool]` the tags added with [`Logger::with_tag`].
//! Without tags the severity label is followed by `": "`.
//!
//! # Quick start
//!
//! ```rust
//! use alogger::{errorf, infoln, Logger};
//!
//! let mut logger = Logger::stderr(true).with_tag("status");
//! logger
//!     .set_severity_labels("INF", "DBG", "WRN", "ERR", "FTL")
//!     .expect("labels are non-empty");
//!
//! infoln!(logger, "service", "ready");
//! errorf!(logger, "{} - {}", 1, "bad thing happened");
//! ```
//!
//! The fatal emitters (`fatalf`, `fatalln`) write their line and then exit
//! the process with status 1.

pub mod label;
pub mod logger;
pub mod macros;
pub mod writer;

#[cfg(test)]
mod test_support;

// Re-export primary public types at the crate root for convenience.
pub use label::{
    LabelError, Severity, SeverityLabels, DEBUG_LABEL, ERROR_LABEL, FATAL_LABEL, INFO_LABEL,
    LOCAL_TIME_LABEL, UTC_TIME_LABEL, WARN_LABEL,
};
pub use logger::{compose_line, Logger, FATAL_EXIT_CODE};
pub use writer::{Clock, LineWriter};
