use std::fmt;
use std::str::FromStr;

pub const INFO_LABEL: &str = "INFO";
pub const DEBUG_LABEL: &str = "DEBUG";
pub const WARN_LABEL: &str = "WARNING";
pub const ERROR_LABEL: &str = "ERROR";
pub const FATAL_LABEL: &str = "FATAL";

/// Decorative marker placed in front of the severity label when the logger
/// stamps lines with local wall-clock time.
pub const LOCAL_TIME_LABEL: &str = "[lcl]";

/// Marker used instead of [`LOCAL_TIME_LABEL`] when stamping in UTC.
pub const UTC_TIME_LABEL: &str = "[utc]";

/// Errors raised while configuring labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
    /// A severity label override was the empty string.
    #[error("invalid {severity} label specified")]
    Empty { severity: Severity },

    /// A severity name could not be parsed.
    #[error("unknown severity: {0:?}")]
    UnknownSeverity(String),
}

/// The importance tier of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Debug,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    /// Every severity, in label-override argument order.
    pub const ALL: [Severity; 5] = [
        Severity::Info,
        Severity::Debug,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Debug => "debug",
            Severity::Warn => "warning",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            "fatal" => Ok(Severity::Fatal),
            _ => Err(LabelError::UnknownSeverity(s.to_string())),
        }
    }
}

/// Display strings for the five severities.
///
/// A value of this type always holds five non-empty labels: the only
/// constructors are [`Default`] and the validating [`SeverityLabels::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityLabels {
    info: String,
    debug: String,
    warn: String,
    error: String,
    fatal: String,
}

impl SeverityLabels {
    /// Build a label set, rejecting the first empty label found in argument
    /// order.
    pub fn new(
        info: impl Into<String>,
        debug: impl Into<String>,
        warn: impl Into<String>,
        error: impl Into<String>,
        fatal: impl Into<String>,
    ) -> Result<Self, LabelError> {
        let labels = Self {
            info: info.into(),
            debug: debug.into(),
            warn: warn.into(),
            error: error.into(),
            fatal: fatal.into(),
        };

        if let Some(severity) = Severity::ALL
            .into_iter()
            .find(|severity| labels.get(*severity).is_empty())
        {
            return Err(LabelError::Empty { severity });
        }

        Ok(labels)
    }

    pub fn get(&self, severity: Severity) -> &str {
        match severity {
            Severity::Info => &self.info,
            Severity::Debug => &self.debug,
            Severity::Warn => &self.warn,
            Severity::Error => &self.error,
            Severity::Fatal => &self.fatal,
        }
    }
}

impl Default for SeverityLabels {
    fn default() -> Self {
        Self {
            info: INFO_LABEL.to_string(),
            debug: DEBUG_LABEL.to_string(),
            warn: WARN_LABEL.to_string(),
            error: ERROR_LABEL.to_string(),
            fatal: FATAL_LABEL.to_string(),
        }
    }
}
