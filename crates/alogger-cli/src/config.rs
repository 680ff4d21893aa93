use anyhow::Context;
use serde::Deserialize;
use std::io::Write;
use std::path::Path;

use alogger::{
    Logger, DEBUG_LABEL, ERROR_LABEL, FATAL_LABEL, INFO_LABEL, LOCAL_TIME_LABEL, UTC_TIME_LABEL,
    WARN_LABEL,
};

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_true")]
    pub local_time: bool,
    #[serde(default)]
    pub labels: LabelsConfig,
    #[serde(default)]
    pub time_labels: TimeLabelsConfig,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            local_time: default_true(),
            labels: LabelsConfig::default(),
            time_labels: TimeLabelsConfig::default(),
            tags: Vec::new(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LabelsConfig {
    #[serde(default = "default_info")]
    pub info: String,
    #[serde(default = "default_debug")]
    pub debug: String,
    #[serde(default = "default_warning")]
    pub warning: String,
    #[serde(default = "default_error")]
    pub error: String,
    #[serde(default = "default_fatal")]
    pub fatal: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            info: default_info(),
            debug: default_debug(),
            warning: default_warning(),
            error: default_error(),
            fatal: default_fatal(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TimeLabelsConfig {
    #[serde(default = "default_local")]
    pub local: String,
    #[serde(default = "default_utc")]
    pub utc: String,
}

impl Default for TimeLabelsConfig {
    fn default() -> Self {
        Self {
            local: default_local(),
            utc: default_utc(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default-value functions used by serde
// ---------------------------------------------------------------------------

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_info() -> String {
    INFO_LABEL.to_string()
}

fn default_debug() -> String {
    DEBUG_LABEL.to_string()
}

fn default_warning() -> String {
    WARN_LABEL.to_string()
}

fn default_error() -> String {
    ERROR_LABEL.to_string()
}

fn default_fatal() -> String {
    FATAL_LABEL.to_string()
}

fn default_local() -> String {
    LOCAL_TIME_LABEL.to_string()
}

fn default_utc() -> String {
    UTC_TIME_LABEL.to_string()
}

impl Config {
    /// Build a logger over `sink` (standard error when `None`) with every
    /// configured label and tag applied.
    ///
    /// Fails when any severity label is empty.
    pub fn build_logger(&self, sink: Option<Box<dyn Write + Send>>) -> anyhow::Result<Logger> {
        let mut logger = Logger::new(sink, self.local_time);

        let labels = &self.labels;
        logger
            .set_severity_labels(
                &labels.info,
                &labels.debug,
                &labels.warning,
                &labels.error,
                &labels.fatal,
            )
            .context("invalid labels in config")?;
        logger.set_time_labels(&self.time_labels.local, &self.time_labels.utc);

        for tag in &self.tags {
            logger.add_tag(tag);
        }

        Ok(logger)
    }
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

/// Load configuration from a YAML file.
///
/// Returns `None` when the file does not exist so the caller can fall back
/// to [`Config::default`] and report it once diagnostics are set up.
pub fn load(path: &Path) -> anyhow::Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;

    let config: Config = serde_yml::from_str(&contents)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;

    Ok(Some(config))
}
