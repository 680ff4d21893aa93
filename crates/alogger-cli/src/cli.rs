use clap::Parser;
use std::path::PathBuf;

use alogger::Severity;

#[derive(Parser, Debug)]
#[command(
    name = "alogger",
    version,
    about = "Write severity-labelled, tagged log lines"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "alogger.yaml")]
    pub config: PathBuf,

    /// Severity of the emitted lines (info, debug, warning, error, fatal)
    #[arg(short, long, default_value = "info")]
    pub severity: Severity,

    /// Component tag; repeat to add several, applied after configured tags
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,

    /// Stamp lines in UTC (overrides config file setting)
    #[arg(long)]
    pub utc: bool,

    /// Append lines to this file instead of standard error
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Message words; when absent each line of standard input is emitted
    pub message: Vec<String>,
}
