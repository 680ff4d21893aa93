mod cli;
mod config;

use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use alogger::{Logger, Severity};

use crate::cli::Cli;

fn main() -> Result<()> {
    // 1. Parse CLI args.
    let cli = Cli::parse();

    // 2. Load config, then merge CLI overrides.
    let loaded = config::load(&cli.config)?;
    let config_missing = loaded.is_none();
    let mut cfg = loaded.unwrap_or_default();

    if cli.utc {
        cfg.local_time = false;
    }
    cfg.tags.extend(cli.tags.iter().cloned());

    // 3. Init tracing-subscriber for the tool's own diagnostics.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    if config_missing {
        warn!(
            path = %cli.config.display(),
            "configuration file not found; using defaults"
        );
    }

    debug!(
        config_file = %cli.config.display(),
        severity = %cli.severity,
        local_time = cfg.local_time,
        tags = ?cfg.tags,
        "alogger starting"
    );

    // 4. Open the sink and build the logger.
    let sink: Option<Box<dyn Write + Send>> = match &cli.output {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open output file {}", path.display()))?;
            Some(Box::new(file))
        }
        None => None,
    };

    let logger = cfg
        .build_logger(sink)
        .context("failed to configure logger")?;

    // 5. Emit the message words, or every line of standard input.
    if !cli.message.is_empty() {
        let words: Vec<&dyn Display> = cli.message.iter().map(|w| w as &dyn Display).collect();
        emit(&logger, cli.severity, &words);
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read standard input")?;
        emit(&logger, cli.severity, &[&line]);
    }

    Ok(())
}

/// Route one message to the emitter for `severity`. Fatal does not return.
fn emit(logger: &Logger, severity: Severity, words: &[&dyn Display]) {
    match severity {
        Severity::Info => logger.infoln(words),
        Severity::Debug => logger.debugln(words),
        Severity::Warn => logger.warnln(words),
        Severity::Error => logger.errorln(words),
        Severity::Fatal => logger.fatalln(words),
    }
}
