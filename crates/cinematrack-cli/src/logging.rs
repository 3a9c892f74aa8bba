use anyhow::Result;
use cinematrack_config::LoggingConfig;
use std::io;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::{self, time::ChronoUtc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Pick the log filter. Command-line flags win over `RUST_LOG`, which wins
/// over the configured level.
fn build_filter(verbose_level: u8, quiet: bool, configured_level: &str) -> EnvFilter {
    if quiet {
        EnvFilter::new("error")
    } else if verbose_level > 0 {
        match verbose_level {
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(configured_level.to_lowercase()))
    }
}

pub fn init_logging(verbose_level: u8, quiet: bool, config: &LoggingConfig, log_dir: &Path) -> Result<()> {
    let filter = build_filter(verbose_level, quiet, &config.level);

    let json = std::env::var("RUST_LOG_JSON")
        .map(|v| v == "true")
        .unwrap_or(config.json);

    let registry = Registry::default().with(filter);

    if let Some(log_path) = config.resolve_file(log_dir) {
        let (log_dir, log_prefix) = rolling_target(&log_path)?;
        std::fs::create_dir_all(log_dir)?;

        // Files are named cinematrack.log.2026-10-16 and so on
        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, log_prefix);

        if json {
            let json_layer = fmt::layer()
                .json()
                .with_timer(ChronoUtc::rfc_3339())
                .with_writer(file_appender);

            registry.with(json_layer).init();
        } else {
            let fmt_layer = fmt::layer()
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(false)
                .with_writer(file_appender);

            registry.with(fmt_layer).init();
        }
    } else if json {
        let json_layer = fmt::layer()
            .json()
            .with_timer(ChronoUtc::rfc_3339())
            .with_writer(io::stderr);

        registry.with(json_layer).init();
    } else {
        let fmt_layer = fmt::layer()
            .with_timer(ChronoUtc::rfc_3339())
            .with_writer(io::stderr);

        registry.with(fmt_layer).init();
    }

    Ok(())
}

/// Split a log file path into the directory and the file name used as the rotation prefix
fn rolling_target(log_path: &Path) -> Result<(&Path, &str)> {
    let log_dir = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let log_filename = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid log filename: {}", log_path.display()))?;

    Ok((log_dir, log_filename))
}
