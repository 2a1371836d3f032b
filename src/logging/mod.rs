//! Logging initialization with environment-based formatters
//!
//! - Production: Structured JSON logs for log aggregation
//! - Anywhere else: Colorful, human-readable logs

use tracing_subscriber::{
    fmt::{self, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::{get_environment, is_production};

/// Where log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    /// Servers log to stdout.
    Stdout,
    /// The CLI keeps stdout for its report.
    Stderr,
}

/// Initialize logging for a long-running service (stdout, `info` default).
pub fn init_logging() {
    init_with(LogOutput::Stdout, "info");
}

/// Initialize logging for the batch CLI (stderr, `warn` default).
pub fn init_cli_logging() {
    init_with(LogOutput::Stderr, "warn");
}

/// `RUST_LOG` overrides `default_directive`. Safe to call more than once;
/// later calls are ignored.
pub fn init_with(output: LogOutput, default_directive: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let writer = match output {
        LogOutput::Stdout => BoxMakeWriter::new(std::io::stdout),
        LogOutput::Stderr => BoxMakeWriter::new(std::io::stderr),
    };

    let result = if is_production(&get_environment()) {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(writer),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(output == LogOutput::Stdout)
                    .with_writer(writer),
            )
            .try_init()
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "logging already initialized");
    }
}
