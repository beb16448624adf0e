//! Logging utilities
//!
//! Provides logging configuration and helpers.

use clap::ValueEnum;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Log level configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> Level {
        match self {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

fn filter_directive(level: LogLevel) -> String {
    format!("s3compat_report={}", level.to_tracing_level())
}

/// Initialize the logger with specified level.
///
/// Logs go to stderr; stdout is reserved for the progress trace.
pub fn init_logger(level: LogLevel) {
    let filter = EnvFilter::new(filter_directive(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
