//! Error types for report generation
//!
//! Parse misses are not errors; only I/O, config and serialization failures are.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Report generation errors
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to read test output {path}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report {path}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read config file {path}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config {path}")]
    ConfigYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to parse JSON config {path}")]
    ConfigJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize JSON report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to format report")]
    Format(#[from] fmt::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
