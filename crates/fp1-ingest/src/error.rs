//! Error types for catalog and settings loading.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the catalog or the settings document.
///
/// All of them are fatal for a run.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file could not be opened or read.
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV structure is invalid (bad quoting, uneven rows).
    #[error("failed to parse CSV {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A data row carries fewer fields than the catalog schema.
    #[error("{path}:{line}: expected {expected} columns, found {found}")]
    ColumnCount {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// An integer column holds a malformed or out-of-range token.
    #[error("{path}:{line}: invalid integer '{value}' in column {column}")]
    InvalidInteger {
        path: PathBuf,
        line: u64,
        column: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// The settings document is not valid YAML for the settings schema.
    #[error("failed to parse settings {path}")]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
