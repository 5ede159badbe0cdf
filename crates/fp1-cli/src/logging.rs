//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Levels used by fp1gen:
//!
//! - `error`: the fatal cause of an aborted run
//! - `warn`: profile file name collisions
//! - `info`: loaded inputs, one event per generated profile, run totals
//! - `debug`: derived profile fields, parsed catalog rows
//!
//! `RUST_LOG` overrides the configured level unless a verbosity flag or
//! `--log-level` was given explicitly.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Crates whose events follow the configured level.
const WORKSPACE_TARGETS: [&str; 5] = [
    "fp1_cli",
    "fp1_ingest",
    "fp1_model",
    "fp1_report",
    "fp1_transform",
];

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Where and how fp1gen writes its log events.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: LevelFilter,
    /// Let `RUST_LOG` replace `level` when set.
    pub respect_rust_log: bool,
    pub format: LogFormat,
    pub ansi: bool,
    /// Prefix events with a timestamp (pretty and compact formats).
    pub timestamps: bool,
    /// Emit an event when each `run` / `recipe` span closes (json only).
    pub span_close_events: bool,
    /// Append to this file instead of writing to stderr.
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-field human output.
    #[default]
    Pretty,
    Compact,
    /// One JSON object per line.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::INFO,
            respect_rust_log: true,
            format: LogFormat::Pretty,
            ansi: true,
            timestamps: false,
            span_close_events: false,
            file: None,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    #[must_use]
    pub fn with_file(mut self, file: Option<PathBuf>) -> Self {
        self.file = file;
        self
    }
}

/// Installs the global subscriber described by `config`.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened for appending.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let writer = match &config.file {
        Some(path) => BoxMakeWriter::new(Mutex::new(open_log_file(path)?)),
        None => BoxMakeWriter::new(io::stderr),
    };
    tracing_subscriber::registry()
        .with(event_layer(config, writer).with_filter(build_env_filter(config)))
        .init();
    Ok(())
}

fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn event_layer(config: &LogConfig, writer: BoxMakeWriter) -> BoxedLayer {
    let base = fmt::layer().with_writer(writer).with_target(false);
    match config.format {
        LogFormat::Json => {
            let spans = if config.span_close_events {
                FmtSpan::CLOSE
            } else {
                FmtSpan::NONE
            };
            base.json().with_span_events(spans).boxed()
        }
        LogFormat::Compact if config.timestamps => base.compact().with_ansi(config.ansi).boxed(),
        LogFormat::Compact => base
            .compact()
            .with_ansi(config.ansi)
            .without_time()
            .boxed(),
        LogFormat::Pretty if config.timestamps => base.with_ansi(config.ansi).boxed(),
        LogFormat::Pretty => base.with_ansi(config.ansi).without_time().boxed(),
    }
}

/// Filter directives for `level`: workspace crates at `level`, everything
/// else at warn or quieter.
pub fn default_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    let external = if level == "off" || level == "error" {
        level.as_str()
    } else {
        "warn"
    };
    let mut directives = vec![external.to_string()];
    directives.extend(
        WORKSPACE_TARGETS
            .iter()
            .map(|target| format!("{target}={level}")),
    );
    directives.join(",")
}

fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let configured = || EnvFilter::new(default_directives(config.level));
    if config.respect_rust_log {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| configured())
    } else {
        configured()
    }
}
