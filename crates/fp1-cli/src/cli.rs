//! CLI argument definitions for fp1gen.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "fp1gen",
    version,
    about = "Generate X RAW Studio conversion profiles from film simulation recipes",
    long_about = "Generate Fujifilm X RAW Studio conversion profiles (.FP1) from a CSV\n\
                  catalog of film simulation recipes.\n\n\
                  One profile is written per catalog row into the folder named by\n\
                  `fp1Path` in the settings file."
)]
pub struct Cli {
    /// Path of the CSV file defining the film simulation recipes.
    #[arg(long = "csv", value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Path of the YAML settings holding the camera model and firmware.
    #[arg(short = 's', long = "settings", value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Output directory for generated profiles (default: `fp1Path` from settings).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Render every profile without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Catalog and settings paths, when both are given and non-empty.
    pub fn input_paths(&self) -> Option<(&Path, &Path)> {
        let csv = non_empty(self.csv.as_deref())?;
        let settings = non_empty(self.settings.as_deref())?;
        Some((csv, settings))
    }
}

fn non_empty(path: Option<&Path>) -> Option<&Path> {
    path.filter(|path| !path.as_os_str().is_empty())
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
