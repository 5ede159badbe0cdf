//! fp1gen: film simulation recipes to X RAW Studio profiles.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, CommandFactory, Parser};
use tracing::error;
use tracing::level_filters::LevelFilter;

use fp1_cli::commands::{RunConfig, run};
use fp1_cli::logging::{LogConfig, LogFormat, init_logging};

mod cli;
mod summary;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();

    let Some((catalog_path, settings_path)) = cli.input_paths() else {
        eprintln!("{}", Cli::command().render_help());
        std::process::exit(2);
    };
    let config = RunConfig {
        catalog_path: catalog_path.to_path_buf(),
        settings_path: settings_path.to_path_buf(),
        output_dir: cli.output_dir.clone(),
        dry_run: cli.dry_run,
    };

    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let exit_code = match run(&config) {
        Ok(result) => {
            print_summary(&result);
            0
        }
        Err(error) => {
            error!("run aborted: {error:#}");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    let mut config = LogConfig::default()
        .with_level(level_filter)
        .with_format(format)
        .with_ansi(with_ansi)
        .with_file(cli.log_file.clone());
    config.respect_rust_log = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config.timestamps = cli.log_file.is_some();
    config.span_close_events = level_filter >= LevelFilter::DEBUG;
    config
}
