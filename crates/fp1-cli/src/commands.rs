//! Top-level run command.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use fp1_ingest::{load_settings, read_catalog};
use fp1_transform::device_tag;

use crate::pipeline::{PipelineOptions, generate_profiles, resolve_output_dir};
use crate::types::RunResult;

/// Inputs of a run, merged from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub catalog_path: PathBuf,
    pub settings_path: PathBuf,
    /// Overrides `fp1Path` from the settings.
    pub output_dir: Option<PathBuf>,
    pub dry_run: bool,
}

/// Loads settings and catalog, then generates every profile.
///
/// Fails fast: a settings or catalog error aborts before anything is
/// written.
pub fn run(config: &RunConfig) -> Result<RunResult> {
    let run_span = info_span!(
        "run",
        catalog = %config.catalog_path.display(),
        settings = %config.settings_path.display()
    );
    let _run_guard = run_span.enter();
    let start = Instant::now();

    let settings = load_settings(&config.settings_path).context("load settings")?;
    let recipes = read_catalog(&config.catalog_path).context("load recipe catalog")?;

    let output_dir = resolve_output_dir(&settings, config.output_dir.as_deref());
    let device_tag = device_tag(&settings);
    info!(
        output_dir = %output_dir.display(),
        device_tag = %device_tag,
        recipe_count = recipes.len(),
        dry_run = config.dry_run,
        "generating profiles"
    );

    let output = generate_profiles(
        &recipes,
        &settings,
        &output_dir,
        PipelineOptions {
            dry_run: config.dry_run,
        },
    )?;

    info!(
        profile_count = output.profiles.len(),
        overwritten = output.overwritten,
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );

    Ok(RunResult {
        settings_path: config.settings_path.clone(),
        catalog_path: config.catalog_path.clone(),
        output_dir,
        device_tag,
        profiles: output.profiles,
        overwritten: output.overwritten,
        dry_run: config.dry_run,
    })
}
