//! Per-recipe generation loop: transform, render, write.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use fp1_model::{Recipe, Settings};
use fp1_report::{ensure_output_dir, profile_file_name, render_profile, write_profile};
use fp1_transform::build_profile;

use crate::types::ProfileSummary;

/// Options for [`generate_profiles`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    /// Render every profile without touching the filesystem.
    pub dry_run: bool,
}

/// Profiles produced by [`generate_profiles`].
#[derive(Debug, Default)]
pub struct GenerateOutput {
    pub profiles: Vec<ProfileSummary>,
    pub overwritten: usize,
}

/// Generates one profile per recipe, in catalog order, into `output_dir`.
///
/// The output directory is created once before the first profile. The
/// first failure aborts the loop; profiles already written stay on disk.
pub fn generate_profiles(
    recipes: &[Recipe],
    settings: &Settings,
    output_dir: &Path,
    options: PipelineOptions,
) -> Result<GenerateOutput> {
    if !options.dry_run {
        ensure_output_dir(output_dir)?;
    }

    let mut output = GenerateOutput::default();
    let mut written: HashMap<String, String> = HashMap::new();
    for recipe in recipes {
        let span = info_span!("recipe", label = %recipe.label);
        let _guard = span.enter();

        let profile = build_profile(recipe, settings);
        let document = render_profile(&profile)
            .with_context(|| format!("render profile {}", recipe.label))?;

        let file_name = profile_file_name(&recipe.label);
        if let Some(previous) = written.insert(file_name.clone(), recipe.label.clone()) {
            warn!(
                label = %recipe.label,
                previous = %previous,
                file_name = %file_name,
                "profile file name collision, later profile overwrites earlier"
            );
            output.overwritten += 1;
        }

        let path = if options.dry_run {
            let path = output_dir.join(&file_name);
            debug!(path = %path.display(), bytes = document.len(), "dry run, profile not written");
            path
        } else {
            write_profile(output_dir, &recipe.label, &document)?
        };
        info!(path = %path.display(), "generated profile");

        output.profiles.push(ProfileSummary {
            label: recipe.label.clone(),
            film_simulation: profile.film_simulation,
            grain_effect_size: profile.grain_effect_size,
            color_chrome_blue: profile.color_chrome_blue,
            path,
        });
    }
    Ok(output)
}

/// Output directory for a run: the CLI override, else the settings value.
pub fn resolve_output_dir(settings: &Settings, override_dir: Option<&Path>) -> PathBuf {
    override_dir.map_or_else(|| settings.output_dir.clone(), Path::to_path_buf)
}
