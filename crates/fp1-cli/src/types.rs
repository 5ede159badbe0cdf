use std::path::PathBuf;

/// Outcome of a complete run.
#[derive(Debug)]
pub struct RunResult {
    pub settings_path: PathBuf,
    pub catalog_path: PathBuf,
    pub output_dir: PathBuf,
    pub device_tag: String,
    pub profiles: Vec<ProfileSummary>,
    /// Profiles whose file replaced one generated earlier in the same run.
    pub overwritten: usize,
    pub dry_run: bool,
}

/// One generated profile.
#[derive(Debug, Clone)]
pub struct ProfileSummary {
    pub label: String,
    pub film_simulation: String,
    pub grain_effect_size: String,
    pub color_chrome_blue: String,
    pub path: PathBuf,
}
