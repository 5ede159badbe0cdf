//! Settings document loader.

use std::fs;
use std::path::Path;

use tracing::info;

use fp1_model::Settings;

use crate::error::{IngestError, Result};

/// Reads and parses the YAML settings document at `path`.
pub fn load_settings(path: &Path) -> Result<Settings> {
    info!(path = %path.display(), "loading settings");
    let text = fs::read_to_string(path).map_err(|source| IngestError::io(path, source))?;
    let settings = parse_settings(&text, path)?;
    info!(
        model = %settings.model(),
        firmware = %settings.firmware_version(),
        output_dir = %settings.output_dir.display(),
        "settings loaded"
    );
    Ok(settings)
}

/// Parses a settings document; `source` is only used in error messages.
pub fn parse_settings(text: &str, source: &Path) -> Result<Settings> {
    serde_yaml::from_str(text).map_err(|err| IngestError::Settings {
        path: source.to_path_buf(),
        source: err,
    })
}
