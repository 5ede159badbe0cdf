//! Profile persistence.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::naming::profile_file_name;

/// Creates `dir` (and its parents) unless it already exists.
///
/// Returns `true` when the directory was created.
pub fn ensure_output_dir(dir: &Path) -> Result<bool> {
    match fs::metadata(dir) {
        Ok(_) => {
            debug!(path = %dir.display(), "output directory exists");
            Ok(false)
        }
        Err(error) if error.kind() == ErrorKind::NotFound => {
            fs::create_dir_all(dir)
                .with_context(|| format!("create output directory {}", dir.display()))?;
            info!(path = %dir.display(), "created output directory");
            Ok(true)
        }
        Err(error) => {
            Err(error).with_context(|| format!("inspect output directory {}", dir.display()))
        }
    }
}

/// Writes `document` as the profile file for `label` inside `dir`.
///
/// An existing file with the same name is overwritten.
pub fn write_profile(dir: &Path, label: &str, document: &str) -> Result<PathBuf> {
    let path = dir.join(profile_file_name(label));
    fs::write(&path, document).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
