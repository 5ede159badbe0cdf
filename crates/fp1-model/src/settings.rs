//! User settings shared by every generated profile.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Camera body the profiles are generated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraSettings {
    /// Model name as the camera reports it (e.g. `X-T4`).
    pub model: String,
    /// Dotted firmware version (e.g. `1.12.0.0`).
    #[serde(rename = "firmware")]
    pub firmware_version: String,
    #[serde(rename = "serialNb", default)]
    pub serial_number: i64,
}

/// X RAW Studio application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XrfcSettings {
    /// Target application version written on the document root.
    #[serde(default)]
    pub version: String,
}

/// Settings document, loaded once per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub camera: CameraSettings,
    #[serde(default)]
    pub xrfc: XrfcSettings,
    /// Directory receiving the generated `.FP1` files.
    #[serde(rename = "fp1Path")]
    pub output_dir: PathBuf,
    /// Profile color space; empty means the default (`sRGB`).
    #[serde(rename = "colorSpace", default)]
    pub color_space: String,
}

impl Settings {
    pub fn model(&self) -> &str {
        &self.camera.model
    }

    pub fn firmware_version(&self) -> &str {
        &self.camera.firmware_version
    }

    pub fn serial_number(&self) -> i64 {
        self.camera.serial_number
    }

    pub fn application_version(&self) -> &str {
        &self.xrfc.version
    }
}
