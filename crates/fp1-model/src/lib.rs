//! Data model for film simulation recipes and X RAW Studio conversion profiles.
//!
//! - [`Recipe`]: one catalog row describing a named color-simulation preset
//! - [`Settings`]: camera and output settings, loaded once per run
//! - [`Profile`]: the derived record rendered into an `.FP1` document

pub mod error;
pub mod profile;
pub mod recipe;
pub mod settings;

pub use error::{ModelError, Result};
pub use profile::Profile;
pub use recipe::Recipe;
pub use settings::{CameraSettings, Settings, XrfcSettings};
