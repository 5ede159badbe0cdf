//! Input loading for the profile generator.
//!
//! - [`catalog`]: reads the recipe catalog CSV into [`fp1_model::Recipe`]s
//! - [`settings`]: reads the YAML settings document into [`fp1_model::Settings`]

pub mod catalog;
pub mod error;
pub mod settings;

pub use catalog::{CATALOG_COLUMNS, parse_catalog, parse_record, read_catalog, split_chrome_effect};
pub use error::{IngestError, Result};
pub use settings::{load_settings, parse_settings};
