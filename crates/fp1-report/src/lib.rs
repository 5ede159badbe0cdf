//! Conversion profile output.
//!
//! - [`layout`]: element order and the declarative default table
//! - [`serialize`]: renders a profile into an `.FP1` document
//! - [`naming`]: file names derived from recipe labels
//! - [`writer`]: output directory and file persistence

pub mod layout;
pub mod naming;
pub mod serialize;
pub mod writer;

pub use layout::{
    APPLICATION, Accessor, DEFAULT_APPLICATION_VERSION, FIELD_DEFAULTS, FieldDefault, FieldValue,
    LayoutEntry, PROFILE_LAYOUT, application_version, default_for, resolve_fields,
};
pub use naming::{FP1_EXTENSION, normalize_label, profile_file_name};
pub use serialize::render_profile;
pub use writer::{ensure_output_dir, write_profile};
