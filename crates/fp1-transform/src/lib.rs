//! Pure transformation from a recipe and the user settings to a profile.
//!
//! Nothing in this crate performs I/O; [`build_profile`] is total over
//! well-formed inputs.

pub mod builder;
pub mod rules;

pub use builder::build_profile;
pub use rules::{CHROME_OFF, categorize_grain, chrome_blue, device_tag, flatten_version};
