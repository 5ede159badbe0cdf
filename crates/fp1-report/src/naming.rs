//! Output file naming.

/// Extension of X RAW Studio conversion profiles.
pub const FP1_EXTENSION: &str = "FP1";

const PATH_UNSAFE: [char; 3] = ['/', '\\', '*'];

/// Replaces `/`, `\` and `*` in a recipe label with `_`.
pub fn normalize_label(label: &str) -> String {
    label.replace(PATH_UNSAFE, "_")
}

/// File name of the profile generated for `label`.
///
/// Distinct labels may map to the same name (`A/B` and `A*B`); the later
/// profile then overwrites the earlier one.
pub fn profile_file_name(label: &str) -> String {
    format!("{}.{FP1_EXTENSION}", normalize_label(label))
}
