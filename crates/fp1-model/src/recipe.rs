//! Film simulation recipe as read from the catalog.

/// One catalog row.
///
/// Integer settings are the camera's narrow signed ranges (roughly -4..=4),
/// so they are stored as `i8`. Exposure bias stays a string to keep the
/// catalog's own formatting (`-2/3`, `+1`, `0.7`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub label: String,
    pub film_simulation: String,
    pub grain: String,
    /// Primary color chrome effect token.
    pub chrome_effect: String,
    /// Color chrome FX blue token; equals `chrome_effect` when the catalog
    /// cell carried a single token.
    pub chrome_effect_blue: String,
    pub white_balance: String,
    pub wb_shift_r: i8,
    pub wb_shift_b: i8,
    pub dynamic_range: String,
    pub highlight_tone: i8,
    pub shadow_tone: i8,
    pub color: i8,
    pub sharpness: i8,
    pub noise_reduction: i8,
    pub exposure_bias: String,
}
