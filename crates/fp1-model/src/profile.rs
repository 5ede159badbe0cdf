//! X RAW Studio conversion profile.

/// Fully derived conversion profile, one per recipe.
///
/// Required fields are plain values. Fields the vendor format defines a
/// fixed default for are `Option`s: `None` means "use the declared default",
/// which the serializer fills in from its default table before rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    /// Target application version on the document root.
    pub application_version: Option<String>,

    // PropertyGroup attributes
    pub device: String,
    pub device_tag: String,
    pub label: String,

    pub camera_serial_number: i64,
    pub tether_raw_condition_code: String,
    pub editable: Option<String>,
    pub source_file_name: Option<String>,
    pub file_error: Option<String>,
    pub rotation_angle: Option<i8>,
    pub struct_ver: Option<i32>,
    pub iop_code: Option<String>,
    pub shooting_condition: Option<String>,
    pub file_type: Option<String>,
    pub image_size: Option<String>,
    pub image_quality: Option<String>,
    pub exposure_bias: Option<String>,
    pub dynamic_range: String,
    pub wide_d_range: Option<i8>,
    pub film_simulation: String,
    pub black_image_tone: Option<i8>,
    pub monochromatic_color_rg: Option<i8>,
    pub grain_effect: String,
    pub grain_effect_size: String,
    pub chrome_effect: String,
    pub color_chrome_blue: String,
    pub smooth_skin_effect: Option<String>,
    pub wb_shoot_cond: Option<String>,
    pub white_balance: String,
    pub wb_shift_r: i8,
    pub wb_shift_b: i8,
    pub wb_color_temp: Option<String>,
    pub highlight_tone: i8,
    pub shadow_tone: i8,
    pub color: i8,
    pub sharpness: i8,
    pub noise_reduction: i8,
    pub clarity: Option<i8>,
    pub lens_modulation_opt: Option<String>,
    pub color_space: Option<String>,
    pub hdr: Option<String>,
    pub digital_tele_conv: Option<String>,
}
