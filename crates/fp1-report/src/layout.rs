//! Element layout and default values of the `.FP1` format.
//!
//! [`PROFILE_LAYOUT`] fixes the order of the `PropertyGroup` children and
//! how each one is read from a [`Profile`]. [`FIELD_DEFAULTS`] lists the
//! value used when an accessor yields nothing. Element names are the vendor
//! tool's own spellings (`TetherRAWConditonCode`, `Fileerror`,
//! `NoisReduction`) and must not be corrected.

use std::fmt;

use fp1_model::{ModelError, Profile, Result};

/// Application identifier on the document root.
pub const APPLICATION: &str = "XRFC";

/// Root `version` attribute when the settings do not provide one.
pub const DEFAULT_APPLICATION_VERSION: &str = "1.12.0.0";

/// A resolved element value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
        }
    }
}

/// A declared default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    Text(&'static str),
    Int(i64),
}

impl FieldDefault {
    pub fn to_value(self) -> FieldValue {
        match self {
            Self::Text(value) => FieldValue::Text(value.to_string()),
            Self::Int(value) => FieldValue::Int(value),
        }
    }
}

/// Reads one element's explicit value; `None` defers to [`FIELD_DEFAULTS`].
pub type Accessor = fn(&Profile) -> Option<FieldValue>;

/// Element name paired with its accessor.
pub type LayoutEntry = (&'static str, Accessor);

/// `PropertyGroup` children, in document order.
pub const PROFILE_LAYOUT: &[LayoutEntry] = &[
    ("CameraSerialNumber", |p: &Profile| int(p.camera_serial_number)),
    ("TetherRAWConditonCode", |p: &Profile| text(&p.tether_raw_condition_code)),
    ("Editable", |p: &Profile| opt_text(&p.editable)),
    ("SourceFileName", |p: &Profile| opt_text(&p.source_file_name)),
    ("Fileerror", |p: &Profile| opt_text(&p.file_error)),
    ("RotationAngle", |p: &Profile| p.rotation_angle.and_then(int)),
    ("StructVer", |p: &Profile| p.struct_ver.and_then(int)),
    ("IOPCode", |p: &Profile| opt_text(&p.iop_code)),
    ("ShootingCondition", |p: &Profile| opt_text(&p.shooting_condition)),
    ("FileType", |p: &Profile| opt_text(&p.file_type)),
    ("ImageSize", |p: &Profile| opt_text(&p.image_size)),
    ("ImageQuality", |p: &Profile| opt_text(&p.image_quality)),
    ("ExposureBias", |p: &Profile| opt_text(&p.exposure_bias)),
    ("DynamicRange", |p: &Profile| text(&p.dynamic_range)),
    ("WideDRange", |p: &Profile| p.wide_d_range.and_then(int)),
    ("FilmSimulation", |p: &Profile| text(&p.film_simulation)),
    ("BlackImageTone", |p: &Profile| p.black_image_tone.and_then(int)),
    ("MonochromaticColorRG", |p: &Profile| p.monochromatic_color_rg.and_then(int)),
    ("GrainEffect", |p: &Profile| text(&p.grain_effect)),
    ("GrainEffectSize", |p: &Profile| text(&p.grain_effect_size)),
    ("ChromeEffect", |p: &Profile| text(&p.chrome_effect)),
    ("ColorChromeBlue", |p: &Profile| text(&p.color_chrome_blue)),
    ("SmoothSkinEffect", |p: &Profile| opt_text(&p.smooth_skin_effect)),
    ("WBShootCond", |p: &Profile| opt_text(&p.wb_shoot_cond)),
    ("WhiteBalance", |p: &Profile| text(&p.white_balance)),
    ("WBShiftR", |p: &Profile| int(p.wb_shift_r)),
    ("WBShiftB", |p: &Profile| int(p.wb_shift_b)),
    ("WBColorTemp", |p: &Profile| opt_text(&p.wb_color_temp)),
    ("HighlightTone", |p: &Profile| int(p.highlight_tone)),
    ("ShadowTone", |p: &Profile| int(p.shadow_tone)),
    ("Color", |p: &Profile| int(p.color)),
    ("Sharpness", |p: &Profile| int(p.sharpness)),
    ("NoisReduction", |p: &Profile| int(p.noise_reduction)),
    ("Clarity", |p: &Profile| p.clarity.and_then(int)),
    ("LensModulationOpt", |p: &Profile| opt_text(&p.lens_modulation_opt)),
    ("ColorSpace", |p: &Profile| opt_text(&p.color_space)),
    ("HDR", |p: &Profile| opt_text(&p.hdr)),
    ("DigitalTeleConv", |p: &Profile| opt_text(&p.digital_tele_conv)),
];

/// Values applied to elements whose accessor yields nothing.
pub const FIELD_DEFAULTS: &[(&str, FieldDefault)] = &[
    ("Editable", FieldDefault::Text("TRUE")),
    ("SourceFileName", FieldDefault::Text("")),
    ("Fileerror", FieldDefault::Text("NONE")),
    ("RotationAngle", FieldDefault::Int(0)),
    ("StructVer", FieldDefault::Int(65536)),
    ("IOPCode", FieldDefault::Text("FF159505")),
    ("ShootingCondition", FieldDefault::Text("OFF")),
    ("FileType", FieldDefault::Text("JPG")),
    ("ImageSize", FieldDefault::Text("L3x2")),
    ("ImageQuality", FieldDefault::Text("Fine")),
    ("ExposureBias", FieldDefault::Text("0")),
    ("WideDRange", FieldDefault::Int(0)),
    ("BlackImageTone", FieldDefault::Int(0)),
    ("MonochromaticColorRG", FieldDefault::Int(0)),
    ("SmoothSkinEffect", FieldDefault::Text("OFF")),
    ("WBShootCond", FieldDefault::Text("OFF")),
    ("WBColorTemp", FieldDefault::Text("10000K")),
    ("Clarity", FieldDefault::Int(0)),
    ("LensModulationOpt", FieldDefault::Text("ON")),
    ("ColorSpace", FieldDefault::Text("sRGB")),
    ("HDR", FieldDefault::Text("")),
    ("DigitalTeleConv", FieldDefault::Text("OFF")),
];

/// Declared default for element `name`, if any.
pub fn default_for(name: &str) -> Option<FieldDefault> {
    FIELD_DEFAULTS
        .iter()
        .find(|(field, _)| *field == name)
        .map(|(_, default)| *default)
}

/// Resolves every `PropertyGroup` child of `profile`, in layout order.
///
/// Explicit values win; otherwise the declared default applies.
///
/// # Errors
///
/// Returns [`ModelError::MissingField`] for an element with neither.
pub fn resolve_fields(profile: &Profile) -> Result<Vec<(&'static str, FieldValue)>> {
    PROFILE_LAYOUT
        .iter()
        .map(|(name, access)| {
            access(profile)
                .or_else(|| default_for(name).map(FieldDefault::to_value))
                .map(|value| (*name, value))
                .ok_or(ModelError::MissingField { field: *name })
        })
        .collect()
}

/// Root `version` attribute for `profile`.
pub fn application_version(profile: &Profile) -> &str {
    profile
        .application_version
        .as_deref()
        .unwrap_or(DEFAULT_APPLICATION_VERSION)
}

fn text(value: &str) -> Option<FieldValue> {
    Some(FieldValue::Text(value.to_string()))
}

fn opt_text(value: &Option<String>) -> Option<FieldValue> {
    value.as_deref().and_then(text)
}

fn int(value: impl Into<i64>) -> Option<FieldValue> {
    Some(FieldValue::Int(value.into()))
}
