//! Derived-field rules.

use fp1_model::Settings;

/// Token meaning an effect is disabled.
pub const CHROME_OFF: &str = "OFF";

/// Removes the `.` separators of a firmware version.
///
/// When exactly one character precedes the first separator (`1.12.0.0`) the
/// result gets a single leading `0` (`011200`). No other padding is done:
/// `10.1.0.0` flattens to `10100` and `1` stays `1`.
pub fn flatten_version(version: &str) -> String {
    let flat = version.replace('.', "");
    if version.find('.') == Some(1) {
        format!("0{flat}")
    } else {
        flat
    }
}

/// Camera model joined with the flattened firmware version (`X-T4_011200`).
pub fn device_tag(settings: &Settings) -> String {
    format!(
        "{}_{}",
        settings.model(),
        flatten_version(settings.firmware_version())
    )
}

/// Color chrome FX blue value; forced off whenever the chrome effect is off.
pub fn chrome_blue(chrome_effect: &str, chrome_effect_blue: &str) -> String {
    if chrome_effect == CHROME_OFF {
        CHROME_OFF.to_string()
    } else {
        chrome_effect_blue.to_string()
    }
}

/// Grain effect size for a grain strength.
///
/// `OFF` and `WEAK` both yield an empty size, `STRONG` yields `SMALL` and
/// any other strength yields `LARGE`.
pub fn categorize_grain(grain: &str) -> &'static str {
    match grain {
        "OFF" | "WEAK" => "",
        "STRONG" => "SMALL",
        _ => "LARGE",
    }
}
