//! Profile construction.

use tracing::debug;

use fp1_model::{Profile, Recipe, Settings};

use crate::rules::{categorize_grain, chrome_blue, device_tag};

/// Builds the profile for `recipe`.
///
/// Fields left `None` are filled from the serializer's default table.
/// Exposure bias, color space and application version only override their
/// defaults when the source value is non-empty.
pub fn build_profile(recipe: &Recipe, settings: &Settings) -> Profile {
    let device_tag = device_tag(settings);
    let grain_effect_size = categorize_grain(&recipe.grain);
    let color_chrome_blue = chrome_blue(&recipe.chrome_effect, &recipe.chrome_effect_blue);
    debug!(
        label = %recipe.label,
        device_tag = %device_tag,
        grain_effect_size,
        color_chrome_blue = %color_chrome_blue,
        "derived profile fields"
    );

    Profile {
        application_version: non_empty(settings.application_version()),
        device: settings.model().to_string(),
        tether_raw_condition_code: device_tag.clone(),
        device_tag,
        label: recipe.label.clone(),
        camera_serial_number: settings.serial_number(),
        exposure_bias: non_empty(&recipe.exposure_bias),
        dynamic_range: recipe.dynamic_range.clone(),
        film_simulation: recipe.film_simulation.clone(),
        grain_effect: recipe.grain.clone(),
        grain_effect_size: grain_effect_size.to_string(),
        chrome_effect: recipe.chrome_effect.clone(),
        color_chrome_blue,
        white_balance: recipe.white_balance.clone(),
        wb_shift_r: recipe.wb_shift_r,
        wb_shift_b: recipe.wb_shift_b,
        highlight_tone: recipe.highlight_tone,
        shadow_tone: recipe.shadow_tone,
        color: recipe.color,
        sharpness: recipe.sharpness,
        noise_reduction: recipe.noise_reduction,
        color_space: non_empty(&settings.color_space),
        ..Profile::default()
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
