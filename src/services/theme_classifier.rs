//! Light/dark theme classification from background luminance

use crate::color::{parse_hex_prefix, Color};
use crate::models::{BrandColors, Theme};

/// Backgrounds brighter than this luma are light
const LIGHT_THRESHOLD: f64 = 128.0;

/// Theme of a resolved palette
pub fn classify(colors: &BrandColors) -> Theme {
    classify_color(colors.background)
}

pub fn classify_color(background: Color) -> Theme {
    if background.luminance() > LIGHT_THRESHOLD {
        Theme::Light
    } else {
        Theme::Dark
    }
}

/// Theme for a raw background string; anything that is not six hex digits reads as light
pub fn classify_background(background: &str) -> Theme {
    parse_hex_prefix(background)
        .map(classify_color)
        .unwrap_or(Theme::Light)
}
