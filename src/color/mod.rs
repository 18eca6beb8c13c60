//! Color codec
//!
//! Parses arbitrary CSS color strings into a canonical 24-bit [`Color`] and
//! derives darker and lighter variants. Nothing here fails: unsupported input
//! (modern color functions such as `oklch()`, `var()` references, garbage,
//! empty strings) maps to [`DEFAULT_COLOR`], and a darken attempted on an
//! invalid hex string maps to [`DARKEN_FALLBACK`].
//!
//! # Supported syntax
//!
//! - `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (alpha dropped, never blended)
//! - `rgb()` / `rgba()`, comma or space separated, integer or percentage
//!   channels; the first three numbers are read positionally
//! - `hsl()` / `hsla()` with `deg`, `rad`, `grad` or `turn` hue units
//! - a fixed table of named colors, matched case-insensitively
//!
//! # Usage
//!
//! ```rust
//! use brand_extract::color::{self, Color};
//!
//! assert_eq!(color::normalize("#abc").to_hex(), "#aabbcc");
//! assert_eq!(color::normalize("oklch(60% 0.1 250)"), color::DEFAULT_COLOR);
//! assert_eq!(Color::rgb(0xff, 0x66, 0x00).darken(0.5).to_hex(), "#803300");
//! ```

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::OnceLock;

mod named;

/// Returned by [`normalize`] for anything it cannot parse
pub const DEFAULT_COLOR: Color = Color::rgb(0x00, 0x66, 0xff);

/// Returned by [`darken_str`] when its input is not a valid hex color
pub const DARKEN_FALLBACK: Color = Color::rgb(0x00, 0x3d, 0x99);

/// A 24-bit RGB color. Displays as lowercase `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Canonical `#rrggbb` form
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse a CSS hex color (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`)
    pub fn from_hex(input: &str) -> Option<Self> {
        let digits = input.trim().strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        match digits.len() {
            3 | 4 => {
                let mut channels = digits.chars().take(3).map(|c| {
                    let v = c.to_digit(16).unwrap_or(0) as u8;
                    v * 16 + v
                });
                Some(Self::rgb(channels.next()?, channels.next()?, channels.next()?))
            }
            6 | 8 => Self::from_hex_digits(&digits[..6]),
            _ => None,
        }
    }

    /// Parse exactly six hex digits
    fn from_hex_digits(digits: &str) -> Option<Self> {
        let r = u8::from_str_radix(digits.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(digits.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(digits.get(4..6)?, 16).ok()?;
        Some(Self::rgb(r, g, b))
    }

    /// Multiply every channel by `factor` (clamped to 0..=1) and round
    pub fn darken(self, factor: f64) -> Self {
        let factor = clamp_unit(factor);
        let scale = |c: u8| (f64::from(c) * factor).round() as u8;
        Self::rgb(scale(self.r), scale(self.g), scale(self.b))
    }

    /// Mix toward white by `amount` (clamped to 0..=1)
    pub fn lighten(self, amount: f64) -> Self {
        let amount = clamp_unit(amount);
        let mix = |c: u8| (f64::from(c) + (255.0 - f64::from(c)) * amount).round() as u8;
        Self::rgb(mix(self.r), mix(self.g), mix(self.b))
    }

    /// Perceived luminance, `0.299R + 0.587G + 0.114B`, in 0..=255
    pub fn luminance(self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }

    /// Euclidean distance in RGB space
    pub fn distance(self, other: Self) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// HSV saturation in 0..=1
    pub fn saturation(self) -> f64 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        if max == 0 {
            0.0
        } else {
            f64::from(max - min) / f64::from(max)
        }
    }

    /// HSV value in 0..=1
    pub fn value(self) -> f64 {
        f64::from(self.r.max(self.g).max(self.b)) / 255.0
    }
}

impl Default for Color {
    fn default() -> Self {
        DEFAULT_COLOR
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(normalize(&raw))
    }
}

/// Parse any supported CSS color, `None` for unsupported syntax
pub fn try_parse(input: &str) -> Option<Color> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.starts_with('#') {
        return Color::from_hex(trimmed);
    }

    if let Some((name, args)) = split_function(trimmed) {
        return match name.as_str() {
            "rgb" | "rgba" => parse_rgb(&args),
            "hsl" | "hsla" => parse_hsl(&args),
            _ => None,
        };
    }

    named::lookup(trimmed)
}

/// Normalize a CSS color string to canonical form, [`DEFAULT_COLOR`] if unsupported
pub fn normalize(input: &str) -> Color {
    try_parse(input).unwrap_or(DEFAULT_COLOR)
}

/// [`normalize`] for a signal that may be absent
pub fn normalize_opt(input: Option<&str>) -> Color {
    input.map(normalize).unwrap_or(DEFAULT_COLOR)
}

/// Darken a hex string. Anything without six leading hex digits yields [`DARKEN_FALLBACK`].
pub fn darken_str(input: &str, factor: f64) -> Color {
    parse_hex_prefix(input)
        .map(|color| color.darken(factor))
        .unwrap_or(DARKEN_FALLBACK)
}

/// Strict hex reading used where shorthand is not acceptable: an optional `#`
/// followed by at least six hex digits, of which the first six are used.
pub(crate) fn parse_hex_prefix(input: &str) -> Option<Color> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let head = digits.get(0..6)?;
    if !head.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Color::from_hex_digits(head)
}

/// Alpha component of a color string in 0..=1.
///
/// Opaque syntaxes report `1.0`, `transparent` reports `0.0`, unsupported
/// input reports `None`.
pub fn alpha(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("transparent") {
        return Some(0.0);
    }

    if let Some(digits) = trimmed.strip_prefix('#') {
        Color::from_hex(trimmed)?;
        return match digits.len() {
            4 => u8::from_str_radix(&digits[3..4], 16)
                .ok()
                .map(|v| f64::from(v * 16 + v) / 255.0),
            8 => u8::from_str_radix(&digits[6..8], 16)
                .ok()
                .map(|v| f64::from(v) / 255.0),
            _ => Some(1.0),
        };
    }

    try_parse(trimmed)?;
    match split_function(trimmed) {
        Some((_, args)) => Some(
            components(&args)
                .get(3)
                .map(|c| {
                    let raw = if c.unit == Some(Unit::Percent) {
                        c.value / 100.0
                    } else {
                        c.value
                    };
                    clamp_unit(raw)
                })
                .unwrap_or(1.0),
        ),
        None => Some(1.0),
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Split `name(args)` into its lowercase name and the argument text
fn split_function(input: &str) -> Option<(String, String)> {
    let open = input.find('(')?;
    let inner = input.get(open + 1..)?.strip_suffix(')')?;
    let name = input[..open].trim().to_ascii_lowercase();
    if name.is_empty() {
        return None;
    }
    Some((name, inner.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Unit {
    Percent,
    Deg,
    Grad,
    Rad,
    Turn,
}

#[derive(Debug, Clone, Copy)]
struct Component {
    value: f64,
    unit: Option<Unit>,
}

fn component_regex() -> &'static Regex {
    static COMPONENT: OnceLock<Regex> = OnceLock::new();
    COMPONENT.get_or_init(|| {
        Regex::new(r"(?i)([-+]?(?:\d+(?:\.\d*)?|\.\d+))(%|deg|grad|rad|turn)?")
            .expect("component pattern is a valid regex")
    })
}

/// Numeric components in positional order, whatever the separator
fn components(args: &str) -> Vec<Component> {
    component_regex()
        .captures_iter(args)
        .filter_map(|caps| {
            let value = caps.get(1)?.as_str().parse::<f64>().ok()?;
            let unit = caps.get(2).map(|u| match u.as_str().to_ascii_lowercase().as_str() {
                "%" => Unit::Percent,
                "grad" => Unit::Grad,
                "rad" => Unit::Rad,
                "turn" => Unit::Turn,
                _ => Unit::Deg,
            });
            Some(Component { value, unit })
        })
        .collect()
}

fn parse_rgb(args: &str) -> Option<Color> {
    let parts = components(args);
    if parts.len() < 3 {
        return None;
    }

    let channel = |c: &Component| {
        let raw = match c.unit {
            Some(Unit::Percent) => c.value * 2.55,
            _ => c.value,
        };
        raw.clamp(0.0, 255.0).round() as u8
    };

    Some(Color::rgb(
        channel(&parts[0]),
        channel(&parts[1]),
        channel(&parts[2]),
    ))
}

fn parse_hsl(args: &str) -> Option<Color> {
    let parts = components(args);
    if parts.len() < 3 {
        return None;
    }

    let degrees = match parts[0].unit {
        Some(Unit::Turn) => parts[0].value * 360.0,
        Some(Unit::Rad) => parts[0].value.to_degrees(),
        Some(Unit::Grad) => parts[0].value * 0.9,
        _ => parts[0].value,
    };
    let h = degrees.rem_euclid(360.0) / 360.0;
    let s = (parts[1].value / 100.0).clamp(0.0, 1.0);
    let l = (parts[2].value / 100.0).clamp(0.0, 1.0);

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    let to_byte = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
    Some(Color::rgb(to_byte(r), to_byte(g), to_byte(b)))
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
