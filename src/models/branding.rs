use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use super::logo::BrandLogo;
use crate::color::Color;

/// The four-color brand palette. Every field is always populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrandColors {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: Color,
}

impl BrandColors {
    /// Factor used to derive `secondary` from `primary`
    pub const SECONDARY_DARKEN_FACTOR: f64 = 0.6;

    /// Build a palette whose secondary is derived from the primary
    pub fn from_primary(primary: Color, accent: Color, background: Color) -> Self {
        Self {
            primary,
            secondary: primary.darken(Self::SECONDARY_DARKEN_FACTOR),
            accent,
            background,
        }
    }

    /// Replace the primary, re-deriving the secondary with it
    pub fn with_primary(self, primary: Color) -> Self {
        Self::from_primary(primary, self.accent, self.background)
    }

    pub fn with_accent(self, accent: Color) -> Self {
        Self { accent, ..self }
    }
}

impl Default for BrandColors {
    /// `#0066FF` / `#003D99` / `#66B3FF` on `#FFFFFF`
    fn default() -> Self {
        Self {
            primary: Color::rgb(0x00, 0x66, 0xff),
            secondary: Color::rgb(0x00, 0x3d, 0x99),
            accent: Color::rgb(0x66, 0xb3, 0xff),
            background: Color::rgb(0xff, 0xff, 0xff),
        }
    }
}

/// Light/dark classification of a page's dominant background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Coarse industry category of a site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum IndustryTag {
    Tech,
    Finance,
    Healthcare,
    Ecommerce,
    Education,
    Marketing,
    Gaming,
    #[default]
    General,
}

/// Final output of one extraction request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandingResult {
    pub logo: BrandLogo,
    pub colors: BrandColors,
    pub font: String,
    pub theme: Theme,
    pub industry: IndustryTag,
}
