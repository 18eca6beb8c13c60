use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strum::{AsRefStr, Display, EnumString};

/// Confidence ranking of a resolved logo source.
///
/// Variants are declared worst-first so the derived ordering gives
/// `High > Medium > Favicon`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogoQuality {
    Favicon,
    Medium,
    High,
}

/// Outcome of logo resolution. Resolution always yields exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoResult {
    pub url: String,
    pub quality: LogoQuality,
}

impl LogoResult {
    pub fn new<S: Into<String>>(url: S, quality: LogoQuality) -> Self {
        Self {
            url: url.into(),
            quality,
        }
    }
}

/// Logo as carried on the final branding result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandLogo {
    pub url: String,
    pub quality: LogoQuality,
    /// Set when the logo was downloaded to the configured directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<PathBuf>,
}

impl From<LogoResult> for BrandLogo {
    fn from(result: LogoResult) -> Self {
        Self {
            url: result.url,
            quality: result.quality,
            local_path: None,
        }
    }
}
