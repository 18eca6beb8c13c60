use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use strum::{AsRefStr, Display, EnumString};
use tracing::{debug, info};

use crate::errors::{AppError, AppResult};

pub mod defaults;
pub mod duration_serde;

use defaults::*;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub probe: ProbeConfig,
    pub logo: LogoConfig,
    pub palette: PaletteConfig,
    pub branding: BrandingConfig,
}

/// HTTP method used for liveness probes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProbeMethod {
    /// HEAD, falling back to GET once when the server answers 405/501
    #[default]
    Head,
    Get,
}

/// Liveness probe configuration shared by every logo tier
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Upper bound on a single probe, timeouts count as probe failures
    #[serde(with = "duration_serde::duration")]
    pub timeout: Duration,
    pub user_agent: String,
    pub method: ProbeMethod,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Brand logo service template, `{domain}` is substituted
    pub brand_api_url: String,
    /// Favicon service template, `{domain}` is substituted
    pub favicon_url: String,
    /// Conventional logo paths under the page origin, in priority order
    pub common_paths: Vec<String>,
    /// Probe the common paths concurrently (selection still honours list order)
    pub concurrent_common_paths: bool,
    /// When set, the resolved logo is downloaded here
    pub download_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Screenshots are downscaled to this width before sampling
    pub sample_width: u32,
    /// Fraction of the image height treated as the header band
    pub top_band_ratio: f64,
    /// Minimum HSV saturation for a cluster to count as a brand color
    pub min_saturation: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandingConfig {
    pub font_family: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_PROBE_TIMEOUT,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            method: ProbeMethod::default(),
        }
    }
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            brand_api_url: DEFAULT_BRAND_API_URL.to_string(),
            favicon_url: DEFAULT_FAVICON_URL.to_string(),
            common_paths: DEFAULT_COMMON_LOGO_PATHS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            concurrent_common_paths: DEFAULT_CONCURRENT_COMMON_PATHS,
            download_dir: None,
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            sample_width: DEFAULT_SAMPLE_WIDTH,
            top_band_ratio: DEFAULT_TOP_BAND_RATIO,
            min_saturation: DEFAULT_MIN_SATURATION,
        }
    }
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

impl PaletteConfig {
    /// Clamp ratios into range and keep the sample width usable
    pub fn sanitized(&self) -> Self {
        Self {
            sample_width: self.sample_width.max(8),
            top_band_ratio: self.top_band_ratio.clamp(0.01, 1.0),
            min_saturation: self.min_saturation.clamp(0.0, 1.0),
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        let config_file =
            std::env::var(CONFIG_FILE_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from_file(&config_file)
    }

    pub fn load_from_file<P: AsRef<Path>>(config_file: P) -> AppResult<Self> {
        let path = config_file.as_ref();
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            config.validate()?;
            info!("Configuration loaded from: {}", path.display());
            Ok(config)
        } else {
            debug!("No config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Reject values that parse but would make every lookup fail
    pub fn validate(&self) -> AppResult<()> {
        for (key, template) in [
            ("logo.brand_api_url", &self.logo.brand_api_url),
            ("logo.favicon_url", &self.logo.favicon_url),
        ] {
            if !template.contains("{domain}") {
                return Err(AppError::configuration(format!(
                    "{key} has no {{domain}} placeholder: {template}"
                )));
            }
        }
        if self.probe.timeout.is_zero() {
            return Err(AppError::configuration("probe.timeout must be greater than zero"));
        }
        Ok(())
    }
}
