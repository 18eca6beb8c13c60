/// Configuration default values
///
/// This module contains all the default values for configuration options,
/// making them easily changeable in one central location.
use std::time::Duration;

// Probe defaults
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(3);

// Logo resolution defaults
pub const DEFAULT_BRAND_API_URL: &str = "https://logo.clearbit.com/{domain}";
pub const DEFAULT_FAVICON_URL: &str = "https://www.google.com/s2/favicons?domain={domain}&sz=256";
pub const DEFAULT_CONCURRENT_COMMON_PATHS: bool = true;
pub const DEFAULT_COMMON_LOGO_PATHS: &[&str] = &[
    "/logo.svg",
    "/logo.png",
    "/assets/logo.svg",
    "/assets/logo.png",
    "/images/logo.svg",
    "/images/logo.png",
    "/img/logo.svg",
    "/img/logo.png",
    "/static/logo.svg",
    "/static/logo.png",
    "/apple-touch-icon.png",
];

// Palette extraction defaults
pub const DEFAULT_SAMPLE_WIDTH: u32 = 160;
pub const DEFAULT_TOP_BAND_RATIO: f64 = 0.15;
pub const DEFAULT_MIN_SATURATION: f64 = 0.25;

// Branding defaults
pub const DEFAULT_FONT_FAMILY: &str =
    "Inter, system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";

// Config file lookup
pub const DEFAULT_CONFIG_FILE: &str = "brand-extract.toml";
pub const CONFIG_FILE_ENV: &str = "BRAND_EXTRACT_CONFIG";
