//! Branding pipeline entry point
//!
//! Composes logo resolution, screenshot palette extraction, CSS-signal
//! refinement, theme classification and industry inference into a single
//! always-complete [`BrandingResult`]. Every partial failure becomes a
//! warning plus the documented default for that step.

use std::sync::Arc;
use strum::Display;
use tracing::{debug, info, warn};

use super::industry_classifier;
use super::logo_resolver::LogoResolver;
use super::palette_extractor::PaletteExtractor;
use super::theme_classifier;
use crate::color::{self, Color};
use crate::config::Config;
use crate::logo_assets::LogoStore;
use crate::models::{BrandColors, BrandLogo, BrandingResult};
use crate::sources::{CssSignals, RenderCapture, RenderingAgent};
use crate::utils::{HttpProbe, UrlUtils, WarningLog};

/// User-agent default button backgrounds across common browsers
const BUTTON_UA_DEFAULTS: &[Color] = &[
    Color::rgb(0xef, 0xef, 0xef),
    Color::rgb(0xf0, 0xf0, 0xf0),
    Color::rgb(0xff, 0xff, 0xff),
    Color::rgb(0x00, 0x00, 0x00),
    Color::rgb(0xdd, 0xdd, 0xdd),
];

/// User-agent default link colors (unvisited, visited, plain text)
const LINK_UA_DEFAULTS: &[Color] = &[
    Color::rgb(0x00, 0x00, 0xee),
    Color::rgb(0x55, 0x1a, 0x8b),
    Color::rgb(0x00, 0x00, 0x00),
];

/// Where the final primary color came from, highest priority first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum PrimarySource {
    CssVariable,
    ButtonBackground,
    LinkColor,
    Screenshot,
}

pub struct BrandingOrchestrator {
    resolver: LogoResolver,
    probe: Arc<dyn HttpProbe>,
    renderer: Arc<dyn RenderingAgent>,
    extractor: PaletteExtractor,
    store: Option<LogoStore>,
    font_family: String,
}

impl BrandingOrchestrator {
    pub fn new(
        config: &Config,
        probe: Arc<dyn HttpProbe>,
        renderer: Arc<dyn RenderingAgent>,
    ) -> Self {
        Self {
            resolver: LogoResolver::new(probe.clone(), config.logo.clone()),
            probe,
            renderer,
            extractor: PaletteExtractor::new(config.palette.clone()),
            store: config.logo.download_dir.clone().map(LogoStore::new),
            font_family: config.branding.font_family.clone(),
        }
    }

    /// Run the full pipeline for one page. Never fails.
    pub async fn extract_branding(&self, page_url: &str, warnings: &WarningLog) -> BrandingResult {
        info!("Extracting branding for {}", page_url);

        let domain = UrlUtils::brand_domain(page_url).unwrap_or_else(|| {
            warnings.push(format!("Could not derive a domain from '{page_url}'"));
            String::new()
        });

        let mut logo = BrandLogo::from(self.resolver.resolve(&domain, page_url, warnings).await);
        if let Some(store) = &self.store {
            logo.local_path = self.download_logo(store, &domain, &logo.url, warnings).await;
        }

        let (capture, baseline) = match self.renderer.capture(page_url).await {
            Ok(capture) => {
                let baseline = self.baseline_palette(capture.screenshot.as_deref(), warnings);
                (capture, baseline)
            }
            Err(e) => {
                warnings.push(format!("Page render failed for {page_url}: {e}; using default palette"));
                (RenderCapture::default(), BrandColors::default())
            }
        };

        let (colors, source) = refine_palette(baseline, &capture.css, warnings);
        let theme = theme_classifier::classify(&colors);
        let industry = industry_classifier::infer(
            capture.title.as_deref().unwrap_or_default(),
            capture.description.as_deref().unwrap_or_default(),
        );

        info!(
            "Branding for {}: primary={} ({}) background={} theme={} industry={} logo={}",
            page_url, colors.primary, source, colors.background, theme, industry, logo.quality
        );

        BrandingResult {
            logo,
            colors,
            font: self.font_family.clone(),
            theme,
            industry,
        }
    }

    fn baseline_palette(&self, screenshot: Option<&[u8]>, warnings: &WarningLog) -> BrandColors {
        let Some(bytes) = screenshot else {
            warnings.push("No screenshot captured; using default palette");
            return BrandColors::default();
        };

        match self.extractor.try_extract(bytes) {
            Ok(colors) => colors,
            Err(e) => {
                warnings.push(format!("Screenshot palette extraction failed: {e}; using default palette"));
                BrandColors::default()
            }
        }
    }

    async fn download_logo(
        &self,
        store: &LogoStore,
        domain: &str,
        url: &str,
        warnings: &WarningLog,
    ) -> Option<std::path::PathBuf> {
        let saved = match self.probe.fetch(url).await {
            Ok(bytes) => store.save(domain, &bytes).await,
            Err(e) => Err(e),
        };

        match saved {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Logo download from {} failed: {}", url, e);
                warnings.push(format!("Logo download failed for {url}: {e}"));
                None
            }
        }
    }
}

/// Overlay CSS signals on a baseline palette
///
/// Primary priority is CSS variable, then a non-default button background,
/// then a non-default link color, then the baseline. The secondary always
/// follows the final primary and the background is never touched.
pub fn refine_palette(
    baseline: BrandColors,
    css: &CssSignals,
    warnings: &WarningLog,
) -> (BrandColors, PrimarySource) {
    let mut colors = baseline;
    let mut source = PrimarySource::Screenshot;

    if let Some(raw) = present(css.primary.as_deref()) {
        colors = colors.with_primary(normalize_variable("primary", raw, warnings));
        source = PrimarySource::CssVariable;
    } else if let Some(button) = observed_color(css.button_bg.as_deref(), BUTTON_UA_DEFAULTS) {
        colors = colors.with_primary(button);
        source = PrimarySource::ButtonBackground;
    } else if let Some(link) = observed_color(css.link_color.as_deref(), LINK_UA_DEFAULTS) {
        colors = colors.with_primary(link);
        source = PrimarySource::LinkColor;
    }

    if let Some(raw) = present(css.accent.as_deref()) {
        colors = colors.with_accent(normalize_variable("accent", raw, warnings));
    }

    debug!("Primary color source: {}", source);
    (colors, source)
}

/// Browsers report undefined custom properties as empty strings
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn normalize_variable(name: &str, raw: &str, warnings: &WarningLog) -> Color {
    let normalized = color::normalize(raw);
    if color::try_parse(raw).is_none() {
        warnings.push(format!(
            "Unsupported CSS {name} color '{raw}', using {normalized}"
        ));
    }
    normalized
}

/// A computed-style color that carries brand intent: parses, is visible and
/// is not a user-agent default
fn observed_color(value: Option<&str>, ua_defaults: &[Color]) -> Option<Color> {
    let raw = present(value)?;
    let parsed = color::try_parse(raw)?;
    if color::alpha(raw).unwrap_or(0.0) <= 0.0 {
        return None;
    }
    (!ua_defaults.contains(&parsed)).then_some(parsed)
}
