//! Screenshot palette extraction
//!
//! Pixels are quantized into 4-bit-per-channel buckets. The background is the
//! heaviest bucket, with the header band counting double. Primary and accent
//! are the most prominent saturated buckets that stand apart from the
//! background and from each other.

use std::collections::HashMap;
use tracing::{debug, warn};

use crate::color::Color;
use crate::config::PaletteConfig;
use crate::errors::{PaletteError, PaletteResult};
use crate::models::BrandColors;

/// Pixels below this alpha are ignored
const MIN_ALPHA: u8 = 128;
/// Buckets darker than this HSV value read as text or shadow, not brand color
const MIN_BRAND_VALUE: f64 = 0.15;
/// A brand color must be at least this far (RGB euclidean) from the background
const MIN_BACKGROUND_DISTANCE: f64 = 48.0;
/// Accent must be at least this far from the primary
const MIN_ACCENT_DISTANCE: f64 = 64.0;
/// Buckets covering less than this share of sampled pixels are noise
const MIN_CLUSTER_SHARE: f64 = 0.001;
/// Accent derived from primary when no second brand color exists
const ACCENT_LIGHTEN: f64 = 0.4;
const TOP_BAND_WEIGHT: u64 = 2;

#[derive(Debug, Default, Clone, Copy)]
struct Bucket {
    pixels: u64,
    weight: u64,
    sum_r: u64,
    sum_g: u64,
    sum_b: u64,
}

impl Bucket {
    fn add(&mut self, r: u8, g: u8, b: u8, weight: u64) {
        self.pixels += 1;
        self.weight += weight;
        self.sum_r += u64::from(r);
        self.sum_g += u64::from(g);
        self.sum_b += u64::from(b);
    }

    fn mean(&self) -> Color {
        let n = self.pixels.max(1);
        let avg = |sum: u64| ((sum as f64 / n as f64).round()).clamp(0.0, 255.0) as u8;
        Color::rgb(avg(self.sum_r), avg(self.sum_g), avg(self.sum_b))
    }
}

fn bucket_key(r: u8, g: u8, b: u8) -> u16 {
    (u16::from(r >> 4) << 8) | (u16::from(g >> 4) << 4) | u16::from(b >> 4)
}

#[derive(Debug, Clone, Copy)]
struct Cluster {
    key: u16,
    color: Color,
    pixels: u64,
    weight: u64,
}

#[derive(Debug, Clone)]
pub struct PaletteExtractor {
    config: PaletteConfig,
}

impl Default for PaletteExtractor {
    fn default() -> Self {
        Self::new(PaletteConfig::default())
    }
}

impl PaletteExtractor {
    pub fn new(config: PaletteConfig) -> Self {
        Self {
            config: config.sanitized(),
        }
    }

    /// Baseline palette for a screenshot, the default palette on any failure
    pub fn extract(&self, screenshot: &[u8]) -> BrandColors {
        self.try_extract(screenshot).unwrap_or_else(|e| {
            warn!("Palette extraction fell back to defaults: {}", e);
            BrandColors::default()
        })
    }

    /// Baseline palette for a screenshot
    ///
    /// A decodable screenshot without any saturated region keeps its detected
    /// background and uses the default brand colors.
    pub fn try_extract(&self, screenshot: &[u8]) -> PaletteResult<BrandColors> {
        let clusters = self.cluster(screenshot)?;

        let total: u64 = clusters.iter().map(|c| c.pixels).sum();
        let background = clusters
            .iter()
            .max_by(|a, b| a.weight.cmp(&b.weight).then(b.key.cmp(&a.key)))
            .map(|c| c.color)
            .ok_or(PaletteError::Empty)?;

        if clusters.len() == 1 {
            return Err(PaletteError::Uniform {
                color: background.to_hex(),
            });
        }

        let min_pixels = ((total as f64 * MIN_CLUSTER_SHARE).ceil() as u64).max(1);
        let mut candidates: Vec<(f64, Cluster)> = clusters
            .iter()
            .filter(|c| c.pixels >= min_pixels)
            .filter(|c| c.color.saturation() >= self.config.min_saturation)
            .filter(|c| c.color.value() >= MIN_BRAND_VALUE)
            .filter(|c| c.color.distance(background) > MIN_BACKGROUND_DISTANCE)
            .map(|c| (c.pixels as f64 * c.color.saturation(), *c))
            .collect();

        candidates.sort_by(|(sa, a), (sb, b)| {
            sb.total_cmp(sa).then(a.key.cmp(&b.key))
        });

        let Some((_, primary)) = candidates.first().copied() else {
            debug!(
                "No saturated region in screenshot, keeping background {}",
                background
            );
            return Ok(BrandColors {
                background,
                ..BrandColors::default()
            });
        };
        let primary = primary.color;

        let accent = candidates
            .iter()
            .skip(1)
            .map(|(_, c)| c.color)
            .find(|c| c.distance(primary) >= MIN_ACCENT_DISTANCE)
            .unwrap_or_else(|| primary.lighten(ACCENT_LIGHTEN));

        debug!(
            "Screenshot palette: primary={} accent={} background={} ({} clusters)",
            primary,
            accent,
            background,
            clusters.len()
        );

        Ok(BrandColors::from_primary(primary, accent, background))
    }

    fn cluster(&self, screenshot: &[u8]) -> PaletteResult<Vec<Cluster>> {
        let image = image::load_from_memory(screenshot)?;
        if image.width() == 0 || image.height() == 0 {
            return Err(PaletteError::Empty);
        }

        let image = if image.width() > self.config.sample_width {
            let height = (u64::from(image.height()) * u64::from(self.config.sample_width)
                / u64::from(image.width()))
            .max(1);
            let height = u32::try_from(height).unwrap_or(u32::MAX);
            image.thumbnail_exact(self.config.sample_width, height)
        } else {
            image
        };

        let rgba = image.to_rgba8();
        let band_rows = (f64::from(rgba.height()) * self.config.top_band_ratio).ceil() as u32;

        let mut buckets: HashMap<u16, Bucket> = HashMap::new();
        for (_, y, pixel) in rgba.enumerate_pixels() {
            let [r, g, b, a] = pixel.0;
            if a < MIN_ALPHA {
                continue;
            }
            let weight = if y < band_rows { TOP_BAND_WEIGHT } else { 1 };
            buckets.entry(bucket_key(r, g, b)).or_default().add(r, g, b, weight);
        }

        if buckets.is_empty() {
            return Err(PaletteError::Empty);
        }

        Ok(buckets
            .into_iter()
            .map(|(key, bucket)| Cluster {
                key,
                color: bucket.mean(),
                pixels: bucket.pixels,
                weight: bucket.weight,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
    use std::io::Cursor;

    const WHITE: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);
    const BLUE: Rgb<u8> = Rgb([0x0a, 0x5b, 0xd6]);
    const ORANGE: Rgb<u8> = Rgb([0xf5, 0x7c, 0x00]);

    fn encode(image: DynamicImage) -> Vec<u8> {
        let mut buf = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    fn fill(image: &mut RgbImage, x0: u32, y0: u32, w: u32, h: u32, color: Rgb<u8>) {
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                image.put_pixel(x, y, color);
            }
        }
    }

    /// White page, a blue header button and a small orange badge
    fn branded_page() -> Vec<u8> {
        let mut image = RgbImage::from_pixel(100, 80, WHITE);
        fill(&mut image, 10, 20, 40, 20, BLUE);
        fill(&mut image, 70, 60, 10, 5, ORANGE);
        encode(DynamicImage::ImageRgb8(image))
    }

    #[test]
    fn test_extracts_brand_colors() {
        let colors = PaletteExtractor::default().try_extract(&branded_page()).unwrap();

        assert_eq!(colors.background.to_hex(), "#ffffff");
        assert_eq!(colors.primary.to_hex(), "#0a5bd6");
        assert_eq!(colors.accent.to_hex(), "#f57c00");
        assert_eq!(colors.secondary, colors.primary.darken(0.6));
    }

    #[test]
    fn test_accent_derived_when_single_brand_color() {
        let mut image = RgbImage::from_pixel(100, 80, WHITE);
        fill(&mut image, 0, 30, 100, 20, BLUE);
        let colors = PaletteExtractor::default()
            .try_extract(&encode(DynamicImage::ImageRgb8(image)))
            .unwrap();

        assert_eq!(colors.primary.to_hex(), "#0a5bd6");
        assert_eq!(colors.accent, colors.primary.lighten(0.4));
    }

    #[test]
    fn test_top_band_decides_background() {
        // 50 dark rows (15 of them header) against 50 white rows
        let mut image = RgbImage::from_pixel(100, 100, WHITE);
        fill(&mut image, 0, 0, 100, 15, Rgb([0x1a, 0x1a, 0x1a]));
        fill(&mut image, 0, 15, 100, 35, Rgb([0x1a, 0x1a, 0x1a]));
        let colors = PaletteExtractor::default()
            .try_extract(&encode(DynamicImage::ImageRgb8(image)))
            .unwrap();

        assert_eq!(colors.background.to_hex(), "#1a1a1a");
    }

    #[test]
    fn test_grayscale_page_keeps_background_only() {
        let mut image = RgbImage::from_pixel(100, 80, Rgb([0x12, 0x12, 0x12]));
        fill(&mut image, 10, 10, 60, 4, Rgb([0xcc, 0xcc, 0xcc]));
        let colors = PaletteExtractor::default()
            .try_extract(&encode(DynamicImage::ImageRgb8(image)))
            .unwrap();

        let defaults = BrandColors::default();
        assert_eq!(colors.background.to_hex(), "#121212");
        assert_eq!(colors.primary, defaults.primary);
        assert_eq!(colors.secondary, defaults.secondary);
        assert_eq!(colors.accent, defaults.accent);
    }

    #[test]
    fn test_blank_page_is_uniform() {
        let image = RgbImage::from_pixel(64, 64, WHITE);
        let bytes = encode(DynamicImage::ImageRgb8(image));
        let extractor = PaletteExtractor::default();

        assert!(matches!(
            extractor.try_extract(&bytes),
            Err(PaletteError::Uniform { .. })
        ));
        assert_eq!(extractor.extract(&bytes), BrandColors::default());
    }

    #[test]
    fn test_transparent_image_is_empty() {
        let image = RgbaImage::from_pixel(16, 16, Rgba([0x0a, 0x5b, 0xd6, 0]));
        let bytes = encode(DynamicImage::ImageRgba8(image));

        assert!(matches!(
            PaletteExtractor::default().try_extract(&bytes),
            Err(PaletteError::Empty)
        ));
    }

    #[test]
    fn test_garbage_bytes_fall_back_to_defaults() {
        let extractor = PaletteExtractor::default();
        assert!(matches!(
            extractor.try_extract(b"definitely not an image"),
            Err(PaletteError::Decode(_))
        ));
        assert_eq!(extractor.extract(b""), BrandColors::default());
    }

    #[test]
    fn test_large_screenshot_is_downscaled() {
        let mut image = RgbImage::from_pixel(1280, 720, WHITE);
        fill(&mut image, 0, 200, 1280, 200, BLUE);
        let colors = PaletteExtractor::default()
            .try_extract(&encode(DynamicImage::ImageRgb8(image)))
            .unwrap();

        assert_eq!(colors.background.to_hex(), "#ffffff");
        assert!(colors.primary.distance(Color::rgb(0x0a, 0x5b, 0xd6)) < 8.0);
    }
}
