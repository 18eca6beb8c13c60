#![allow(dead_code)]

use async_trait::async_trait;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Mutex;
use std::time::Duration;

use brand_extract::config::LogoConfig;
use brand_extract::errors::{AppError, AppResult};
use brand_extract::sources::{CssSignals, RenderCapture, RenderingAgent};
use brand_extract::utils::{HttpProbe, ProbeOutcome};

pub const BRAND_API: &str = "https://brand.test/{domain}";
pub const FAVICON: &str = "https://icons.test/s2/favicons?domain={domain}&sz=256";

pub fn logo_config(paths: &[&str], concurrent: bool) -> LogoConfig {
    LogoConfig {
        brand_api_url: BRAND_API.to_string(),
        favicon_url: FAVICON.to_string(),
        common_paths: paths.iter().map(|p| p.to_string()).collect(),
        concurrent_common_paths: concurrent,
        download_dir: None,
    }
}

/// Probe that answers 200 for registered URLs, 404 otherwise, and records every call
#[derive(Default)]
pub struct RecordingProbe {
    live: HashMap<String, Duration>,
    bodies: HashMap<String, Vec<u8>>,
    calls: Mutex<Vec<String>>,
    fetches: Mutex<Vec<String>>,
}

impl RecordingProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_live(mut self, url: &str) -> Self {
        self.live.insert(url.to_string(), Duration::ZERO);
        self
    }

    /// Live URL whose probe answers only after `delay`
    pub fn with_slow_live(mut self, url: &str, delay: Duration) -> Self {
        self.live.insert(url.to_string(), delay);
        self
    }

    pub fn with_body(mut self, url: &str, body: Vec<u8>) -> Self {
        self.bodies.insert(url.to_string(), body);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn fetches(&self) -> Vec<String> {
        self.fetches.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpProbe for RecordingProbe {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        self.calls.lock().unwrap().push(url.to_string());
        match self.live.get(url) {
            Some(delay) => {
                if !delay.is_zero() {
                    tokio::time::sleep(*delay).await;
                }
                ProbeOutcome::Status(200)
            }
            None => ProbeOutcome::Status(404),
        }
    }

    async fn fetch(&self, url: &str) -> AppResult<Vec<u8>> {
        self.fetches.lock().unwrap().push(url.to_string());
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| AppError::external_service("http_client", format!("HTTP 404 - URL: {url}")))
    }
}

/// Rendering agent returning a canned capture, or failing
pub struct StaticRenderer {
    capture: Option<RenderCapture>,
}

impl StaticRenderer {
    pub fn new(capture: RenderCapture) -> Self {
        Self {
            capture: Some(capture),
        }
    }

    pub fn failing() -> Self {
        Self { capture: None }
    }
}

#[async_trait]
impl RenderingAgent for StaticRenderer {
    async fn capture(&self, _url: &str) -> AppResult<RenderCapture> {
        self.capture
            .clone()
            .ok_or_else(|| AppError::render("navigation timeout after 30s"))
    }
}

pub fn capture(screenshot: Option<Vec<u8>>, css: CssSignals) -> RenderCapture {
    RenderCapture {
        screenshot,
        css,
        title: None,
        description: None,
    }
}

pub const WHITE: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);
pub const NEAR_BLACK: Rgb<u8> = Rgb([0x1a, 0x1a, 0x1a]);
pub const BLUE: Rgb<u8> = Rgb([0x0a, 0x5b, 0xd6]);
pub const ORANGE: Rgb<u8> = Rgb([0xf5, 0x7c, 0x00]);

/// 100x80 PNG page: `background` with a large blue block and a small orange badge
pub fn page_png(background: Rgb<u8>) -> Vec<u8> {
    let mut image = RgbImage::from_pixel(100, 80, background);
    for y in 20..40 {
        for x in 10..50 {
            image.put_pixel(x, y, BLUE);
        }
    }
    for y in 60..65 {
        for x in 70..80 {
            image.put_pixel(x, y, ORANGE);
        }
    }

    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}
