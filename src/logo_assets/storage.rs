use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

use crate::errors::AppResult;

const SVG_SNIFF_LEN: usize = 1024;
const FALLBACK_EXTENSION: &str = "png";

/// Writes downloaded logos to a local directory
#[derive(Debug, Clone)]
pub struct LogoStore {
    pub logo_dir: PathBuf,
}

impl LogoStore {
    pub fn new(logo_dir: PathBuf) -> Self {
        Self { logo_dir }
    }

    pub async fn ensure_storage_dir(&self) -> Result<(), std::io::Error> {
        if !self.logo_dir.exists() {
            fs::create_dir_all(&self.logo_dir).await?;
        }
        Ok(())
    }

    /// Save logo bytes as `<dir>/<domain>-logo.<ext>`, replacing any previous file
    pub async fn save(&self, domain: &str, data: &[u8]) -> AppResult<PathBuf> {
        self.ensure_storage_dir().await?;

        let file_path = self.logo_path(domain, Self::detect_extension(data));

        fs::write(&file_path, data).await?;
        debug!("Saved {} byte logo to {}", data.len(), file_path.display());

        Ok(file_path)
    }

    /// Path a logo for `domain` with extension `ext` would be saved under
    pub fn logo_path(&self, domain: &str, ext: &str) -> PathBuf {
        self.logo_dir
            .join(format!("{}-logo.{}", Self::file_stem(domain), ext))
    }

    /// File extension for image bytes; raster formats by magic number, SVG by markup
    pub fn detect_extension(data: &[u8]) -> &'static str {
        if let Ok(format) = image::guess_format(data) {
            if let Some(ext) = format.extensions_str().first() {
                return *ext;
            }
        }

        if Self::looks_like_svg(data) {
            return "svg";
        }

        FALLBACK_EXTENSION
    }

    fn looks_like_svg(data: &[u8]) -> bool {
        let head = &data[..data.len().min(SVG_SNIFF_LEN)];
        let text = String::from_utf8_lossy(head).to_ascii_lowercase();
        let trimmed = text.trim_start_matches('\u{feff}').trim_start();
        (trimmed.starts_with("<svg") || trimmed.starts_with("<?xml") || trimmed.starts_with("<!--"))
            && text.contains("<svg")
    }

    fn file_stem(domain: &str) -> String {
        let stem: String = domain
            .trim()
            .to_ascii_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        let stem = stem.trim_matches('.');

        if stem.is_empty() {
            "site".to_string()
        } else {
            stem.to_string()
        }
    }
}
