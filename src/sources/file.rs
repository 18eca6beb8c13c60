//! File-backed rendering agent
//!
//! Serves captures written ahead of time by an external headless browser: a
//! screenshot image plus a JSON document holding the CSS signals and page
//! text, for example
//!
//! ```json
//! {
//!   "title": "React",
//!   "description": "The library for web and native user interfaces",
//!   "primary": "rgb(8, 126, 164)",
//!   "buttonBg": "#efefef",
//!   "linkColor": "#087ea4"
//! }
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

use super::traits::{CssSignals, RenderCapture, RenderingAgent};
use crate::errors::{AppError, AppResult};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SignalsFile {
    #[serde(flatten)]
    css: CssSignals,
    title: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FileRenderingAgent {
    screenshot: Option<PathBuf>,
    signals: Option<PathBuf>,
}

impl FileRenderingAgent {
    pub fn new(screenshot: Option<PathBuf>, signals: Option<PathBuf>) -> Self {
        Self {
            screenshot,
            signals,
        }
    }

    async fn read_screenshot(path: &Path) -> AppResult<Vec<u8>> {
        fs::read(path).await.map_err(|e| {
            AppError::render(format!("cannot read screenshot {}: {e}", path.display()))
        })
    }

    async fn read_signals(path: &Path) -> AppResult<SignalsFile> {
        let raw = fs::read_to_string(path).await.map_err(|e| {
            AppError::render(format!("cannot read signals {}: {e}", path.display()))
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[async_trait]
impl RenderingAgent for FileRenderingAgent {
    /// Each file is read on its own so one bad file never hides the other.
    /// Errors only when every configured file failed.
    async fn capture(&self, url: &str) -> AppResult<RenderCapture> {
        info!("Loading pre-rendered capture for {}", url);

        let mut first_error = None;

        let screenshot = match &self.screenshot {
            Some(path) => match Self::read_screenshot(path).await {
                Ok(bytes) => Some(bytes),
                Err(e) => {
                    warn!("Screenshot unavailable for {}: {}", url, e);
                    first_error = Some(e);
                    None
                }
            },
            None => None,
        };

        let signals = match &self.signals {
            Some(path) => match Self::read_signals(path).await {
                Ok(signals) => Some(signals),
                Err(e) => {
                    warn!("CSS signals unavailable for {}: {}", url, e);
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                    None
                }
            },
            None => None,
        };

        if screenshot.is_none() && signals.is_none() {
            if let Some(e) = first_error {
                return Err(e);
            }
        }

        let signals = signals.unwrap_or_default();
        debug!(
            "Capture for {}: screenshot={} bytes, css signals present={}",
            url,
            screenshot.as_ref().map_or(0, Vec::len),
            !signals.css.is_empty()
        );

        Ok(RenderCapture {
            screenshot,
            css: signals.css,
            title: signals.title,
            description: signals.description,
        })
    }
}
