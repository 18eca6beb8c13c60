//! Rendering collaborator trait definitions
//!
//! Page rendering (navigation, screenshots, DOM and computed-style access) is
//! owned by an external agent such as a headless browser. The pipeline only
//! sees what the agent hands back: a fixed-viewport screenshot, raw CSS
//! color strings and page text.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;

/// Raw CSS color signals gathered from a rendered page
///
/// Every field is the unparsed string the browser reported, or `None` when
/// the page does not define it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CssSignals {
    /// Value of the page's primary color custom property
    #[serde(alias = "primaryVar")]
    pub primary: Option<String>,
    /// Value of the page's accent color custom property
    #[serde(alias = "accentVar")]
    pub accent: Option<String>,
    /// Computed background color of the first visible button
    pub button_bg: Option<String>,
    /// Computed color of the first visible link
    pub link_color: Option<String>,
}

impl CssSignals {
    /// Whether the page reported no signals at all
    pub fn is_empty(&self) -> bool {
        self.primary.is_none()
            && self.accent.is_none()
            && self.button_bg.is_none()
            && self.link_color.is_none()
    }
}

/// Everything one rendering session produces for a page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderCapture {
    /// Encoded raster screenshot (PNG, JPEG, ...), absent when capture failed
    pub screenshot: Option<Vec<u8>>,
    pub css: CssSignals,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// External page rendering agent
///
/// Implementations should gather all signals from a single page load and
/// return partial data on navigation timeouts. An `Err` means nothing usable
/// was captured.
#[async_trait]
pub trait RenderingAgent: Send + Sync {
    async fn capture(&self, url: &str) -> AppResult<RenderCapture>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signals_deserialize_camel_case() {
        let json = r##"{"primary":"rgb(10, 20, 30)","buttonBg":"#efefef","linkColor":"#0000ee"}"##;
        let signals: CssSignals = serde_json::from_str(json).unwrap();
        assert_eq!(signals.primary.as_deref(), Some("rgb(10, 20, 30)"));
        assert_eq!(signals.accent, None);
        assert_eq!(signals.button_bg.as_deref(), Some("#efefef"));
        assert_eq!(signals.link_color.as_deref(), Some("#0000ee"));
    }

    #[test]
    fn test_signals_accept_var_aliases() {
        let json = r##"{"primaryVar":"#ff6600","accentVar":"teal"}"##;
        let signals: CssSignals = serde_json::from_str(json).unwrap();
        assert_eq!(signals.primary.as_deref(), Some("#ff6600"));
        assert_eq!(signals.accent.as_deref(), Some("teal"));
    }

    #[test]
    fn test_empty_signals() {
        assert!(CssSignals::default().is_empty());
        let signals = CssSignals {
            link_color: Some("red".into()),
            ..Default::default()
        };
        assert!(!signals.is_empty());
    }
}
