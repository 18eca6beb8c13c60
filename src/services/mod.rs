//! Branding pipeline services
//!
//! Leaf components (palette extraction, theme and industry classification,
//! logo resolution) are composed by [`BrandingOrchestrator`], the single entry
//! point for one extraction request.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use brand_extract::config::Config;
//! use brand_extract::services::BrandingOrchestrator;
//! use brand_extract::sources::FileRenderingAgent;
//! use brand_extract::utils::{ReqwestProbe, WarningLog};
//!
//! # async fn example() -> brand_extract::errors::AppResult<()> {
//! let config = Config::load()?;
//! let probe = Arc::new(ReqwestProbe::new(&config.probe)?);
//! let renderer = Arc::new(FileRenderingAgent::default());
//! let orchestrator = BrandingOrchestrator::new(&config, probe, renderer);
//!
//! let warnings = WarningLog::new();
//! let branding = orchestrator.extract_branding("https://react.dev", &warnings).await;
//! println!("{} on {}", branding.colors.primary, branding.colors.background);
//! # Ok(())
//! # }
//! ```

pub mod branding;
pub mod industry_classifier;
pub mod logo_resolver;
pub mod palette_extractor;
pub mod theme_classifier;

pub use branding::{refine_palette, BrandingOrchestrator, PrimarySource};
pub use logo_resolver::{LogoResolver, LogoTier};
pub use palette_extractor::PaletteExtractor;
