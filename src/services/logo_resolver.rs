//! Tiered logo resolution
//!
//! Tiers are tried strictly in order and the first live result wins:
//!
//! 1. brand logo service keyed by domain (`high`)
//! 2. conventional asset paths under the page origin (`medium`)
//! 3. favicon service (`favicon`), which is never probed and always succeeds
//!
//! Probe failures of any kind only advance to the next tier.

use futures::future::join_all;
use std::sync::Arc;
use strum::Display;
use tracing::{debug, info};

use crate::config::LogoConfig;
use crate::models::{LogoQuality, LogoResult};
use crate::utils::{HttpProbe, UrlUtils, WarningLog};

/// A fallible resolution tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum LogoTier {
    BrandApi,
    CommonPaths,
}

impl LogoTier {
    /// Fallible tiers in priority order; the favicon tier follows them
    pub const ORDER: [LogoTier; 2] = [LogoTier::BrandApi, LogoTier::CommonPaths];

    pub fn quality(self) -> LogoQuality {
        match self {
            LogoTier::BrandApi => LogoQuality::High,
            LogoTier::CommonPaths => LogoQuality::Medium,
        }
    }
}

pub struct LogoResolver {
    probe: Arc<dyn HttpProbe>,
    config: LogoConfig,
}

impl LogoResolver {
    pub fn new(probe: Arc<dyn HttpProbe>, config: LogoConfig) -> Self {
        Self { probe, config }
    }

    /// Resolve the best available logo. Never fails.
    pub async fn resolve(&self, domain: &str, page_url: &str, warnings: &WarningLog) -> LogoResult {
        for tier in LogoTier::ORDER {
            let found = match tier {
                LogoTier::BrandApi => self.try_brand_api(domain).await,
                LogoTier::CommonPaths => self.try_common_paths(page_url).await,
            };

            if let Some(url) = found {
                info!("Resolved logo for {} via {} tier: {}", domain, tier, url);
                return LogoResult::new(url, tier.quality());
            }
            debug!("Logo tier {} found nothing for {}", tier, domain);
        }

        self.favicon(domain, warnings)
    }

    async fn try_brand_api(&self, domain: &str) -> Option<String> {
        if domain.is_empty() {
            return None;
        }

        let url = UrlUtils::expand_template(&self.config.brand_api_url, domain);
        let outcome = self.probe.probe(&url).await;
        debug!("Brand logo probe {}: {}", url, outcome);
        outcome.is_success().then_some(url)
    }

    async fn try_common_paths(&self, page_url: &str) -> Option<String> {
        let origin = UrlUtils::origin(page_url)?;
        let candidates: Vec<String> = self
            .config
            .common_paths
            .iter()
            .filter_map(|path| UrlUtils::join(&origin, path).ok())
            .collect();

        if self.config.concurrent_common_paths {
            // join_all keeps input order, so the earliest listed live path wins
            let outcomes = join_all(candidates.iter().map(|url| self.probe.probe(url))).await;
            candidates
                .into_iter()
                .zip(outcomes)
                .inspect(|(url, outcome)| debug!("Common path probe {}: {}", url, outcome))
                .find(|(_, outcome)| outcome.is_success())
                .map(|(url, _)| url)
        } else {
            for url in candidates {
                let outcome = self.probe.probe(&url).await;
                debug!("Common path probe {}: {}", url, outcome);
                if outcome.is_success() {
                    return Some(url);
                }
            }
            None
        }
    }

    fn favicon(&self, domain: &str, warnings: &WarningLog) -> LogoResult {
        let url = UrlUtils::expand_template(&self.config.favicon_url, domain);
        warnings.push(format!(
            "No high-quality logo found for {domain}, using favicon fallback (logo quality degraded)"
        ));
        LogoResult::new(url, LogoQuality::Favicon)
    }
}
