mod common;

use rstest::rstest;
use std::sync::Arc;
use std::time::Duration;

use brand_extract::models::LogoQuality;
use brand_extract::services::LogoResolver;
use brand_extract::utils::WarningLog;
use common::{logo_config, RecordingProbe};

const PATHS: &[&str] = &["/logo.svg", "/logo.png", "/assets/logo.svg", "/assets/logo.png"];

#[tokio::test]
async fn brand_api_hit_skips_remaining_tiers() {
    let probe = Arc::new(RecordingProbe::new().with_live("https://brand.test/stripe.com"));
    let resolver = LogoResolver::new(probe.clone(), logo_config(PATHS, true));
    let warnings = WarningLog::new();

    let result = resolver
        .resolve("stripe.com", "https://stripe.com/docs", &warnings)
        .await;

    assert_eq!(result.quality, LogoQuality::High);
    assert_eq!(result.url, "https://brand.test/stripe.com");
    assert_eq!(probe.call_count(), 1);
    assert!(warnings.is_empty());
}

#[rstest]
#[case(true)]
#[case(false)]
#[tokio::test]
async fn all_probes_failing_ends_at_favicon(#[case] concurrent: bool) {
    let probe = Arc::new(RecordingProbe::new());
    let resolver = LogoResolver::new(probe.clone(), logo_config(PATHS, concurrent));
    let warnings = WarningLog::new();

    let result = resolver
        .resolve("example.com", "https://www.example.com/guide", &warnings)
        .await;

    assert_eq!(result.quality, LogoQuality::Favicon);
    assert_eq!(
        result.url,
        "https://icons.test/s2/favicons?domain=example.com&sz=256"
    );
    assert_eq!(warnings.len(), 1);
    assert!(warnings.contains("favicon"));

    // Brand API once and every common path once; the favicon tier is never probed
    assert_eq!(probe.call_count(), 1 + PATHS.len());
    assert!(!probe.calls().iter().any(|url| url.contains("icons.test")));
}

#[rstest]
#[case(true)]
#[case(false)]
#[tokio::test]
async fn earliest_listed_common_path_wins(#[case] concurrent: bool) {
    // The first listed path answers last
    let probe = Arc::new(
        RecordingProbe::new()
            .with_slow_live("https://www.example.com/logo.png", Duration::from_millis(80))
            .with_live("https://www.example.com/assets/logo.svg")
            .with_live("https://www.example.com/assets/logo.png"),
    );
    let resolver = LogoResolver::new(probe.clone(), logo_config(PATHS, concurrent));
    let warnings = WarningLog::new();

    let result = resolver
        .resolve("example.com", "https://www.example.com/guide/intro", &warnings)
        .await;

    assert_eq!(result.quality, LogoQuality::Medium);
    assert_eq!(result.url, "https://www.example.com/logo.png");
    assert!(warnings.is_empty());
}

#[tokio::test]
async fn sequential_mode_stops_probing_after_hit() {
    let probe = Arc::new(RecordingProbe::new().with_live("https://example.com/logo.png"));
    let resolver = LogoResolver::new(probe.clone(), logo_config(PATHS, false));

    resolver
        .resolve("example.com", "https://example.com", &WarningLog::new())
        .await;

    assert_eq!(
        probe.calls(),
        vec![
            "https://brand.test/example.com",
            "https://example.com/logo.svg",
            "https://example.com/logo.png",
        ]
    );
}

#[tokio::test]
async fn common_paths_resolve_against_origin_not_page_path() {
    let probe = Arc::new(RecordingProbe::new().with_live("http://localhost:3000/logo.svg"));
    let resolver = LogoResolver::new(probe.clone(), logo_config(PATHS, true));

    let result = resolver
        .resolve("localhost", "http://localhost:3000/docs/getting-started/", &WarningLog::new())
        .await;

    assert_eq!(result.url, "http://localhost:3000/logo.svg");
    assert_eq!(result.quality, LogoQuality::Medium);
}
