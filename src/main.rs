use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brand_extract::{
    config::Config,
    services::BrandingOrchestrator,
    sources::FileRenderingAgent,
    utils::{ReqwestProbe, WarningLog},
};

#[derive(Parser)]
#[command(name = "brand-extract")]
#[command(version)]
#[command(about = "Extract logo, brand palette, theme and industry for a documentation page")]
#[command(long_about = None)]
struct Cli {
    /// Page URL to brand
    url: String,

    /// Pre-rendered screenshot of the page
    #[arg(short, long, value_name = "FILE")]
    screenshot: Option<PathBuf>,

    /// JSON file with CSS signals and page text captured by a headless browser
    #[arg(long, value_name = "FILE")]
    signals: Option<PathBuf>,

    /// Configuration file path (defaults to $BRAND_EXTRACT_CONFIG or brand-extract.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries the JSON result, logs go to stderr
    let log_filter = format!("brand_extract={}", cli.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting brand-extract v{}", env!("CARGO_PKG_VERSION"));

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    let probe = Arc::new(ReqwestProbe::new(&config.probe)?);
    let renderer = Arc::new(FileRenderingAgent::new(cli.screenshot, cli.signals));
    let orchestrator = BrandingOrchestrator::new(&config, probe, renderer);

    let warnings = WarningLog::new();
    let branding = orchestrator.extract_branding(&cli.url, &warnings).await;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&branding)?
    } else {
        serde_json::to_string(&branding)?
    };
    println!("{output}");

    // Degradations are reported together once the request is finished
    let collected = warnings.snapshot();
    if !collected.is_empty() {
        eprintln!("{} warning(s):", collected.len());
        for warning in collected {
            eprintln!("  - {warning}");
        }
    }

    Ok(())
}
