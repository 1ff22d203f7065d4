//! Robots-Probe main entry point
//!
//! This is the command-line interface for the Robots-Probe auditing tool.

use anyhow::Context;
use clap::Parser;
use robots_probe::prober::ReqwestTransport;
use robots_probe::{run_target, ConsoleReporter, ProbeConfig};
use tracing_subscriber::EnvFilter;

/// Robots-Probe: audit what a site's robots.txt tries to hide
///
/// Fetches robots.txt from the target, extracts every Disallow path and
/// requests each one in turn, printing its HTTP status and page title.
#[derive(Parser, Debug)]
#[command(name = "robots-probe")]
#[command(version)]
#[command(about = "Fetch and analyze robots.txt for disallowed paths", long_about = None)]
struct Cli {
    /// Target URL (e.g., http://example.com)
    #[arg(short, long, value_name = "URL")]
    url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging();

    let config = ProbeConfig::default();

    // One client for the whole run, dropped on exit
    let transport =
        ReqwestTransport::from_config(&config).context("Failed to build HTTP client")?;

    let mut reporter = ConsoleReporter::stdout();
    let summary = run_target(&transport, &cli.url, &config, &mut reporter).await?;

    tracing::debug!(
        "Run finished: robots fetched: {}, paths: {}, probed: {}, failed: {}",
        summary.robots_fetched,
        summary.paths_found,
        summary.probed,
        summary.failed
    );

    Ok(())
}

/// Sets up the logging/tracing subscriber
///
/// Diagnostics go to stderr so stdout carries only the report.
fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("robots_probe=warn"))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
