//! Robots-Probe: audit what a site's robots.txt tries to hide
//!
//! This crate fetches a site's robots exclusion file, extracts every
//! `Disallow:` path and probes each one, reporting the HTTP status and the
//! page title. The run is a strictly sequential pipeline:
//! fetch robots.txt, extract disallowed paths, probe each path.

pub mod config;
pub mod output;
pub mod prober;
pub mod robots;
pub mod url;

use output::Reporter;
use prober::Transport;
use thiserror::Error;

/// Main error type for Robots-Probe operations
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Transport-level failures: no HTTP response was received
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("connection to {url} failed: {message}")]
    Connect { url: String, message: String },

    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("failed to read response body from {url}: {message}")]
    Body { url: String, message: String },
}

/// Result type alias for Robots-Probe operations
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

/// Outcome counters for a single run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Whether a non-empty robots.txt was retrieved
    pub robots_fetched: bool,

    /// Number of disallowed paths extracted
    pub paths_found: usize,

    /// Number of paths that produced a result line
    pub probed: usize,

    /// Number of paths skipped after a transport failure
    pub failed: usize,
}

/// Runs the whole pipeline against a raw `--url` value
///
/// A target that cannot be normalized into an [`Origin`] is reported like
/// any other robots.txt fetch failure and ends the run with nothing
/// requested.
pub async fn run_target<T, R>(
    transport: &T,
    target: &str,
    config: &ProbeConfig,
    reporter: &mut R,
) -> Result<RunSummary>
where
    T: Transport,
    R: Reporter,
{
    match normalize_target(target) {
        Ok(origin) => run(transport, &origin, config, reporter).await,
        Err(e) => {
            tracing::warn!("Unusable target {:?}: {}", target.trim(), e);
            reporter.error(&format!("Error fetching robots.txt: {}", e))?;
            Ok(RunSummary::default())
        }
    }
}

/// Runs the whole pipeline against `origin`
///
/// A missing or empty robots.txt ends the run before any path is probed.
/// Robots fetch failures and per-path failures are reported, not returned;
/// only reporter I/O failures surface as `Err`.
pub async fn run<T, R>(
    transport: &T,
    origin: &Origin,
    config: &ProbeConfig,
    reporter: &mut R,
) -> Result<RunSummary>
where
    T: Transport,
    R: Reporter,
{
    let mut summary = RunSummary::default();

    let fetched = robots::fetch_robots(transport, origin, &config.robots_path, reporter).await?;
    let document = match fetched {
        Some(document) if !document.is_empty() => document,
        _ => return Ok(summary),
    };
    summary.robots_fetched = true;

    tracing::debug!("Extracting disallowed paths from {}", document.url());
    let paths = robots::extract_disallowed_paths(document.text());
    summary.paths_found = paths.len();
    reporter.info(&format!("Found {} disallowed paths.", paths.len()))?;

    let outcome = prober::probe_paths(transport, origin, &paths, reporter).await?;
    summary.probed = outcome.probed;
    summary.failed = outcome.failed;

    Ok(summary)
}

// Re-export commonly used types
pub use crate::url::{normalize_target, Origin};
pub use config::ProbeConfig;
pub use output::ConsoleReporter;
