//! Robots.txt handling module
//!
//! This module fetches a site's robots.txt and extracts the paths it
//! disallows. Parsing is deliberately literal: no user-agent grouping, no
//! `Allow:` overrides and no wildcard or `$` anchor semantics.

mod parser;

pub use parser::{extract_disallowed_paths, DisallowedPath};

use crate::output::Reporter;
use crate::prober::Transport;
use crate::url::Origin;
use url::Url;

/// Raw content of a fetched robots.txt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsDocument {
    url: Url,
    text: String,
}

impl RobotsDocument {
    /// Creates a document from the URL it was fetched from and its body
    pub fn new(url: Url, text: impl Into<String>) -> Self {
        Self {
            url,
            text: text.into(),
        }
    }

    /// The resolved robots.txt URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The full response body
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if the body is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Fetches robots.txt for an origin
///
/// Exactly one GET is issued against `robots_path` resolved on `origin`.
/// Every outcome is reported:
///
/// | Outcome | Report | Returns |
/// |---------|--------|---------|
/// | HTTP 200 | `[INFO]` naming the URL | `Some(document)` |
/// | Other status | `[ERROR]` naming the status | `None` |
/// | Transport failure | `[ERROR]` naming the failure | `None` |
///
/// # Returns
///
/// * `Ok(Some(RobotsDocument))` - robots.txt was retrieved
/// * `Ok(None)` - robots.txt is unavailable, the run should stop
/// * `Err(ProbeError)` - the report could not be written
pub async fn fetch_robots<T, R>(
    transport: &T,
    origin: &Origin,
    robots_path: &str,
    reporter: &mut R,
) -> crate::Result<Option<RobotsDocument>>
where
    T: Transport,
    R: Reporter,
{
    let robots_url = match origin.resolve(robots_path) {
        Ok(url) => url,
        Err(e) => {
            reporter.error(&format!("Error fetching robots.txt: {}", e))?;
            return Ok(None);
        }
    };

    tracing::debug!("Fetching robots.txt from {}", robots_url);

    match transport.get(&robots_url).await {
        Ok(response) if response.status == 200 => {
            reporter.info(&format!(
                "Successfully fetched robots.txt from {}",
                robots_url
            ))?;
            Ok(Some(RobotsDocument::new(robots_url, response.body)))
        }
        Ok(response) => {
            reporter.error(&format!(
                "Failed to fetch robots.txt. HTTP Status: {}",
                response.status
            ))?;
            Ok(None)
        }
        Err(e) => {
            tracing::warn!("robots.txt fetch failed: {}", e);
            reporter.error(&format!("Error fetching robots.txt: {}", e))?;
            Ok(None)
        }
    }
}
