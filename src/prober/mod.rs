//! Prober module for checking disallowed paths
//!
//! This module contains the probing logic, including:
//! - HTTP fetching through the [`Transport`] seam
//! - Title extraction from HTML responses
//! - The sequential probe loop over every disallowed path
//!
//! Paths are probed one at a time, in robots.txt order, with no delay
//! between requests and no parallel dispatch.

mod fetcher;
mod parser;
mod result;

pub use fetcher::{build_http_client, HttpResponse, ReqwestTransport, Transport};
pub use parser::{extract_title, title_for};
pub use result::{PageTitle, ProbeResult};

use crate::output::Reporter;
use crate::robots::DisallowedPath;
use crate::url::Origin;
use crate::TransportError;
use url::Url;

/// Counters for one pass over the disallowed paths
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeOutcome {
    /// Paths that produced a result line
    pub probed: usize,

    /// Paths skipped after a failure
    pub failed: usize,
}

/// Probes a single resolved URL
///
/// # Returns
///
/// * `Ok(ProbeResult)` - A response arrived, whatever its status
/// * `Err(TransportError)` - No response arrived
pub async fn probe_url<T: Transport>(
    transport: &T,
    url: Url,
) -> Result<ProbeResult, TransportError> {
    let response = transport.get(&url).await?;
    let title = title_for(response.status, &response.body);

    Ok(ProbeResult {
        url,
        status_code: response.status,
        title,
    })
}

/// Probes every path in order and reports each outcome
///
/// A transport failure is reported as an `[ERROR]` line and that path is
/// skipped; the loop always continues with the next path.
///
/// # Arguments
///
/// * `transport` - The transport shared by the whole run
/// * `origin` - Base every path is resolved against
/// * `paths` - Disallowed paths in robots.txt order
/// * `reporter` - Destination of the report lines
///
/// # Returns
///
/// * `Ok(ProbeOutcome)` - All paths were processed
/// * `Err(ProbeError)` - The report could not be written
pub async fn probe_paths<T, R>(
    transport: &T,
    origin: &Origin,
    paths: &[DisallowedPath],
    reporter: &mut R,
) -> crate::Result<ProbeOutcome>
where
    T: Transport,
    R: Reporter,
{
    let mut outcome = ProbeOutcome::default();

    for path in paths {
        let url = match origin.resolve(path.as_str()) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Cannot resolve {}: {}", path, e);
                reporter.error(&format!("Failed to fetch {}: {}", path, e))?;
                outcome.failed += 1;
                continue;
            }
        };

        match probe_url(transport, url.clone()).await {
            Ok(result) => {
                reporter.result(&result)?;
                outcome.probed += 1;
            }
            Err(e) => {
                tracing::warn!("Probe of {} failed: {}", url, e);
                reporter.error(&format!("Failed to fetch {}: {}", url, e))?;
                outcome.failed += 1;
            }
        }
    }

    Ok(outcome)
}
