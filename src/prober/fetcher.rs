//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for a run, including:
//! - Building the HTTP client from [`ProbeConfig`]
//! - The [`Transport`] seam the pipeline issues requests through
//! - Error classification into [`TransportError`]
//!
//! Every request is a single GET attempt. There is no retry logic.

use crate::config::ProbeConfig;
use crate::TransportError;
use reqwest::Client;
use std::future::Future;
use url::Url;

/// A response that was received, whatever its status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,

    /// Response body decoded as text
    pub body: String,
}

/// Issues GET requests on behalf of the pipeline
///
/// `Ok` means a response arrived, including 4xx and 5xx responses. `Err`
/// means none did.
pub trait Transport {
    /// Sends one GET request to `url`
    fn get(&self, url: &Url) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The probe configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use robots_probe::config::ProbeConfig;
/// use robots_probe::prober::build_http_client;
///
/// let client = build_http_client(&ProbeConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &ProbeConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// [`Transport`] backed by a shared reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Wraps an existing client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Validates the configuration and builds the client for a run
    pub fn from_config(config: &ProbeConfig) -> crate::Result<Self> {
        config.validate()?;
        let client = build_http_client(config)?;
        Ok(Self::new(client))
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify_request_error(url, &e))?;

        let status = response.status().as_u16();
        tracing::debug!("{} responded with {}", url, status);

        let body = response
            .text()
            .await
            .map_err(|e| classify_body_error(url, &e))?;

        Ok(HttpResponse { status, body })
    }
}

/// Classifies a failure to obtain a response
fn classify_request_error(url: &Url, e: &reqwest::Error) -> TransportError {
    let url = url.to_string();
    if e.is_timeout() {
        TransportError::Timeout { url }
    } else if e.is_connect() {
        TransportError::Connect {
            url,
            message: error_chain(e),
        }
    } else {
        TransportError::Request {
            url,
            message: error_chain(e),
        }
    }
}

/// Classifies a failure while reading the body of a received response
fn classify_body_error(url: &Url, e: &reqwest::Error) -> TransportError {
    let url = url.to_string();
    if e.is_timeout() {
        TransportError::Timeout { url }
    } else {
        TransportError::Body {
            url,
            message: error_chain(e),
        }
    }
}

/// Joins an error with its sources; reqwest keeps the useful part in the chain
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
