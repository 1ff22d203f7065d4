//! URL handling module for Robots-Probe
//!
//! This module turns the user-supplied target into an [`Origin`] and resolves
//! robots.txt and disallowed paths against it.

mod normalize;

use crate::{UrlError, UrlResult};
use std::fmt;

// Re-export main functions
pub use normalize::{normalize_input, normalize_target};

/// The base URL every request of a run is resolved against
///
/// Holds the normalized target exactly as parsed. Resolution follows RFC 3986
/// reference resolution: an absolute path replaces the base path, a relative
/// path is merged with it, scheme and host are always inherited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    base: ::url::Url,
}

impl Origin {
    pub(crate) fn new(base: ::url::Url) -> Self {
        Self { base }
    }

    /// Returns the underlying base URL
    pub fn as_url(&self) -> &::url::Url {
        &self.base
    }

    /// Resolves a reference (path or URL) against the origin
    ///
    /// # Examples
    ///
    /// ```
    /// use robots_probe::url::normalize_target;
    ///
    /// let origin = normalize_target("example.com").unwrap();
    /// let resolved = origin.resolve("/admin").unwrap();
    /// assert_eq!(resolved.as_str(), "http://example.com/admin");
    /// ```
    pub fn resolve(&self, reference: &str) -> UrlResult<::url::Url> {
        self.base
            .join(reference)
            .map_err(|e| UrlError::Parse(format!("{}: {}", reference, e)))
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)
    }
}
