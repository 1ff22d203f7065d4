//! Disallow directive extraction
//!
//! Every line is trimmed and matched against the case-sensitive prefix
//! `Disallow:`. Matching directives from all user-agent groups are kept, in
//! file order, duplicates included.

use std::fmt;

/// Literal directive prefix, matched case-sensitively
const DISALLOW_PREFIX: &str = "Disallow:";

/// A path taken verbatim from a `Disallow:` line
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisallowedPath(String);

impl DisallowedPath {
    /// Returns the path as written in robots.txt
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DisallowedPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisallowedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for DisallowedPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Extracts the disallowed paths from robots.txt content
///
/// # Examples
///
/// ```
/// use robots_probe::robots::extract_disallowed_paths;
///
/// let paths = extract_disallowed_paths("Disallow: /admin\nDisallow: \nDisallow:/login");
/// assert_eq!(paths, vec!["/admin", "/login"]);
/// ```
pub fn extract_disallowed_paths(content: &str) -> Vec<DisallowedPath> {
    content
        .lines()
        .filter_map(|line| line.trim().strip_prefix(DISALLOW_PREFIX))
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(|path| DisallowedPath(path.to_string()))
        .collect()
}
