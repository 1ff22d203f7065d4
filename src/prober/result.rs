use std::fmt;
use url::Url;

/// Title reported for a probed path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageTitle {
    /// Text of the first `<title>` element, trimmed
    Found(String),

    /// A 200 response without a `<title>` element
    Missing,

    /// A non-200 response, whose body is not inspected
    NotFetched,
}

impl fmt::Display for PageTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(title) => f.write_str(title),
            Self::Missing => f.write_str("No Title"),
            Self::NotFetched => f.write_str("N/A"),
        }
    }
}

/// Outcome of a probe that received a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    /// URL the request was sent to
    pub url: Url,

    /// HTTP status code
    pub status_code: u16,

    /// Title or sentinel
    pub title: PageTitle,
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} - Title: {}", self.status_code, self.url, self.title)
    }
}
