use std::time::Duration;

/// Per-request timeout applied to every fetch and probe
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Well-known location of the robots exclusion file
pub const DEFAULT_ROBOTS_PATH: &str = "/robots.txt";

/// Settings shared by every request of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Upper bound on a single request, connect through body
    pub timeout: Duration,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Path of the robots file, resolved against the origin
    pub robots_path: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("robots-probe/{}", env!("CARGO_PKG_VERSION")),
            robots_path: DEFAULT_ROBOTS_PATH.to_string(),
        }
    }
}

impl ProbeConfig {
    /// Validates the configuration, see [`crate::config::validate`]
    pub fn validate(&self) -> Result<(), crate::ConfigError> {
        super::validate(self)
    }
}
