//! Configuration module for Robots-Probe
//!
//! The tool takes no config file and reads no environment: a run is
//! configured entirely in code, starting from [`ProbeConfig::default`].
//!
//! # Example
//!
//! ```
//! use robots_probe::config::ProbeConfig;
//! use std::time::Duration;
//!
//! let config = ProbeConfig::default();
//! assert_eq!(config.timeout, Duration::from_secs(10));
//! assert!(config.validate().is_ok());
//! ```

mod types;
mod validation;

// Re-export types
pub use types::{ProbeConfig, DEFAULT_ROBOTS_PATH, DEFAULT_TIMEOUT_SECS};

// Re-export validation
pub use validation::validate;
