use crate::config::types::ProbeConfig;
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &ProbeConfig) -> Result<(), ConfigError> {
    if config.timeout.is_zero() {
        return Err(ConfigError::Validation(
            "timeout must be greater than zero".to_string(),
        ));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if !config.robots_path.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "robots_path must be an absolute path, got '{}'",
            config.robots_path
        )));
    }

    Ok(())
}
