//! Sampler configuration.
//!
//! Handles default values and loading from TOML files.

use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;

/// Default cap on exponential resampling attempts.
pub const DEFAULT_MAX_REJECTION_ATTEMPTS: usize = 10_000;

/// Configuration shared by the bounded samplers.
///
/// # Example
///
/// ```
/// use sampler_core::SamplerConfig;
///
/// let config = SamplerConfig::default();
/// assert_eq!(config.max_rejection_attempts, 10_000);
///
/// let strict = SamplerConfig::new(50).unwrap();
/// assert_eq!(strict.max_rejection_attempts, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Maximum number of draws the bounded exponential sampler makes
    /// before returning `SamplingError::RejectionLimitExceeded`.
    pub max_rejection_attempts: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            max_rejection_attempts: DEFAULT_MAX_REJECTION_ATTEMPTS,
        }
    }
}

impl SamplerConfig {
    /// Create a configuration with the given rejection cap.
    pub fn new(max_rejection_attempts: usize) -> Result<Self, ConfigError> {
        let config = Self {
            max_rejection_attempts,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text. Missing keys take defaults.
    ///
    /// ```
    /// use sampler_core::SamplerConfig;
    ///
    /// let config = SamplerConfig::from_toml_str("max_rejection_attempts = 25").unwrap();
    /// assert_eq!(config.max_rejection_attempts, 25);
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SamplerConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rejection_attempts == 0 {
            return Err(ConfigError::InvalidMaxAttempts(self.max_rejection_attempts));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SamplerConfig::default();
        assert_eq!(config.max_rejection_attempts, 10_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_rejects_zero_attempts() {
        match SamplerConfig::new(0) {
            Err(ConfigError::InvalidMaxAttempts(0)) => {}
            other => panic!("Expected InvalidMaxAttempts, got {:?}", other),
        }
    }

    #[test]
    fn test_toml_parsing() {
        let config = SamplerConfig::from_toml_str("max_rejection_attempts = 123").unwrap();
        assert_eq!(config.max_rejection_attempts, 123);
    }

    #[test]
    fn test_toml_empty_uses_defaults() {
        let config = SamplerConfig::from_toml_str("").unwrap();
        assert_eq!(config, SamplerConfig::default());
    }

    #[test]
    fn test_toml_invalid_values() {
        assert!(matches!(
            SamplerConfig::from_toml_str("max_rejection_attempts = 0"),
            Err(ConfigError::InvalidMaxAttempts(0))
        ));
        assert!(matches!(
            SamplerConfig::from_toml_str("max_rejection_attempts = \"many\""),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_from_file_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "sampler_core_config_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "max_rejection_attempts = 77\n").unwrap();

        let config = SamplerConfig::from_file(&path).unwrap();
        assert_eq!(config.max_rejection_attempts, 77);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_from_file_missing() {
        let path = Path::new("/nonexistent/sampler_core/config.toml");
        match SamplerConfig::from_file(path) {
            Err(ConfigError::FileError(msg)) => {
                assert!(msg.contains("Failed to read config file"));
            }
            other => panic!("Expected FileError, got {:?}", other),
        }
    }
}
