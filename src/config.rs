//! Configuration for the push handoff bridge.
//!
//! The defaults work everywhere; a configuration is only needed to rename the
//! bridge threads or to give drivers with deep recursion a larger stack.
//!
//! # Examples
//!
//! ```
//! use lazyseq::BridgeConfig;
//!
//! let config = BridgeConfig::from_toml_str(r#"
//!     thread_name = "ingest-bridge"
//!     stack_size = 4194304
//! "#).unwrap();
//!
//! assert_eq!(config.thread_name, "ingest-bridge");
//! assert_eq!(config.stack_size, Some(4 * 1024 * 1024));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use lazyseq::BridgeConfig;
//!
//! let config = BridgeConfig::load("bridge.toml").unwrap_or_default();
//! assert_eq!(config.thread_name, "lazyseq-push");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for threads spawned by [`Seq::from_push_send`](crate::Seq::from_push_send).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct BridgeConfig {
    /// Name given to every handoff thread.
    pub thread_name: String,

    /// Stack size in bytes for handoff threads. The platform default when unset.
    pub stack_size: Option<usize>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            thread_name: "lazyseq-push".to_string(),
            stack_size: None,
        }
    }
}

impl BridgeConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the handoff thread name.
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    /// Sets the handoff thread stack size in bytes.
    pub fn with_stack_size(mut self, bytes: usize) -> Self {
        self.stack_size = Some(bytes);
        self
    }

    /// Checks the values a thread builder would reject.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thread_name.is_empty() {
            return Err(ConfigError::Invalid("thread_name must not be empty".into()));
        }
        if self.thread_name.contains('\0') {
            return Err(ConfigError::Invalid(
                "thread_name must not contain NUL bytes".into(),
            ));
        }
        if self.stack_size == Some(0) {
            return Err(ConfigError::Invalid("stack_size must be non-zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_toml() {
        let config = BridgeConfig::from_toml_str("").unwrap();
        assert_eq!(config, BridgeConfig::default());
    }

    #[test]
    fn test_builder_methods() {
        let config = BridgeConfig::new()
            .with_thread_name("worker")
            .with_stack_size(1 << 20);
        assert_eq!(config.thread_name, "worker");
        assert_eq!(config.stack_size, Some(1 << 20));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_stack() {
        let err = BridgeConfig::from_toml_str("stack_size = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_empty_thread_name() {
        let err = BridgeConfig::from_toml_str(r#"thread_name = """#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = BridgeConfig::from_toml_str("stack_size = \"big\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = BridgeConfig::load("/nonexistent/lazyseq/bridge.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = BridgeConfig::new().with_stack_size(65536);
        let text = toml::to_string(&config).unwrap();
        assert_eq!(BridgeConfig::from_toml_str(&text).unwrap(), config);
    }
}
