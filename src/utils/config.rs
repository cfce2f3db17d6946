use serde::Deserialize;
use std::fs;
use std::path::Path;
use crate::utils::error::{DispatchError, DispatchResult};

/// Program spawned when nothing else is configured
pub const DEFAULT_BINARY: &str = "findomain";

/// Environment variable that overrides the configured binary
pub const BINARY_ENV_VAR: &str = "FINDOMAIN_AUTO_BIN";

/// Dispatcher configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatcherConfig {
    /// Name or path of the external enumeration tool
    pub binary: String,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            binary: DEFAULT_BINARY.to_string(),
        }
    }
}

impl DispatcherConfig {
    /// Parse a configuration from a JSON document
    pub fn from_json(contents: &str) -> DispatchResult<Self> {
        let config: Self = serde_json::from_str(contents)
            .map_err(|e| DispatchError::Configuration(format!("Invalid config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON configuration file
    pub fn from_file(path: &Path) -> DispatchResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            DispatchError::Configuration(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_json(&contents)
    }

    /// Resolve the effective configuration: defaults, then the optional
    /// file, then the process environment.
    pub fn load(path: Option<&Path>) -> DispatchResult<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an environment lookup
    pub fn with_env_overrides<F>(mut self, lookup: F) -> DispatchResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(binary) = lookup(BINARY_ENV_VAR) {
            self.binary = binary;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> DispatchResult<()> {
        if self.binary.trim().is_empty() {
            return Err(DispatchError::Configuration(
                "binary must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
