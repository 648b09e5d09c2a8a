//! Config loading, validation, and serialization.

use super::model::ToolConfig;
use crate::error::{HadutError, Result};
use std::path::Path;

impl ToolConfig {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(ToolConfig)` - Successfully loaded and validated config
    /// * `Err(HadutError::ConfigError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            HadutError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Missing fields take their defaults; unknown fields are ignored.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ToolConfig = serde_yaml::from_str(yaml)
            .map_err(|e| HadutError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            HadutError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `tool_name` must be a bare, non-empty file name
    /// - `home_var` and `classpath_var` must be non-empty and free of `=`
    /// - `pipes_executable_key` must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.tool_name.is_empty() {
            return Err(HadutError::ConfigError(
                "config validation failed: tool_name must not be empty".to_string(),
            ));
        }
        if self.tool_name.contains(['/', '\\']) {
            return Err(HadutError::ConfigError(format!(
                "config validation failed: tool_name must be a file name, not a path (found '{}')",
                self.tool_name
            )));
        }

        for (field, value) in [
            ("home_var", &self.home_var),
            ("classpath_var", &self.classpath_var),
        ] {
            if value.is_empty() || value.contains('=') || value.contains('\0') {
                return Err(HadutError::ConfigError(format!(
                    "config validation failed: {} must be a non-empty variable name (found '{}')",
                    field, value
                )));
            }
        }

        if self.pipes_executable_key.is_empty() {
            return Err(HadutError::ConfigError(
                "config validation failed: pipes_executable_key must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
