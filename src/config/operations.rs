//! Config loading, validation, and serialization.

use super::model::Config;
use crate::error::{FieldcheckError, Result};
use crate::grammar::{PARAM_SEPARATOR, RULE_SEPARATOR};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(FieldcheckError::UserError)` - Read or parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            FieldcheckError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            FieldcheckError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            FieldcheckError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `allowed_url_protocols` entries must be non-empty, contain no
    ///   whitespace, and must not include the `://` separator
    /// - `default_date_format` must be non-empty and must not contain the
    ///   rule grammar's separators
    pub fn validate(&self) -> Result<()> {
        for protocol in &self.allowed_url_protocols {
            if protocol.is_empty() {
                return Err(FieldcheckError::UserError(
                    "config validation failed: allowed_url_protocols entries must be non-empty"
                        .to_string(),
                ));
            }
            if protocol.contains("://") {
                return Err(FieldcheckError::UserError(format!(
                    "config validation failed: allowed_url_protocols entries must not include '://' (found '{}'). Use '{}' instead.",
                    protocol,
                    protocol.split("://").next().unwrap_or_default()
                )));
            }
            if protocol.chars().any(char::is_whitespace) {
                return Err(FieldcheckError::UserError(format!(
                    "config validation failed: allowed_url_protocols entry '{}' contains whitespace",
                    protocol
                )));
            }
        }

        if self.default_date_format.trim().is_empty() {
            return Err(FieldcheckError::UserError(
                "config validation failed: default_date_format must be non-empty".to_string(),
            ));
        }
        if self
            .default_date_format
            .contains([RULE_SEPARATOR, PARAM_SEPARATOR])
        {
            return Err(FieldcheckError::UserError(format!(
                "config validation failed: default_date_format '{}' must not contain '{}' or '{}'",
                self.default_date_format, RULE_SEPARATOR, PARAM_SEPARATOR
            )));
        }

        Ok(())
    }
}
