//! Config loading, validation, and utility operations.

use super::model::{CONFIG_FILE_NAME, Config};
use crate::error::{LinescopeError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(LinescopeError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            LinescopeError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config to use.
    ///
    /// An explicit path must exist. Otherwise `.linescope.yaml` in `dir` is
    /// used when present, and the defaults when it is not.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            log::debug!("using config file {}", candidate.display());
            Self::load(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as null rather than an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            LinescopeError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            LinescopeError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `max_column` must be positive
    /// - `squash_skip_extensions` entries must be non-empty and have no leading dots
    pub fn validate(&self) -> Result<()> {
        if self.max_column == 0 {
            return Err(LinescopeError::UserError(
                "config validation failed: max_column must be greater than 0".to_string(),
            ));
        }

        for ext in &self.squash_skip_extensions {
            if ext.is_empty() {
                return Err(LinescopeError::UserError(
                    "config validation failed: squash_skip_extensions entries must be non-empty"
                        .to_string(),
                ));
            }
            if ext.starts_with('.') {
                return Err(LinescopeError::UserError(format!(
                    "config validation failed: squash_skip_extensions entries must not have leading dots (found '{}'). Use '{}' instead.",
                    ext,
                    ext.trim_start_matches('.')
                )));
            }
        }

        Ok(())
    }

    /// Whether `path` is listed in `skip_paths`.
    pub fn is_skipped_path(&self, path: &str) -> bool {
        self.skip_paths.iter().any(|p| p == path)
    }

    /// Whether `squash-strings` should leave `path` alone.
    ///
    /// Extensions are compared exactly, so `go` does not match `main.GO`.
    pub fn skips_squash(&self, path: &str) -> bool {
        let Some(ext) = Path::new(path).extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.squash_skip_extensions.iter().any(|skip| skip == ext)
    }
}
