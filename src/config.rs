//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then a TOML file, then the
//! environment, then command-line overrides applied by the caller.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_PAGE_SIZE, PAGE_SIZE_ENV_VAR};
use crate::error::{AscError, Result};

/// Global configuration for the ASC reader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AscConfig {
    /// Records shown per page
    pub page_size: usize,
}

impl Default for AscConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AscConfig {
    /// Create configuration with a custom page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// `<user config dir>/asc-reader/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AscError::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Read a TOML config file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AscError::io(path, e))?;
        toml::from_str(&content).map_err(|source| AscError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults, then `config_file` if given (or the default path if it
    /// exists), then environment variables
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Ok(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        debug!("Loaded configuration: {:?}", config);

        Ok(config)
    }

    /// Apply overrides from a variable lookup (normally the process environment)
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(PAGE_SIZE_ENV_VAR) {
            self.page_size = value.trim().parse().map_err(|_| {
                AscError::configuration(format!(
                    "{} must be a positive integer, got '{}'",
                    PAGE_SIZE_ENV_VAR, value
                ))
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(AscError::configuration("page_size must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_page_size() {
        let config = AscConfig::default();
        assert_eq!(config.page_size, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let config = AscConfig::default().with_page_size(0);
        assert!(matches!(
            config.validate(),
            Err(AscError::Configuration { .. })
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "page_size = 25").unwrap();

        let config = AscConfig::from_file(file.path()).unwrap();
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn test_empty_file_keeps_defaults() {
        let file = NamedTempFile::new().unwrap();
        let config = AscConfig::from_file(file.path()).unwrap();
        assert_eq!(config, AscConfig::default());
    }

    #[test]
    fn test_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "page_size = \"lots\"").unwrap();

        let result = AscConfig::from_file(file.path());
        assert!(matches!(result, Err(AscError::ConfigParse { .. })));
    }

    #[test]
    fn test_explicit_file_wins_over_default_location() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "page_size = 10").unwrap();

        let mut config = AscConfig::from_file(file.path()).unwrap();
        config.apply_env_overrides(|_| None).unwrap();
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_env_override() {
        let mut config = AscConfig::default();
        config
            .apply_env_overrides(|key| (key == PAGE_SIZE_ENV_VAR).then(|| " 50 ".to_string()))
            .unwrap();
        assert_eq!(config.page_size, 50);
    }

    #[test]
    fn test_invalid_env_override() {
        let mut config = AscConfig::default();
        let result = config.apply_env_overrides(|_| Some("fifty".to_string()));
        assert!(result.is_err());
        assert_eq!(config.page_size, 100);
    }
}
