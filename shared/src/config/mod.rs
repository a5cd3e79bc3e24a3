//! Configuration management for Fieldkit
//!
//! The desktop app reads its showcase configuration from a YAML file. A
//! missing file is not an error: the built-in showcase is used instead, and
//! saving writes it out so it can be edited.

pub mod app_config;

pub use app_config::*;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{SharedError, SharedResult};

/// Name of the configuration file inside the config directory
pub const CONFIG_FILE_NAME: &str = "showcase.yml";

/// Loads, validates and saves the showcase configuration
#[derive(Debug)]
pub struct ConfigManager {
    config_path: PathBuf,
    config: ShowcaseConfig,
    loaded: bool,
}

impl ConfigManager {
    /// Create a new configuration manager
    ///
    /// # Arguments
    /// * `config_path` - Path to the configuration file
    pub fn new<P: Into<PathBuf>>(config_path: P) -> Self {
        Self {
            config_path: config_path.into(),
            config: ShowcaseConfig::default(),
            loaded: false,
        }
    }

    /// Create a manager for the platform default location
    pub fn with_default_path() -> Self {
        Self::new(default_config_path())
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load configuration from file
    ///
    /// If the configuration file doesn't exist, uses default configuration.
    /// This method is safe to call multiple times.
    pub fn load(&mut self) -> SharedResult<()> {
        if !self.config_path.exists() {
            debug!(
                "Config file {:?} not found, using built-in showcase",
                self.config_path
            );
            self.config = ShowcaseConfig::default();
            self.loaded = true;
            return Ok(());
        }

        let content = fs::read_to_string(&self.config_path)?;
        let config: ShowcaseConfig =
            serde_yaml::from_str(&content).map_err(|e| SharedError::Config {
                message: format!("Failed to parse {:?}: {e}", self.config_path),
            })?;
        config.validate()?;

        info!(
            "Loaded {} field(s) from {:?}",
            config.fields.len(),
            self.config_path
        );
        self.config = config;
        self.loaded = true;
        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self) -> SharedResult<()> {
        if !self.loaded {
            return Err(SharedError::Config {
                message: "configuration has not been loaded".to_string(),
            });
        }
        self.config.validate()?;

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(&self.config)?;
        fs::write(&self.config_path, yaml)?;

        debug!("Saved configuration to {:?}", self.config_path);
        Ok(())
    }

    /// Get immutable reference to configuration
    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    /// Get mutable reference to configuration
    pub fn config_mut(&mut self) -> &mut ShowcaseConfig {
        &mut self.config
    }

    /// Check if configuration has been loaded
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

/// Default configuration path for the current platform
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(".config"))
        .join("fieldkit")
        .join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Variant;
    use assert_matches::assert_matches;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let mut manager = ConfigManager::new(dir.path().join("missing.yml"));

        manager.load().unwrap();

        assert!(manager.is_loaded());
        assert_eq!(manager.config(), &ShowcaseConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let mut manager = ConfigManager::new(&path);
        manager.load().unwrap();
        manager.config_mut().ui.theme = ThemePreference::Dark;
        manager.config_mut().fields[0].config.variant = Variant::Ghost;
        manager.save().unwrap();

        let mut reloaded = ConfigManager::new(&path);
        reloaded.load().unwrap();
        assert_eq!(reloaded.config().ui.theme, ThemePreference::Dark);
        assert_eq!(reloaded.config().fields[0].config.variant, Variant::Ghost);
        assert_eq!(reloaded.config().fields.len(), default_fields().len());
    }

    #[test]
    fn test_save_before_load_fails() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::new(dir.path().join(CONFIG_FILE_NAME));
        assert_matches!(manager.save(), Err(SharedError::Config { .. }));
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "fields: [ {name: a, variant: neon} ]").unwrap();

        let mut manager = ConfigManager::new(&path);
        assert_matches!(manager.load(), Err(SharedError::Config { .. }));
        assert!(!manager.is_loaded());
    }

    #[test]
    fn test_default_path_file_name() {
        assert!(default_config_path().ends_with(Path::new("fieldkit").join(CONFIG_FILE_NAME)));
    }
}
