//! Configuration management for the Fieldkit Linux app
//!
//! This module provides a thin wrapper around the shared configuration
//! management functionality, adding anyhow context for the app boundary.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub use fieldkit_shared::{ConfigManager as SharedConfigManager, ShowcaseConfig};

/// Linux-specific configuration manager
pub struct ConfigManager {
    shared_manager: SharedConfigManager,
}

impl ConfigManager {
    /// Create a configuration manager for an explicit path, or the default location
    pub fn new(path: Option<PathBuf>) -> Self {
        let shared_manager = match path {
            Some(path) => SharedConfigManager::new(path),
            None => SharedConfigManager::with_default_path(),
        };
        debug!("Config file path: {:?}", shared_manager.config_path());

        Self { shared_manager }
    }

    pub fn config_path(&self) -> &Path {
        self.shared_manager.config_path()
    }

    /// Get the current configuration
    pub fn config(&self) -> &ShowcaseConfig {
        self.shared_manager.config()
    }

    /// Load configuration from file
    pub fn load(&mut self) -> Result<()> {
        self.shared_manager
            .load()
            .with_context(|| format!("Failed to load configuration from {:?}", self.config_path()))?;
        info!(
            "Configuration ready with {} field(s)",
            self.config().fields.len()
        );
        Ok(())
    }

    /// Write the loaded configuration out unless a file already exists
    ///
    /// Returns whether a file was written.
    pub fn write_if_missing(&self) -> Result<bool> {
        if self.config_path().exists() {
            debug!("Config file {:?} already exists", self.config_path());
            return Ok(false);
        }
        self.shared_manager
            .save()
            .with_context(|| format!("Failed to write configuration to {:?}", self.config_path()))?;
        info!("Wrote configuration to {:?}", self.config_path());
        Ok(true)
    }

    /// Consume the manager, keeping only the configuration
    pub fn into_config(self) -> ShowcaseConfig {
        self.shared_manager.config().clone()
    }
}
