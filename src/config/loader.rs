//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the tracker
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::Settings;

use super::types::TrackerConfig;

/// Loads and provides access to the tracker configuration.
///
/// # File Format
///
/// ```text
/// server:
///   bind: "127.0.0.1:8080"
/// storage:
///   data_dir: "./data"
/// logging:
///   level: info
/// defaults:
///   hourly_rate: "15.00"
///   rounding_mode: hour
///   workplace:
///     latitude: 37.7749
///     longitude: -122.4194
///     address: Default Workplace
///   fast_confirm_mode: false
///   notifications_enabled: true
/// ```
///
/// Every section is optional; missing sections take their defaults.
///
/// # Example
///
/// ```no_run
/// use shift_tracker::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/tracker.yaml")?;
/// println!("Listening on {}", loader.config().server.bind);
/// # Ok::<(), shift_tracker::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: TrackerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - The default settings break an invariant (`InvalidInput`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content).map_err(|err| match err {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml(content: &str) -> EngineResult<Self> {
        let config: TrackerConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        config.defaults.validate()?;
        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Returns the first-run settings.
    pub fn default_settings(&self) -> &Settings {
        &self.config.defaults
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> TrackerConfig {
        self.config
    }
}
