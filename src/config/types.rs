//! Configuration types for the tracker server.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;

use crate::models::Settings;

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address the API binds to.
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

/// Where persisted data lives.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Directory for the JSON store. Without one, data is kept in memory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Log output settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `info` or `shift_tracker=debug`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// The complete server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackerConfig {
    /// HTTP listener.
    #[serde(default)]
    pub server: ServerConfig,
    /// Persistence.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Settings reported until the user saves their own.
    #[serde(default)]
    pub defaults: Settings,
}
