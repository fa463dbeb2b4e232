//! Configuration loading for the shift tracker server.
//!
//! This module loads the server configuration from a YAML file: listener
//! address, data directory, log level and the first-run settings.
//!
//! # Example
//!
//! ```no_run
//! use shift_tracker::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/tracker.yaml").unwrap();
//! println!("Workplace: {}", config.default_settings().workplace.address);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LoggingConfig, ServerConfig, StorageConfig, TrackerConfig};
