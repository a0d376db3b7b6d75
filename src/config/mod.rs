//! Configuration layer for bulkfind.
//!
//! ## Layers
//! - `types`: Configuration type definitions
//! - `loading`: File loading and discovery
//! - `effective`: CLI + config merging (from run/config.rs)

mod error;
mod loading;
mod types;

pub use error::ConfigError;
pub use loading::PROJECT_CONFIG_FILES;
pub use types::{Config, DecodePolicy, OutputConfig, ProgressConfig, ScanConfig};

pub use crate::run::config::EffectiveConfig;
