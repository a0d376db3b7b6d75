//! Config file errors.

use std::path::PathBuf;
use thiserror::Error;

/// File extensions accepted for config files.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["yaml", "yml", "json", "toml"];

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file passed with `--config` does not exist.
    #[error("Config file given with --config not found: {}", .0.display())]
    MissingExplicit(PathBuf),

    #[error("Failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {format} in config file {}: {message}", path.display())]
    Invalid {
        path: PathBuf,
        format: &'static str,
        message: String,
    },

    #[error(
        "Config file {} has an unsupported extension (expected one of: {})",
        path.display(),
        SUPPORTED_EXTENSIONS.join(", ")
    )]
    UnsupportedFormat { path: PathBuf },
}
