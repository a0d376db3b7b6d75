//! Configuration loading functions.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::error::ConfigError;
use super::types::Config;

/// Config file names probed in the working directory, in order.
pub const PROJECT_CONFIG_FILES: &[&str] = &[
    ".bulkfind.yaml",
    ".bulkfind.yml",
    ".bulkfind.json",
    ".bulkfind.toml",
];

/// Serialization format of a config file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    fn detect(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
            Self::Toml => "TOML",
        }
    }

    fn parse(self, content: &str) -> Result<Config, String> {
        match self {
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

impl Config {
    /// Parse a config file, picking the format from its extension.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::detect(path).ok_or_else(|| ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        format.parse(&content).map_err(|message| ConfigError::Invalid {
            path: path.to_path_buf(),
            format: format.name(),
            message,
        })
    }

    /// Load configuration, either from an explicit path or by discovery.
    ///
    /// An explicit path must exist and parse; it is never silently replaced
    /// by a discovered file. Discovery order:
    /// 1. `.bulkfind.{yaml,yml,json,toml}` in `working_dir`
    /// 2. `<config dir>/bulkfind/config.yaml`
    /// 3. Default configuration
    ///
    /// Discovered files that fail to parse are skipped with a warning.
    pub fn load(explicit: Option<&Path>, working_dir: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ConfigError::MissingExplicit(path.to_path_buf()));
            }
            debug!(path = %path.display(), "Loading explicit config");
            return Self::from_file(path);
        }

        for candidate in Self::candidates(working_dir) {
            if !candidate.exists() {
                continue;
            }
            match Self::from_file(&candidate) {
                Ok(config) => {
                    debug!(path = %candidate.display(), "Loaded config");
                    return Ok(config);
                }
                Err(e) => {
                    warn!(path = %candidate.display(), error = %e, "Ignoring invalid config file");
                }
            }
        }

        Ok(Self::default())
    }

    fn candidates(working_dir: Option<&Path>) -> Vec<PathBuf> {
        let mut candidates: Vec<PathBuf> = working_dir
            .map(|root| PROJECT_CONFIG_FILES.iter().map(|f| root.join(f)).collect())
            .unwrap_or_default();

        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("bulkfind").join("config.yaml"));
        }

        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format_by_extension() {
        assert_eq!(ConfigFormat::detect(Path::new("a.yml")), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::detect(Path::new("A.JSON")), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::detect(Path::new(".bulkfind.toml")), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::detect(Path::new("config")), None);
        assert_eq!(ConfigFormat::detect(Path::new("config.ini")), None);
    }
}
