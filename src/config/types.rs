//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Main configuration structure for bulkfind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Traversal and matching settings.
    pub scan: ScanConfig,
    /// Report file settings.
    pub output: OutputConfig,
    /// Status line settings.
    pub progress: ProgressConfig,
}

/// How bytes that are not valid UTF-8 are handled when a file is decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Drop invalid sequences and join the valid runs around them.
    #[default]
    Skip,
    /// Replace each invalid sequence with U+FFFD.
    Replace,
}

/// Scan configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Worker threads. 0 lets rayon pick, 1 scans sequentially.
    pub threads: usize,
    /// Follow symbolic links while walking.
    pub follow_symlinks: bool,
    /// Maximum depth below the root. None means unlimited.
    pub max_depth: Option<usize>,
    /// Visit directory entries sorted by file name.
    pub sort_by_name: bool,
    pub decode: DecodePolicy,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            threads: 0,
            follow_symlinks: false,
            max_depth: None,
            sort_by_name: true,
            decode: DecodePolicy::Skip,
        }
    }
}

/// Report output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Write a timestamped report under `dir_name` next to the executable.
    pub timestamped: bool,
    /// Use the two-column `Valor;Ruta` layout.
    pub simple: bool,
    /// Directory used for timestamped reports.
    pub dir_name: String,
    /// Report file name used when not timestamped.
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            timestamped: false,
            simple: false,
            dir_name: "resultados".to_string(),
            file_name: "resultados.tsv".to_string(),
        }
    }
}

/// Status line configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Poll interval of the status line in milliseconds.
    pub interval_ms: u64,
    /// Seconds between "still running" log lines when the status line is hidden.
    /// 0 disables the heartbeat.
    pub heartbeat_secs: u64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            interval_ms: 100,
            heartbeat_secs: 15,
        }
    }
}
