//! Search execution and orchestration.
//!
//! This module provides the end-to-end search run, including:
//! - Configuration merging (CLI + config file)
//! - Input validation and report location
//! - Running the scan alongside the status line
//! - Summary formatting

pub mod config;
mod formatter;
mod output;
mod scanner;

pub use config::{EffectiveConfig, OutputTarget};
pub use formatter::format_summary;
pub use output::{resolve_output_path, timestamped_file_name};
pub use scanner::{SearchRun, run_search, run_search_with_config};
