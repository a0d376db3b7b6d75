//! Effective configuration after merging CLI and config file.

use crate::cli::{Cli, OutputFormat};
use crate::config::{Config, ProgressConfig, ScanConfig};
use crate::reporter::tsv::ReportLayout;
use std::path::PathBuf;

/// Where the report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Path given on the command line.
    Explicit(PathBuf),
    /// Fixed file name in the working directory.
    WorkingDir(String),
    /// Timestamped file in a directory next to the executable.
    Timestamped { dir_name: String },
}

/// Effective search configuration after merging CLI and config file.
///
/// CLI flags win over the file; boolean flags can only switch a setting on.
#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    pub scan: ScanConfig,
    pub progress: ProgressConfig,
    pub output: OutputTarget,
    pub layout: ReportLayout,
    pub include_missing: bool,
    pub format: OutputFormat,
    pub ci: bool,
    pub verbose: bool,
}

impl EffectiveConfig {
    pub fn from_cli_and_config(cli: &Cli, config: &Config) -> Self {
        let mut scan = config.scan.clone();
        if let Some(threads) = cli.threads {
            scan.threads = threads;
        }
        if cli.follow_symlinks {
            scan.follow_symlinks = true;
        }
        if cli.max_depth.is_some() {
            scan.max_depth = cli.max_depth;
        }

        let output = match cli.output {
            Some(ref path) => OutputTarget::Explicit(path.clone()),
            None if cli.timestamped || config.output.timestamped => OutputTarget::Timestamped {
                dir_name: config.output.dir_name.clone(),
            },
            None => OutputTarget::WorkingDir(config.output.file_name.clone()),
        };

        let layout = if cli.simple || config.output.simple {
            ReportLayout::Simple
        } else {
            ReportLayout::Full
        };

        Self {
            scan,
            progress: config.progress.clone(),
            output,
            layout,
            include_missing: cli.include_missing,
            format: cli.format,
            ci: cli.ci,
            verbose: cli.verbose,
        }
    }
}
