pub mod aggregator;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod reporter;
pub mod run;
pub mod types;

pub use aggregator::{PatternGroup, RunSummary, ScanResult, SummaryBuilder, aggregate};
pub use cli::{Cli, OutputFormat};
pub use config::{Config, ConfigError, DecodePolicy, EffectiveConfig, ScanConfig};
pub use discovery::{DirectoryWalker, WalkConfig, WalkEntry, load_patterns, parse_patterns};
pub use engine::{
    FileOutcome, FileScan, ProgressState, ProgressTracker, ReadFailure, ScanEngine, ScanOutcome,
};
pub use error::{BulkfindError, Result};
pub use reporter::{
    Reporter,
    json::JsonReporter,
    progress::{ReporterHandle, StatusReporter},
    terminal::TerminalReporter,
    tsv::{ReportLayout, ReportWriter},
};
pub use run::{SearchRun, run_search, run_search_with_config};
pub use types::{MatchRecord, Pattern};
