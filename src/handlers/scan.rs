//! Search mode handler.

use super::{EXIT_ERROR, EXIT_INTERRUPTED, HandlerResult};
use crate::cli::{Cli, OutputFormat};
use crate::engine::ProgressTracker;
use crate::error::BulkfindError;
use crate::run::{format_summary, run_search};
use colored::Colorize;
use std::error::Error;
use tracing::{debug, info, warn};

/// Run a search and print its summary.
pub fn handle_search(cli: &Cli) -> HandlerResult {
    info!(file = %cli.file.display(), directory = %cli.directory.display(), "Starting search");
    if cli.format == OutputFormat::Terminal {
        eprintln!(
            "Searching {} for the values in {}",
            cli.directory.display(),
            cli.file.display()
        );
    }

    let tracker = ProgressTracker::new();
    install_interrupt_handler(&tracker);

    match run_search(cli, &tracker) {
        Ok(run) => {
            println!("{}", format_summary(&run.effective, &run.summary));
            debug!(
                processed = run.summary.files_processed,
                errors = run.summary.files_failed,
                rows = run.summary.match_rows,
                "Search completed"
            );
            if run.summary.cancelled {
                HandlerResult::Error(EXIT_INTERRUPTED)
            } else {
                HandlerResult::Success
            }
        }
        Err(e) => {
            report_error(&e);
            HandlerResult::Error(EXIT_ERROR)
        }
    }
}

/// First Ctrl-C cancels the scan so a partial report is still written;
/// a second one exits immediately.
fn install_interrupt_handler(tracker: &ProgressTracker) {
    let tracker = tracker.clone();
    let installed = ctrlc::set_handler(move || {
        if tracker.is_cancelled() {
            std::process::exit(i32::from(EXIT_INTERRUPTED));
        }
        warn!("Interrupted, writing results found so far");
        tracker.cancel();
    });

    // Only one handler per process; later runs in the same process keep the first.
    if let Err(e) = installed {
        debug!(error = %e, "Interrupt handler not installed");
    }
}

fn report_error(error: &BulkfindError) {
    debug!(error = ?error, configuration = error.is_configuration(), "Search failed");

    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(&format!(": {}", text));
        }
        source = cause.source();
    }

    eprintln!("{} {}", "error:".red().bold(), message);
    if let Some(hint) = error.hint() {
        eprintln!("  {}", hint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_handle_search_success() {
        let dir = TempDir::new().unwrap();
        let values = dir.path().join("values.txt");
        let output = dir.path().join("out.tsv");
        fs::write(&values, "alpha\n").unwrap();
        fs::write(dir.path().join("a.txt"), "alpha").unwrap();

        let cli = Cli::try_parse_from([
            "bulkfind".to_string(),
            "-f".to_string(),
            values.display().to_string(),
            "-d".to_string(),
            dir.path().display().to_string(),
            "-o".to_string(),
            output.display().to_string(),
            "--ci".to_string(),
        ])
        .unwrap();

        assert_eq!(handle_search(&cli), HandlerResult::Success);
        assert!(output.exists());
    }

    #[test]
    fn test_handle_search_missing_pattern_file() {
        let dir = TempDir::new().unwrap();
        let cli = Cli::try_parse_from([
            "bulkfind".to_string(),
            "-f".to_string(),
            dir.path().join("missing.txt").display().to_string(),
            "-d".to_string(),
            dir.path().display().to_string(),
            "--ci".to_string(),
        ])
        .unwrap();

        assert_eq!(handle_search(&cli), HandlerResult::Error(EXIT_ERROR));
    }
}
