//! Core search run.

use crate::aggregator::{PatternGroup, RunSummary, SummaryBuilder, aggregate};
use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::discovery::load_patterns;
use crate::engine::{ProgressTracker, ScanEngine};
use crate::error::{BulkfindError, Result};
use crate::reporter::progress::{StatusReporter, should_show_progress};
use crate::reporter::tsv::ReportWriter;
use chrono::Local;
use std::env;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::config::EffectiveConfig;
use super::output::resolve_output_path;

/// Everything produced by one search run.
#[derive(Debug)]
pub struct SearchRun {
    pub effective: EffectiveConfig,
    pub summary: RunSummary,
    pub groups: Vec<PatternGroup>,
    pub output: PathBuf,
}

/// Run a search using CLI settings and the discovered config file.
///
/// `tracker` receives the scan counters; cancelling it stops the scan early
/// and still writes a report for the files read so far.
pub fn run_search(cli: &Cli, tracker: &ProgressTracker) -> Result<SearchRun> {
    let working_dir = env::current_dir().ok();
    let config = Config::load(cli.config.as_deref(), working_dir.as_deref())?;
    run_search_with_config(cli, config, tracker)
}

/// Run a search with a pre-loaded config.
///
/// Inputs are validated in order: pattern file, then search directory. The
/// directory is not touched when the pattern file is unusable.
pub fn run_search_with_config(
    cli: &Cli,
    config: Config,
    tracker: &ProgressTracker,
) -> Result<SearchRun> {
    let effective = EffectiveConfig::from_cli_and_config(cli, &config);

    let patterns = load_patterns(&cli.file)?;
    validate_directory(&cli.directory)?;
    let output = resolve_output_path(&effective.output, &Local::now(), None)?;
    debug!(output = %output.display(), layout = ?effective.layout, "Resolved report location");

    let visible = effective.format == OutputFormat::Terminal
        && should_show_progress(io::stderr().is_terminal(), effective.ci);
    let status = StatusReporter::from_config(visible, &effective.progress).spawn(tracker.clone());

    let engine = ScanEngine::with_config(&patterns, &effective.scan);
    debug!(
        patterns = patterns.len(),
        distinct = engine.patterns().len(),
        "Search engine ready"
    );
    let outcome = engine.scan(&cli.directory, tracker);
    status.finish();
    let outcome = outcome?;

    let groups = aggregate(&outcome.result, &patterns, effective.include_missing);
    let rows = ReportWriter::new(effective.layout).write(
        &groups,
        &output,
        effective.include_missing,
    )?;
    info!(path = %output.display(), rows, "Report saved");

    let summary = SummaryBuilder::new()
        .with_result(&patterns, &outcome.result)
        .with_progress(outcome.progress)
        .with_walk_errors(outcome.walk_errors)
        .with_elapsed(outcome.elapsed)
        .with_cancelled(outcome.cancelled)
        .with_output(&output)
        .build();

    Ok(SearchRun {
        effective,
        summary,
        groups,
        output,
    })
}

fn validate_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        debug!(path = %path.display(), "Directory not found");
        return Err(BulkfindError::DirectoryNotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return Err(BulkfindError::NotADirectory(path.display().to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn search(cli: &Cli) -> Result<SearchRun> {
        run_search_with_config(cli, Config::default(), &ProgressTracker::new())
    }

    struct Fixture {
        dir: TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let corpus = dir.path().join("corpus");
            fs::create_dir_all(&corpus).unwrap();
            fs::write(corpus.join("a.txt"), "alphaalpha").unwrap();
            fs::write(corpus.join("b.txt"), "nothing here").unwrap();
            fs::write(dir.path().join("values.txt"), "alpha\nbeta\n").unwrap();
            Self { dir }
        }

        fn path(&self, name: &str) -> String {
            self.dir.path().join(name).display().to_string()
        }

        fn cli(&self, extra: &[&str]) -> Cli {
            let file = self.path("values.txt");
            let corpus = self.path("corpus");
            let output = self.path("out.tsv");
            let mut args = vec![
                "bulkfind",
                "-f",
                file.as_str(),
                "-d",
                corpus.as_str(),
                "-o",
                output.as_str(),
                "--ci",
                "-j",
                "1",
            ];
            args.extend_from_slice(extra);
            Cli::try_parse_from(args).unwrap()
        }
    }

    #[test]
    fn test_run_writes_report() {
        let fixture = Fixture::new();
        let run = search(&fixture.cli(&[])).unwrap();

        assert_eq!(run.summary.files_processed, 2);
        assert_eq!(run.summary.files_failed, 0);
        assert_eq!(run.summary.patterns_found, 1);

        let report = fs::read_to_string(&run.output).unwrap();
        let expected_path = fixture.dir.path().join("corpus").join("a.txt");
        assert_eq!(
            report,
            format!(
                "Valor;Fichero;Ruta;Ocurrencias\nalpha;a.txt;{};2\n",
                expected_path.display()
            )
        );
    }

    #[test]
    fn test_run_with_include_missing() {
        let fixture = Fixture::new();
        let run = search(&fixture.cli(&["-i"])).unwrap();

        let report = fs::read_to_string(&run.output).unwrap();
        assert_eq!(report.lines().count(), 3);
        assert!(report.ends_with("beta;N/A;N/A;0\n"));
        assert_eq!(run.groups.len(), 2);
    }

    #[test]
    fn test_run_simple_layout() {
        let fixture = Fixture::new();
        let run = search(&fixture.cli(&["--simple", "-i"])).unwrap();

        let report = fs::read_to_string(&run.output).unwrap();
        assert!(report.starts_with("Valor;Ruta\n"));
        assert!(report.ends_with("beta;N/A\n"));
    }

    #[test]
    fn test_cancelled_run_still_writes_report() {
        let fixture = Fixture::new();
        let tracker = ProgressTracker::new();
        tracker.cancel();

        let run = run_search_with_config(&fixture.cli(&["-i"]), Config::default(), &tracker)
            .unwrap();

        assert!(run.summary.cancelled);
        assert_eq!(run.summary.files_processed, 0);
        let report = fs::read_to_string(&run.output).unwrap();
        assert_eq!(report.lines().count(), 3);
        assert!(report.contains("alpha;N/A;N/A;0"));
    }

    #[test]
    fn test_missing_pattern_file_fails_before_directory_check() {
        let fixture = Fixture::new();
        let cli = Cli::try_parse_from([
            "bulkfind",
            "-f",
            fixture.path("missing.txt").as_str(),
            "-d",
            fixture.path("also-missing").as_str(),
        ])
        .unwrap();

        let err = search(&cli).unwrap_err();
        assert!(matches!(err, BulkfindError::PatternFileNotFound(_)));
    }

    #[test]
    fn test_missing_directory() {
        let fixture = Fixture::new();
        let cli = Cli::try_parse_from([
            "bulkfind",
            "-f",
            fixture.path("values.txt").as_str(),
            "-d",
            fixture.path("nope").as_str(),
        ])
        .unwrap();

        let err = search(&cli).unwrap_err();
        assert!(matches!(err, BulkfindError::DirectoryNotFound(_)));
    }

    #[test]
    fn test_directory_argument_is_a_file() {
        let fixture = Fixture::new();
        let cli = Cli::try_parse_from([
            "bulkfind",
            "-f",
            fixture.path("values.txt").as_str(),
            "-d",
            fixture.path("values.txt").as_str(),
        ])
        .unwrap();

        let err = search(&cli).unwrap_err();
        assert!(matches!(err, BulkfindError::NotADirectory(_)));
    }

    #[test]
    fn test_unwritable_report_is_fatal() {
        let fixture = Fixture::new();
        // The corpus directory itself cannot be opened as a file
        let corpus = fixture.path("corpus");
        let cli = fixture.cli(&[]);
        let cli = Cli {
            output: Some(PathBuf::from(corpus)),
            ..cli
        };

        let err = search(&cli).unwrap_err();
        assert!(matches!(err, BulkfindError::WriteReport { .. }));
    }
}
