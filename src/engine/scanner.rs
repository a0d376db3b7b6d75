//! Multi-pattern scan over a directory tree.

use super::decode::decode_content;
use super::tracker::{ProgressState, ProgressTracker};
use crate::aggregator::ScanResult;
use crate::config::{DecodePolicy, ScanConfig};
use crate::discovery::{DirectoryWalker, WalkConfig, WalkEntry};
use crate::error::Result;
use crate::types::{MatchRecord, Pattern};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

/// Why a file could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFailure {
    pub path: PathBuf,
    pub kind: io::ErrorKind,
    pub message: String,
}

/// Result of reading one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Content(String),
    Failed(ReadFailure),
}

/// Result of scanning one file.
#[derive(Debug, Clone, PartialEq)]
pub enum FileScan {
    /// File was read; records for every pattern found (possibly none).
    Matched(Vec<MatchRecord>),
    Failed(ReadFailure),
    /// Not attempted because the scan was cancelled.
    Skipped,
}

/// Everything a finished scan hands back to the caller.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub result: ScanResult,
    /// Tracker state after it was stopped.
    pub progress: ProgressState,
    pub elapsed: Duration,
    pub cancelled: bool,
    /// Files found by the walk, whether or not they were read.
    pub files_visited: usize,
    /// Entries the walk could not enter or stat. These are not files and
    /// are kept out of the tracker's error count.
    pub walk_errors: usize,
}

/// A walk entry after it has been handled.
enum Visit {
    File(FileScan),
    WalkError,
}

/// Read a whole file and decode it with `policy`.
pub fn read_file(path: &Path, policy: DecodePolicy) -> FileOutcome {
    trace!(path = %path.display(), "Reading file");
    match fs::read(path) {
        Ok(bytes) => FileOutcome::Content(decode_content(&bytes, policy).into_owned()),
        Err(e) => FileOutcome::Failed(ReadFailure {
            path: path.to_path_buf(),
            kind: e.kind(),
            message: e.to_string(),
        }),
    }
}

/// Searches every file under a root for a fixed list of literal patterns.
pub struct ScanEngine {
    /// Distinct patterns in first-seen order.
    patterns: Vec<Pattern>,
    walker: DirectoryWalker,
    decode: DecodePolicy,
    threads: usize,
}

impl ScanEngine {
    /// Create an engine with the default scan configuration.
    pub fn new(patterns: &[Pattern]) -> Self {
        Self::with_config(patterns, &ScanConfig::default())
    }

    /// Create an engine from a scan configuration.
    ///
    /// Duplicate patterns are matched once; the aggregator restores one
    /// group per entry of the original list.
    pub fn with_config(patterns: &[Pattern], config: &ScanConfig) -> Self {
        let mut seen = FxHashSet::default();
        let distinct = patterns
            .iter()
            .filter(|p| !p.as_str().is_empty() && seen.insert(*p))
            .cloned()
            .collect();

        Self {
            patterns: distinct,
            walker: DirectoryWalker::new(WalkConfig::from(config)),
            decode: config.decode,
            threads: config.threads,
        }
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Match every pattern against `content`.
    pub fn match_content(&self, content: &str, path: &Path) -> Vec<MatchRecord> {
        self.patterns
            .iter()
            .filter(|pattern| content.contains(pattern.as_str()))
            .map(|pattern| MatchRecord::new(pattern.clone(), path, pattern.count_in(content)))
            .collect()
    }

    /// Read one file, match it and post the result to `tracker`.
    pub fn scan_file(&self, path: &Path, tracker: &ProgressTracker) -> FileScan {
        if tracker.is_cancelled() {
            return FileScan::Skipped;
        }

        match read_file(path, self.decode) {
            FileOutcome::Content(content) => {
                let records = self.match_content(&content, path);
                if !records.is_empty() {
                    trace!(path = %path.display(), patterns = records.len(), "Patterns found");
                }
                tracker.mark_processed();
                FileScan::Matched(records)
            }
            FileOutcome::Failed(failure) => {
                debug!(path = %path.display(), error = %failure.message, "Failed to read file");
                tracker.mark_error();
                FileScan::Failed(failure)
            }
        }
    }

    /// Walk `root`, scan every file and collect the matches.
    ///
    /// Files are read as the walk yields them, on a rayon pool unless
    /// `threads` is 1. Parallel results carry their walk index and are put
    /// back in walk order before merging, so records keep the walk order
    /// either way. The tracker is stopped before returning, also when the
    /// scan was cancelled.
    pub fn scan(&self, root: &Path, tracker: &ProgressTracker) -> Result<ScanOutcome> {
        let start = Instant::now();
        info!(root = %root.display(), patterns = self.patterns.len(), "Starting scan");

        let visits = self.visit_all(root, tracker);
        tracker.stop();
        let visits = visits?;

        let mut result = ScanResult::new();
        let mut files_visited = 0;
        let mut walk_errors = 0;
        for visit in visits {
            match visit {
                Visit::File(scan) => {
                    files_visited += 1;
                    if let FileScan::Matched(records) = scan {
                        result.add_all(records);
                    }
                }
                Visit::WalkError => walk_errors += 1,
            }
        }

        let progress = tracker.snapshot();
        let cancelled = tracker.is_cancelled();
        let elapsed = start.elapsed();

        info!(
            processed = progress.processed,
            errors = progress.errors,
            walk_errors,
            records = result.total(),
            elapsed_ms = elapsed.as_millis() as u64,
            cancelled,
            "Scan finished"
        );

        Ok(ScanOutcome {
            result,
            progress,
            elapsed,
            cancelled,
            files_visited,
            walk_errors,
        })
    }

    fn visit_all(&self, root: &Path, tracker: &ProgressTracker) -> Result<Vec<Visit>> {
        let entries = self
            .walker
            .walk(root)
            .take_while(|_| !tracker.is_cancelled());

        if self.threads == 1 {
            return Ok(entries.map(|entry| self.visit(entry, tracker)).collect());
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()?;
        let mut indexed: Vec<(usize, Visit)> = pool.install(|| {
            entries
                .enumerate()
                .par_bridge()
                .map(|(index, entry)| (index, self.visit(entry, tracker)))
                .collect()
        });
        indexed.sort_unstable_by_key(|(index, _)| *index);

        Ok(indexed.into_iter().map(|(_, visit)| visit).collect())
    }

    fn visit(&self, entry: WalkEntry, tracker: &ProgressTracker) -> Visit {
        match entry {
            WalkEntry::File(path) => Visit::File(self.scan_file(&path, tracker)),
            WalkEntry::Error { path, message } => {
                debug!(path = ?path, error = %message, "Walk error");
                Visit::WalkError
            }
        }
    }
}
