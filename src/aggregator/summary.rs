//! Summary builder for search runs.

use super::collector::ScanResult;
use crate::engine::ProgressState;
use crate::types::Pattern;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Figures shown to the operator once a run completes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub patterns_total: usize,
    pub patterns_found: usize,
    pub patterns_missing: usize,
    /// Report rows excluding "not found" rows.
    pub match_rows: usize,
    pub total_occurrences: usize,
    pub files_processed: usize,
    pub files_failed: usize,
    /// Directories or links the walk could not enter.
    pub walk_errors: usize,
    pub elapsed_ms: u64,
    pub cancelled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

/// Builder for creating run summaries.
#[derive(Debug, Default)]
pub struct SummaryBuilder<'a> {
    patterns: &'a [Pattern],
    result: Option<&'a ScanResult>,
    progress: ProgressState,
    walk_errors: usize,
    elapsed: Duration,
    cancelled: bool,
    output: Option<PathBuf>,
}

impl<'a> SummaryBuilder<'a> {
    /// Create a new summary builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pattern list and the scan result it was matched against.
    pub fn with_result(mut self, patterns: &'a [Pattern], result: &'a ScanResult) -> Self {
        self.patterns = patterns;
        self.result = Some(result);
        self
    }

    /// Set the final tracker state.
    pub fn with_progress(mut self, progress: ProgressState) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_walk_errors(mut self, walk_errors: usize) -> Self {
        self.walk_errors = walk_errors;
        self
    }

    /// Set the scan duration.
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    pub fn with_cancelled(mut self, cancelled: bool) -> Self {
        self.cancelled = cancelled;
        self
    }

    /// Set the report location.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Build the summary. Each entry of the pattern list counts on its own,
    /// matching the rows the report will contain.
    pub fn build(self) -> RunSummary {
        let empty = ScanResult::new();
        let result = self.result.unwrap_or(&empty);

        let mut patterns_found = 0;
        let mut match_rows = 0;
        let mut total_occurrences = 0;

        for pattern in self.patterns {
            let matches = result.matches(pattern);
            if !matches.is_empty() {
                patterns_found += 1;
            }
            match_rows += matches.len();
            total_occurrences += matches.iter().map(|m| m.occurrence_count).sum::<usize>();
        }

        RunSummary {
            patterns_total: self.patterns.len(),
            patterns_found,
            patterns_missing: self.patterns.len() - patterns_found,
            match_rows,
            total_occurrences,
            files_processed: self.progress.processed,
            files_failed: self.progress.errors,
            walk_errors: self.walk_errors,
            elapsed_ms: u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX),
            cancelled: self.cancelled,
            output: self.output,
        }
    }
}
