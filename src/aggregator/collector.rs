//! Match collector keyed by pattern.

use crate::types::{MatchRecord, Pattern};
use rustc_hash::FxHashMap;

/// Match records grouped by pattern, in the order files were visited.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScanResult {
    by_pattern: FxHashMap<Pattern, Vec<MatchRecord>>,
    total: usize,
}

/// A pattern with its matches, as emitted to the report.
pub type PatternGroup = (Pattern, Vec<MatchRecord>);

impl ScanResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its pattern's sequence.
    pub fn add(&mut self, record: MatchRecord) {
        self.by_pattern
            .entry(record.pattern.clone())
            .or_default()
            .push(record);
        self.total += 1;
    }

    /// Append multiple records, keeping their order.
    pub fn add_all(&mut self, records: impl IntoIterator<Item = MatchRecord>) {
        for record in records {
            self.add(record);
        }
    }

    /// Get the records for a pattern. Empty when it was never found.
    pub fn matches(&self, pattern: &Pattern) -> &[MatchRecord] {
        self.by_pattern
            .get(pattern)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of records across all patterns.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Emit one group per entry of `patterns`, in that order.
///
/// Patterns with no records are kept as empty groups only when
/// `include_missing` is set. Duplicate patterns each get their own group.
pub fn aggregate(
    scan_result: &ScanResult,
    patterns: &[Pattern],
    include_missing: bool,
) -> Vec<PatternGroup> {
    patterns
        .iter()
        .filter_map(|pattern| {
            let matches = scan_result.matches(pattern);
            if matches.is_empty() && !include_missing {
                return None;
            }
            Some((pattern.clone(), matches.to_vec()))
        })
        .collect()
}
