//! Pattern file loading.

use crate::error::{BulkfindError, Result};
use crate::types::Pattern;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load patterns from a newline-delimited file.
///
/// The path is checked before anything else so a missing file is reported
/// as a configuration error without touching the search directory.
pub fn load_patterns(path: &Path) -> Result<Vec<Pattern>> {
    if !path.is_file() {
        return Err(BulkfindError::PatternFileNotFound(
            path.display().to_string(),
        ));
    }

    let content = fs::read_to_string(path).map_err(|e| BulkfindError::ReadPatterns {
        path: path.display().to_string(),
        source: e,
    })?;

    let patterns = parse_patterns(&content);
    if patterns.is_empty() {
        return Err(BulkfindError::NoPatterns(path.display().to_string()));
    }

    debug!(path = %path.display(), count = patterns.len(), "Loaded patterns");
    Ok(patterns)
}

/// Split content into patterns: one per line, surrounding whitespace trimmed,
/// blank lines dropped. Order and duplicates are kept.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn parse_patterns(content: &str) -> Vec<Pattern> {
    content
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Pattern::from)
        .collect()
}
