//! NewType wrappers for primitive types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal value to search for.
///
/// Matching is exact substring containment, never a regular expression.
/// Empty patterns are rejected when the pattern file is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern(String);

impl Pattern {
    /// Create a new Pattern from any string-like type.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the underlying string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Count non-overlapping occurrences in `content`.
    ///
    /// Scanning resumes after the end of each hit, so "aa" occurs twice in
    /// "aaaa", not three times.
    pub fn count_in(&self, content: &str) -> usize {
        if self.0.is_empty() {
            return 0;
        }
        content.matches(self.0.as_str()).count()
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Pattern {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Pattern {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
