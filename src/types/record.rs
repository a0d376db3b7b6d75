use super::Pattern;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One file in which a pattern was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub pattern: Pattern,
    /// Final path component, as printed in the report.
    pub file_name: String,
    pub full_path: PathBuf,
    /// Non-overlapping occurrences of `pattern` in the file. Always at least 1.
    pub occurrence_count: usize,
}

impl MatchRecord {
    pub fn new(pattern: Pattern, full_path: &Path, occurrence_count: usize) -> Self {
        let file_name = full_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| full_path.display().to_string());

        Self {
            pattern,
            file_name,
            full_path: full_path.to_path_buf(),
            occurrence_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_file_name_from_path() {
        let record = MatchRecord::new(
            Pattern::from("alpha"),
            Path::new("/data/sub/a.txt"),
            2,
        );
        assert_eq!(record.file_name, "a.txt");
        assert_eq!(record.full_path, PathBuf::from("/data/sub/a.txt"));
        assert_eq!(record.occurrence_count, 2);
    }

    #[test]
    fn test_record_without_file_name_falls_back_to_path() {
        let record = MatchRecord::new(Pattern::from("x"), Path::new("/"), 1);
        assert_eq!(record.file_name, "/");
    }
}
