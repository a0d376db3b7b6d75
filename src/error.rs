use crate::config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BulkfindError {
    #[error("Pattern file not found: {0}")]
    PatternFileNotFound(String),

    #[error("Failed to read pattern file: {path}")]
    ReadPatterns {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Pattern file contains no patterns: {0}")]
    NoPatterns(String),

    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Path is not a directory: {0}")]
    NotADirectory(String),

    #[error("Failed to write report: {path}")]
    WriteReport {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to resolve output location: {0}")]
    OutputLocation(String),

    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BulkfindError {
    /// Whether the error was raised while validating inputs, before any scan.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::PatternFileNotFound(_)
                | Self::ReadPatterns { .. }
                | Self::NoPatterns(_)
                | Self::DirectoryNotFound(_)
                | Self::NotADirectory(_)
                | Self::Config(_)
        )
    }

    /// Short hint printed below the error message.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::PatternFileNotFound(_) | Self::ReadPatterns { .. } => {
                Some("Pass a readable text file with one value per line using -f/--file.")
            }
            Self::NoPatterns(_) => Some("Add at least one non-blank line to the pattern file."),
            Self::DirectoryNotFound(_) | Self::NotADirectory(_) => {
                Some("Pass an existing directory to search using -d/--directory.")
            }
            Self::WriteReport { .. } | Self::OutputLocation(_) => {
                Some("Check that the output location exists and is writable, or use -o/--output.")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BulkfindError>;
