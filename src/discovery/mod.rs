//! Discovery layer: scan inputs and file enumeration.
//!
//! This module handles:
//! - Loading the pattern list from a newline-delimited file
//! - Directory traversal and file discovery

pub mod patterns;
pub mod walker;

pub use patterns::{load_patterns, parse_patterns};
pub use walker::{DirectoryWalker, WalkConfig, WalkEntry};
