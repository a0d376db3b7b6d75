//! Scan engine layer.
//!
//! This module provides the core search functionality:
//! - `ScanEngine` walking a tree and matching every pattern per file
//! - `ProgressTracker` shared between scan workers and the status line
//! - Permissive text decoding of file contents
//!
//! The engine produces a pattern-keyed `ScanResult` for the aggregator.

pub mod decode;
pub mod scanner;
pub mod tracker;

pub use decode::decode_content;
pub use scanner::{FileOutcome, FileScan, ReadFailure, ScanEngine, ScanOutcome, read_file};
pub use tracker::{ProgressState, ProgressTracker};
