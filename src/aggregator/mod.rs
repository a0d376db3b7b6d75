//! Aggregation layer.
//!
//! This module folds the engine output into report-ready data:
//! - Collects match records keyed by pattern
//! - Orders groups by the original pattern list
//! - Generates run summaries
//!
//! The aggregator takes the `ScanResult` from the engine and produces
//! pattern groups for the report writer and summary for the console.

pub mod collector;
pub mod summary;

pub use collector::{PatternGroup, ScanResult, aggregate};
pub use summary::{RunSummary, SummaryBuilder};
