pub mod json;
pub mod progress;
pub mod terminal;
pub mod tsv;

use crate::aggregator::RunSummary;

/// Renders the end-of-run summary for the console.
pub trait Reporter {
    fn report(&self, summary: &RunSummary) -> String;
}
