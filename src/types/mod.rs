//! Core value types shared by the scan, aggregation and report layers.

mod newtypes;
mod record;

pub use newtypes::Pattern;
pub use record::MatchRecord;
