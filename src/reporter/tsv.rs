//! Semicolon-delimited report file.
//!
//! Full layout:
//!
//! ```text
//! Valor;Fichero;Ruta;Ocurrencias
//! alpha;a.txt;/data/a.txt;2
//! beta;N/A;N/A;0
//! ```
//!
//! The simple layout keeps only `Valor;Ruta`. Fields are written as-is; a
//! semicolon inside a pattern or path is not escaped.

use crate::aggregator::PatternGroup;
use crate::error::{BulkfindError, Result};
use crate::types::MatchRecord;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

pub const FULL_HEADER: &str = "Valor;Fichero;Ruta;Ocurrencias";
pub const SIMPLE_HEADER: &str = "Valor;Ruta";
pub const NOT_FOUND: &str = "N/A";

/// Column layout of the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportLayout {
    /// Pattern, file name, full path and occurrence count.
    #[default]
    Full,
    /// Pattern and full path only.
    Simple,
}

impl ReportLayout {
    pub fn header(self) -> &'static str {
        match self {
            Self::Full => FULL_HEADER,
            Self::Simple => SIMPLE_HEADER,
        }
    }

    fn match_row(self, record: &MatchRecord) -> String {
        match self {
            Self::Full => format!(
                "{};{};{};{}",
                record.pattern,
                record.file_name,
                record.full_path.display(),
                record.occurrence_count
            ),
            Self::Simple => format!("{};{}", record.pattern, record.full_path.display()),
        }
    }

    fn missing_row(self, pattern: &str) -> String {
        match self {
            Self::Full => format!("{};{};{};0", pattern, NOT_FOUND, NOT_FOUND),
            Self::Simple => format!("{};{}", pattern, NOT_FOUND),
        }
    }
}

/// Writes aggregated pattern groups as a delimited report.
#[derive(Debug, Clone, Default)]
pub struct ReportWriter {
    layout: ReportLayout,
}

impl ReportWriter {
    pub fn new(layout: ReportLayout) -> Self {
        Self { layout }
    }

    /// Write the report to `destination`, creating parent directories.
    ///
    /// Returns the number of data rows written.
    pub fn write(
        &self,
        groups: &[PatternGroup],
        destination: &Path,
        include_missing: bool,
    ) -> Result<usize> {
        let to_error = |source: io::Error| BulkfindError::WriteReport {
            path: destination.display().to_string(),
            source,
        };

        if let Some(parent) = destination.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(to_error)?;
        }

        let file = File::create(destination).map_err(to_error)?;
        let mut writer = BufWriter::new(file);
        let rows = self
            .write_to(groups, &mut writer, include_missing)
            .map_err(to_error)?;
        writer.flush().map_err(to_error)?;

        debug!(path = %destination.display(), rows, "Report written");
        Ok(rows)
    }

    /// Write the header and rows to any writer.
    pub fn write_to<W: Write>(
        &self,
        groups: &[PatternGroup],
        out: &mut W,
        include_missing: bool,
    ) -> io::Result<usize> {
        writeln!(out, "{}", self.layout.header())?;

        let mut rows = 0;
        for (pattern, matches) in groups {
            if matches.is_empty() {
                if include_missing {
                    writeln!(out, "{}", self.layout.missing_row(pattern.as_str()))?;
                    rows += 1;
                }
                continue;
            }
            for record in matches {
                writeln!(out, "{}", self.layout.match_row(record))?;
                rows += 1;
            }
        }

        Ok(rows)
    }
}
