use crate::aggregator::RunSummary;
use crate::reporter::Reporter;
use colored::Colorize;

pub struct TerminalReporter {
    verbose: bool,
}

impl TerminalReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn format_elapsed(elapsed_ms: u64) -> String {
        if elapsed_ms < 1000 {
            format!("{}ms", elapsed_ms)
        } else {
            format!("{:.2}s", elapsed_ms as f64 / 1000.0)
        }
    }

    fn format_errors(count: usize) -> colored::ColoredString {
        if count == 0 {
            count.to_string().green()
        } else {
            count.to_string().yellow().bold()
        }
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, summary: &RunSummary) -> String {
        let mut output = String::new();

        let headline = if summary.cancelled {
            format!(
                "Search cancelled after {}",
                Self::format_elapsed(summary.elapsed_ms)
            )
            .yellow()
            .bold()
        } else {
            format!(
                "Search completed in {}",
                Self::format_elapsed(summary.elapsed_ms)
            )
            .green()
            .bold()
        };
        output.push_str(&format!("{}\n", headline));
        output.push_str(&format!("{}\n", "━".repeat(50)));

        output.push_str(&format!(
            "  Files processed:   {}\n",
            summary.files_processed.to_string().bold()
        ));
        output.push_str(&format!(
            "  Files with errors: {}\n",
            Self::format_errors(summary.files_failed)
        ));
        if summary.walk_errors > 0 {
            output.push_str(&format!(
                "  Skipped entries:   {}\n",
                summary.walk_errors.to_string().yellow()
            ));
        }
        output.push_str(&format!(
            "  Patterns found:    {}/{}\n",
            summary.patterns_found.to_string().bold(),
            summary.patterns_total
        ));

        if self.verbose {
            output.push_str(&format!(
                "  Patterns missing:  {}\n",
                summary.patterns_missing
            ));
            output.push_str(&format!(
                "  Match rows:        {} ({} occurrences)\n",
                summary.match_rows, summary.total_occurrences
            ));
        }

        if let Some(ref path) = summary.output {
            output.push_str(&format!(
                "\nResults saved to {}\n",
                path.display().to_string().cyan()
            ));
        }

        output
    }
}
