//! Summary formatting.

use super::config::EffectiveConfig;
use crate::aggregator::RunSummary;
use crate::cli::OutputFormat;
use crate::reporter::{Reporter, json::JsonReporter, terminal::TerminalReporter};

/// Render the run summary in the configured console format.
pub fn format_summary(effective: &EffectiveConfig, summary: &RunSummary) -> String {
    match effective.format {
        OutputFormat::Terminal => TerminalReporter::new(effective.verbose).report(summary),
        OutputFormat::Json => JsonReporter::new().report(summary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use crate::config::Config;
    use clap::Parser;

    fn effective(format: &str) -> EffectiveConfig {
        let cli =
            Cli::try_parse_from(["bulkfind", "-f", "v.txt", "-d", ".", "--format", format])
                .unwrap();
        EffectiveConfig::from_cli_and_config(&cli, &Config::default())
    }

    #[test]
    fn test_json_format_is_parseable() {
        let output = format_summary(&effective("json"), &RunSummary::default());
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["files_processed"], 0);
    }

    #[test]
    fn test_terminal_format() {
        colored::control::set_override(false);
        let output = format_summary(&effective("terminal"), &RunSummary::default());
        assert!(output.contains("Search completed"));
    }
}
