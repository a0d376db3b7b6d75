//! Argument error handling.

use super::{EXIT_ERROR, HandlerResult};
use crate::cli::Cli;
use clap::CommandFactory;
use clap::error::ErrorKind;

/// Handle a clap parse error.
///
/// Missing required arguments print the one-line reason followed by the full
/// help with examples. Help and version requests exit successfully.
pub fn handle_usage_error(error: clap::Error) -> HandlerResult {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = error.print();
            HandlerResult::Success
        }
        ErrorKind::MissingRequiredArgument | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            if error.kind() == ErrorKind::MissingRequiredArgument {
                eprintln!("{}\n", leading_paragraph(&error.to_string()));
            }
            eprintln!("{}", usage_text());
            HandlerResult::Error(EXIT_ERROR)
        }
        _ => {
            let _ = error.print();
            HandlerResult::Error(EXIT_ERROR)
        }
    }
}

/// Full help text, including parameters, flags and examples.
pub fn usage_text() -> String {
    Cli::command().render_long_help().to_string()
}

/// Lines up to the first blank line, which for clap errors is the reason
/// without the short usage and "--help" hint.
fn leading_paragraph(text: &str) -> String {
    text.lines()
        .take_while(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_usage_text_has_examples() {
        let text = usage_text();
        assert!(text.contains("--file"));
        assert!(text.contains("--directory"));
        assert!(text.contains("--include-missing"));
        assert!(text.contains("Examples:"));
    }

    #[test]
    fn test_missing_argument_is_error() {
        let err = Cli::try_parse_from(["bulkfind", "-d", "."]).unwrap_err();
        assert_eq!(handle_usage_error(err), HandlerResult::Error(EXIT_ERROR));
    }

    #[test]
    fn test_version_is_success() {
        let err = Cli::try_parse_from(["bulkfind", "--version"]).unwrap_err();
        assert_eq!(handle_usage_error(err), HandlerResult::Success);
    }

    #[test]
    fn test_leading_paragraph() {
        assert_eq!(leading_paragraph("a\n  b\n\nUsage: x"), "a\n  b");
        assert_eq!(leading_paragraph(""), "");
    }
}
