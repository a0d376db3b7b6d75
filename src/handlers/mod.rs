//! CLI command handlers.
//!
//! This module contains the handler functions for the CLI,
//! separated from main.rs to enable unit testing.

mod scan;
mod usage;

use std::process::ExitCode;

pub use scan::handle_search;
pub use usage::handle_usage_error;

/// Exit code for fatal errors (bad input, unwritable report).
pub const EXIT_ERROR: u8 = 2;

/// Exit code when the search was interrupted with Ctrl-C.
pub const EXIT_INTERRUPTED: u8 = 130;

/// Result type for handler functions that can be tested.
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerResult {
    Success,
    Error(u8),
}

impl From<HandlerResult> for ExitCode {
    fn from(result: HandlerResult) -> Self {
        match result {
            HandlerResult::Success => ExitCode::SUCCESS,
            HandlerResult::Error(code) => ExitCode::from(code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_result_success() {
        let result = HandlerResult::Success;
        let exit_code: ExitCode = result.into();
        assert_eq!(exit_code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_handler_result_error() {
        let result = HandlerResult::Error(EXIT_ERROR);
        let exit_code: ExitCode = result.into();
        assert_eq!(exit_code, ExitCode::from(2));
    }
}
