// submatch-cli/src/lib.rs
//
// Library portion of the Submatch CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod progress;
pub mod terminal;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, OutputFormat, StrategyArg};
pub use commands::matching::run_match;
pub use error::{CliResult, FAILURE_EXIT_CODE, report_error};
