//! Command implementations for the CLI.

/// The matching run: scan, measure, pair and print.
pub mod matching;
