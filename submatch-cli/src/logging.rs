// ============================================================================
// submatch-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger initialisation for the CLI
//
// The core library logs through the `log` facade; this module installs the
// env_logger backend. Log lines go to stderr so the report on stdout stays
// clean.
//
// USAGE:
// - default: warnings and errors only (skipped files show up here)
// - -v / --verbose: debug output, one line per extracted duration
// - RUST_LOG=...: overrides both

use log::LevelFilter;
use owo_colors::OwoColorize;
use std::io::Write;

/// Picks the level filter for the given verbosity flag.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initialises env_logger with a timestamped, coloured-level format.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool, use_color: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_for(verbose));

    // RUST_LOG wins over the flag
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder
        .format(move |buf, record| {
            let timestamp = buf.timestamp();
            let level_str = match record.level() {
                log::Level::Error => "ERROR",
                log::Level::Warn => "WARN ",
                log::Level::Info => "INFO ",
                log::Level::Debug => "DEBUG",
                log::Level::Trace => "TRACE",
            };

            if !use_color {
                return writeln!(buf, "{} {} {}", timestamp, level_str, record.args());
            }

            let level_colored = match record.level() {
                log::Level::Error => level_str.bright_red().to_string(),
                log::Level::Warn => level_str.yellow().to_string(),
                log::Level::Info => level_str.green().to_string(),
                log::Level::Debug => level_str.blue().to_string(),
                log::Level::Trace => level_str.magenta().to_string(),
            };
            writeln!(
                buf,
                "{} {} {}",
                timestamp.to_string().dimmed(),
                level_colored,
                record.args()
            )
        })
        .target(env_logger::Target::Stderr);

    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(false), LevelFilter::Warn);
        assert_eq!(level_for(true), LevelFilter::Debug);
    }
}
