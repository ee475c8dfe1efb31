// ============================================================================
// submatch-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: result alias and the user-facing diagnostic
//
// Every failure surfaces as a CoreError; the binary prints it once on stderr
// and exits with status 1.

use owo_colors::OwoColorize;
use std::io::Write;
use submatch_core::{CoreError, CoreResult};

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Exit status for any failed run.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Formats the one-line diagnostic shown to the user.
pub fn format_error(err: &CoreError, use_color: bool) -> String {
    if use_color {
        format!("{} {}", "Error:".red().bold(), err)
    } else {
        format!("Error: {err}")
    }
}

/// Writes the diagnostic to stderr.
pub fn report_error(err: &CoreError, use_color: bool) {
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "{}", format_error(err, use_color));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_error_plain() {
        let err = CoreError::EmptySubtitleTrack {
            path: PathBuf::from("/subs/empty.srt"),
        };
        let text = format_error(&err, false);
        assert!(text.starts_with("Error: empty subtitle track"));
        assert!(text.contains("/subs/empty.srt"));
    }

    #[test]
    fn test_format_error_colored() {
        let err = CoreError::Config("tolerance must be at least 1 second".to_string());
        let text = format_error(&err, true);
        assert!(text.contains('\u{1b}'));
        assert!(text.contains("invalid configuration"));
    }
}
