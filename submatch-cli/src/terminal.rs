// submatch-cli/src/terminal.rs
//
// Terminal capability checks shared by the report, the logger and the
// error diagnostic.

use supports_color::Stream;

/// Whether output written to `stream` should carry ANSI colours.
///
/// `--no-color` and the `NO_COLOR` environment variable both switch colour
/// off; otherwise it is used only when the stream supports it.
pub fn should_use_color(no_color_flag: bool, stream: Stream) -> bool {
    if no_color_flag || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return false;
    }
    supports_color::on(stream).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_disables_color() {
        assert!(!should_use_color(true, Stream::Stdout));
        assert!(!should_use_color(true, Stream::Stderr));
    }
}
