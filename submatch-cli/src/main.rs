// submatch-cli/src/main.rs
//
// Entry point for the `submatch` binary: parse arguments, set up logging,
// run the match and map failures to exit status 1.

use clap::Parser;
use std::process;
use submatch_cli::terminal::should_use_color;
use submatch_cli::{Cli, FAILURE_EXIT_CODE, logging, report_error, run_match};
use supports_color::Stream;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version go through clap's own exit path
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(FAILURE_EXIT_CODE);
        }
    };

    let stderr_color = should_use_color(cli.no_color, Stream::Stderr);
    logging::init(cli.verbose, stderr_color);

    let stdout_color = should_use_color(cli.no_color, Stream::Stdout);
    if let Err(e) = run_match(&cli, stdout_color) {
        log::debug!("Run failed: {:?}", e);
        report_error(&e, stderr_color);
        process::exit(FAILURE_EXIT_CODE);
    }
}
