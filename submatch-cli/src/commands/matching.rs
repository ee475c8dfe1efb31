//! Implementation of the matching run.
//!
//! Builds a [`MatchConfig`] from the parsed arguments, runs the core session
//! with an ffprobe-backed prober and prints the report to stdout.

use std::io::{self, Write};

use log::debug;
use submatch_core::{
    CrateFfprobeExecutor, ErrorPolicy, MatchConfig, MatchConfigBuilder, MatchReport,
    MatchSession, TableRenderer, write_json,
};

use crate::cli::{Cli, OutputFormat};
use crate::error::CliResult;
use crate::progress::ProgressHandler;

/// Translates command-line arguments into a validated core configuration.
pub fn build_config(args: &Cli) -> CliResult<MatchConfig> {
    let mut builder = MatchConfigBuilder::new(args.video_path.clone())
        .subtitle_paths(args.subtitles_path.iter().cloned())
        .tolerance_secs(args.tolerance)
        .strategy(args.strategy.into())
        .parallel(args.parallel);

    if let Some(exts) = &args.video_ext {
        builder = builder.video_extensions(exts);
    }
    if let Some(exts) = &args.subtitle_ext {
        builder = builder.subtitle_extensions(exts);
    }
    if args.skip_errors {
        builder = builder.error_policy(ErrorPolicy::SkipAndWarn);
    }

    builder.build()
}

/// Runs the match and prints the report.
pub fn run_match(args: &Cli, use_color: bool) -> CliResult<()> {
    let config = build_config(args)?;
    debug!("Match configuration: {:?}", config);

    let probe = CrateFfprobeExecutor::new();
    let progress = ProgressHandler::new();
    let report = MatchSession::new(&config, &probe)
        .with_event_handler(&progress)
        .run()?;
    drop(progress);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_report(&report, args.format, use_color, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Writes the report in the requested format.
pub fn print_report<W: Write>(
    report: &MatchReport,
    format: OutputFormat,
    use_color: bool,
    out: &mut W,
) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            let max_width = console::Term::stdout()
                .size_checked()
                .map(|(_rows, cols)| cols as usize);
            TableRenderer::new()
                .with_color(use_color)
                .with_max_width(max_width)
                .render(report, out)?;
        }
        OutputFormat::Json => {
            write_json(report, out)?;
        }
    }
    Ok(())
}
