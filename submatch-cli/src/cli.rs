// submatch-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use submatch_core::MatchStrategy;
use submatch_core::config::DEFAULT_TOLERANCE_SECS;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Submatch: match video files to subtitle files by duration",
    long_about = "Scans a video directory and one or more subtitle directories, \
                  measures every file's duration and pairs videos with subtitles \
                  whose durations agree within a tolerance."
)]
pub struct Cli {
    /// Directory (or single file) containing the video files
    #[arg(required = true, value_name = "VIDEO_PATH")]
    pub video_path: PathBuf,

    /// Directories (or files) containing subtitles. Defaults to VIDEO_PATH.
    #[arg(value_name = "SUBTITLES_PATH", value_parser = existing_path)]
    pub subtitles_path: Vec<PathBuf>,

    /// Maximum duration deviation in whole seconds (must be at least 1)
    #[arg(short, long, value_name = "SECS", default_value_t = DEFAULT_TOLERANCE_SECS)]
    pub tolerance: u64,

    /// How to pick a subtitle when several are within tolerance
    #[arg(long, value_enum, default_value_t = StrategyArg::Nearest)]
    pub strategy: StrategyArg,

    /// Comma-separated video extensions (e.g., mp4,mkv)
    #[arg(long = "video-ext", value_delimiter = ',', value_name = "LIST")]
    pub video_ext: Option<Vec<String>>,

    /// Comma-separated subtitle extensions (e.g., srt)
    #[arg(long = "subtitle-ext", value_delimiter = ',', value_name = "LIST")]
    pub subtitle_ext: Option<Vec<String>>,

    /// Skip files whose duration cannot be read instead of aborting
    #[arg(long)]
    pub skip_errors: bool,

    /// Read durations in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Closest duration wins
    Nearest,
    /// Last qualifying subtitle in listing order wins
    Last,
}

impl From<StrategyArg> for MatchStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Nearest => MatchStrategy::Nearest,
            StrategyArg::Last => MatchStrategy::LastWithinTolerance,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Rejects subtitle locations that do not exist at parse time.
fn existing_path(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.exists() {
        Ok(path)
    } else {
        Err(format!("path '{value}' does not exist"))
    }
}
