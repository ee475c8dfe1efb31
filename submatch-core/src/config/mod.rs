//! Configuration structures and constants for the submatch-core library.
//!
//! This module provides the configuration for a matching run: where to look
//! for media, which extensions count as video or subtitle files, the duration
//! tolerance, and how ties and per-file failures are handled.

mod builder;

use std::path::PathBuf;

pub use builder::MatchConfigBuilder;

use crate::error::{CoreError, CoreResult};
use crate::matcher::MatchStrategy;

// Default constants

/// Extensions (without the leading dot) recognised as video files.
pub const DEFAULT_VIDEO_EXTENSIONS: &[&str] = &["mp4"];

/// Extensions (without the leading dot) recognised as subtitle files.
pub const DEFAULT_SUBTITLE_EXTENSIONS: &[&str] = &["srt"];

/// Duration deviation tolerance in whole seconds. A video and a subtitle
/// match when the truncated absolute difference is strictly below this.
pub const DEFAULT_TOLERANCE_SECS: u64 = 2;

/// What to do when a single file fails duration extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// The first failing file aborts the whole run.
    #[default]
    Abort,
    /// Failing files are logged, reported as skipped and left out of matching.
    SkipAndWarn,
}

/// Main configuration structure for a matching run.
///
/// Usually created through [`MatchConfigBuilder`], which normalises the
/// extension sets and validates the result.
///
/// # Examples
///
/// ```rust,no_run
/// use submatch_core::config::MatchConfigBuilder;
/// use submatch_core::MatchStrategy;
/// use std::path::PathBuf;
///
/// let config = MatchConfigBuilder::new(PathBuf::from("/media/show"))
///     .subtitle_path(PathBuf::from("/media/show/subs"))
///     .tolerance_secs(3)
///     .strategy(MatchStrategy::Nearest)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Directory (or single file) containing the video files
    pub video_path: PathBuf,

    /// Locations searched for subtitles, in order. Never empty after
    /// validation: defaults to `video_path` when none were given.
    pub subtitle_paths: Vec<PathBuf>,

    /// Lowercase extensions without the leading dot
    pub video_extensions: Vec<String>,

    /// Lowercase extensions without the leading dot
    pub subtitle_extensions: Vec<String>,

    pub tolerance_secs: u64,

    pub strategy: MatchStrategy,

    pub error_policy: ErrorPolicy,

    /// Extract durations on the rayon thread pool
    pub parallel: bool,
}

impl MatchConfig {
    /// Creates a configuration with all defaults for the given video location.
    ///
    /// Subtitles are searched in the same location.
    pub fn new(video_path: PathBuf) -> Self {
        Self {
            subtitle_paths: vec![video_path.clone()],
            video_path,
            video_extensions: to_owned_list(DEFAULT_VIDEO_EXTENSIONS),
            subtitle_extensions: to_owned_list(DEFAULT_SUBTITLE_EXTENSIONS),
            tolerance_secs: DEFAULT_TOLERANCE_SECS,
            strategy: MatchStrategy::default(),
            error_policy: ErrorPolicy::default(),
            parallel: false,
        }
    }

    /// Checks the configuration for values that would make a run meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        if self.tolerance_secs == 0 {
            return Err(CoreError::Config(
                "tolerance must be at least 1 second".to_string(),
            ));
        }
        if self.video_extensions.is_empty() {
            return Err(CoreError::Config(
                "at least one video extension is required".to_string(),
            ));
        }
        if self.subtitle_extensions.is_empty() {
            return Err(CoreError::Config(
                "at least one subtitle extension is required".to_string(),
            ));
        }
        if self.subtitle_paths.is_empty() {
            return Err(CoreError::Config(
                "at least one subtitle path is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Normalises a user-supplied extension: trims whitespace and a leading dot,
/// lowercases ASCII. Returns `None` for an empty result.
#[must_use]
pub fn normalize_extension(ext: &str) -> Option<String> {
    let trimmed = ext.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_ascii_lowercase())
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
