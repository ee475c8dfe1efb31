//! Per-file records built during a matching run.

use std::path::{Path, PathBuf};

/// A subtitle file and its duration in seconds (fraction preserved).
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleRecord {
    pub path: PathBuf,
    pub duration_secs: f64,
}

/// The subtitle assigned to a video.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleMatch {
    pub path: PathBuf,
    pub duration_secs: f64,
}

impl SubtitleMatch {
    /// File name of the matched subtitle, for display.
    #[must_use]
    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }
}

/// A video file, its duration in whole seconds, and its match if any.
///
/// Only `matched` changes after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoRecord {
    pub path: PathBuf,
    pub duration_secs: f64,
    pub matched: Option<SubtitleMatch>,
}

impl VideoRecord {
    pub fn new(path: PathBuf, duration_secs: f64) -> Self {
        Self {
            path,
            duration_secs,
            matched: None,
        }
    }

    #[must_use]
    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }
}

/// Final path component, lossily converted. Falls back to the whole path.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
