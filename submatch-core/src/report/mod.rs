//! Report model for a finished matching run.
//!
//! A [`MatchReport`] is plain data: one row per video in scan order. It can be
//! drawn as a terminal table with [`TableRenderer`] or written as JSON with
//! [`write_json`].

mod table;

use std::io::Write;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::error::CoreResult;
use crate::matcher::MatchStrategy;
use crate::records::VideoRecord;

pub use table::TableRenderer;

/// Placeholder shown for the subtitle duration of an unmatched video.
pub const UNMATCHED_PLACEHOLDER: &str = "-";

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// Video file name
    pub video: String,
    pub video_path: PathBuf,
    /// Matched subtitle file name
    pub subtitle: Option<String>,
    pub subtitle_path: Option<PathBuf>,
    pub video_duration: f64,
    pub subtitle_duration: Option<f64>,
}

impl From<&VideoRecord> for ReportRow {
    fn from(record: &VideoRecord) -> Self {
        Self {
            video: record.file_name(),
            video_path: record.path.clone(),
            subtitle: record.matched.as_ref().map(|m| m.file_name()),
            subtitle_path: record.matched.as_ref().map(|m| m.path.clone()),
            video_duration: record.duration_secs,
            subtitle_duration: record.matched.as_ref().map(|m| m.duration_secs),
        }
    }
}

/// A file dropped from the run under the skip-and-warn policy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Everything needed to present the outcome of a run.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub video_path: PathBuf,
    pub subtitle_paths: Vec<PathBuf>,
    pub tolerance_secs: u64,
    pub strategy: MatchStrategy,
    pub rows: Vec<ReportRow>,
    pub skipped: Vec<SkippedFile>,
    pub generated_at: DateTime<Local>,
}

impl MatchReport {
    /// Number of rows with a subtitle assigned.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.rows.iter().filter(|row| row.subtitle.is_some()).count()
    }
}

/// Formats seconds the way the report shows them: whole values keep one
/// decimal (`120.0`), fractional values use the shortest exact form (`121.5`).
#[must_use]
pub fn format_seconds(seconds: f64) -> String {
    if seconds.is_finite() && seconds.fract() == 0.0 {
        format!("{seconds:.1}")
    } else {
        format!("{seconds}")
    }
}

/// Writes the report as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(report: &MatchReport, writer: &mut W) -> CoreResult<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    Ok(())
}
