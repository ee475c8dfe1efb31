//! The matching pipeline: scan, extract durations, match, build the report.
//!
//! Subtitles are processed before videos. With [`ErrorPolicy::Abort`] the
//! first failure in iteration order ends the run; with
//! [`ErrorPolicy::SkipAndWarn`] failing files are logged and left out.
//! Parallel extraction produces the same report as a sequential run because
//! results are consumed in listing order.

use std::path::{Path, PathBuf};

use chrono::Local;
use rayon::prelude::*;

use crate::config::{ErrorPolicy, MatchConfig};
use crate::discovery::{MediaFile, MediaKind, find_media_files};
use crate::error::{CoreError, CoreResult};
use crate::events::{Event, EventHandler, NullEventHandler};
use crate::external::VideoProbe;
use crate::matcher::match_videos;
use crate::records::{SubtitleRecord, VideoRecord};
use crate::report::{MatchReport, ReportRow, SkippedFile};
use crate::subtitle::extract_subtitle_duration;
use crate::video::extract_video_duration;

static NULL_EVENTS: NullEventHandler = NullEventHandler;

/// One matching run over the locations named in a [`MatchConfig`].
///
/// # Examples
///
/// ```rust,no_run
/// use submatch_core::{CrateFfprobeExecutor, MatchConfig, MatchSession, TableRenderer};
/// use std::path::PathBuf;
///
/// let config = MatchConfig::new(PathBuf::from("/path/to/videos"));
/// let probe = CrateFfprobeExecutor::new();
/// let report = MatchSession::new(&config, &probe).run().unwrap();
///
/// print!("{}", TableRenderer::new().render_to_string(&report));
/// ```
pub struct MatchSession<'a> {
    config: &'a MatchConfig,
    probe: &'a dyn VideoProbe,
    events: &'a dyn EventHandler,
}

impl<'a> MatchSession<'a> {
    pub fn new(config: &'a MatchConfig, probe: &'a dyn VideoProbe) -> Self {
        Self {
            config,
            probe,
            events: &NULL_EVENTS,
        }
    }

    pub fn with_event_handler(mut self, events: &'a dyn EventHandler) -> Self {
        self.events = events;
        self
    }

    /// Runs the whole pipeline and returns the report.
    pub fn run(&self) -> CoreResult<MatchReport> {
        self.config.validate()?;

        let video_files = find_media_files(
            &self.config.video_path,
            &self.config.video_extensions,
            MediaKind::Video,
        )?;
        self.events.handle(&Event::ScanCompleted {
            kind: MediaKind::Video,
            count: video_files.len(),
        });

        let subtitle_files = self.scan_subtitles()?;
        self.events.handle(&Event::ScanCompleted {
            kind: MediaKind::Subtitle,
            count: subtitle_files.len(),
        });

        let mut skipped = Vec::new();

        let subtitles: Vec<SubtitleRecord> = self
            .extract_all(&subtitle_files, MediaKind::Subtitle, &mut skipped, |path| {
                extract_subtitle_duration(path)
            })?
            .into_iter()
            .map(|(path, duration_secs)| SubtitleRecord {
                path,
                duration_secs,
            })
            .collect();

        let probe = self.probe;
        let mut videos: Vec<VideoRecord> = self
            .extract_all(&video_files, MediaKind::Video, &mut skipped, |path| {
                extract_video_duration(probe, path)
            })?
            .into_iter()
            .map(|(path, duration_secs)| VideoRecord::new(path, duration_secs))
            .collect();

        let matched = match_videos(
            &mut videos,
            &subtitles,
            self.config.tolerance_secs,
            self.config.strategy,
        );
        log::info!(
            "Matched {} of {} video(s) using the {} strategy",
            matched,
            videos.len(),
            self.config.strategy
        );
        self.events.handle(&Event::MatchingCompleted {
            matched,
            unmatched: videos.len() - matched,
        });

        Ok(MatchReport {
            video_path: self.config.video_path.clone(),
            subtitle_paths: self.config.subtitle_paths.clone(),
            tolerance_secs: self.config.tolerance_secs,
            strategy: self.config.strategy,
            rows: videos.iter().map(ReportRow::from).collect(),
            skipped,
            generated_at: Local::now(),
        })
    }

    /// Scans every subtitle location in order. A file reachable through two
    /// locations is kept once.
    fn scan_subtitles(&self) -> CoreResult<Vec<MediaFile>> {
        let mut files: Vec<MediaFile> = Vec::new();
        for location in &self.config.subtitle_paths {
            for file in find_media_files(
                location,
                &self.config.subtitle_extensions,
                MediaKind::Subtitle,
            )? {
                if !files.iter().any(|f| f.path == file.path) {
                    files.push(file);
                }
            }
        }
        Ok(files)
    }

    fn extract_all<F>(
        &self,
        files: &[MediaFile],
        kind: MediaKind,
        skipped: &mut Vec<SkippedFile>,
        extract: F,
    ) -> CoreResult<Vec<(PathBuf, f64)>>
    where
        F: Fn(&Path) -> CoreResult<f64> + Sync,
    {
        self.events.handle(&Event::ExtractionStarted {
            kind,
            total: files.len(),
        });

        let run_one = |file: &MediaFile| {
            let result = extract(&file.path);
            if let Ok(seconds) = &result {
                self.events.handle(&Event::DurationExtracted {
                    kind,
                    path: file.path.clone(),
                    seconds: *seconds,
                });
            }
            result
        };

        let mut durations = Vec::with_capacity(files.len());
        if self.config.parallel {
            let results: Vec<CoreResult<f64>> = files.par_iter().map(run_one).collect();
            for (file, result) in files.iter().zip(results) {
                match result {
                    Ok(seconds) => durations.push((file.path.clone(), seconds)),
                    Err(err) => self.handle_failure(file, err, skipped)?,
                }
            }
        } else {
            for file in files {
                match run_one(file) {
                    Ok(seconds) => durations.push((file.path.clone(), seconds)),
                    Err(err) => self.handle_failure(file, err, skipped)?,
                }
            }
        }
        Ok(durations)
    }

    /// Returns the error when the run must stop, otherwise records the skip.
    fn handle_failure(
        &self,
        file: &MediaFile,
        err: CoreError,
        skipped: &mut Vec<SkippedFile>,
    ) -> CoreResult<()> {
        // A missing ffprobe fails every video the same way
        if self.config.error_policy == ErrorPolicy::Abort
            || matches!(err, CoreError::DependencyNotFound(_))
        {
            return Err(err);
        }

        log::warn!("Skipping {} file {}: {}", file.kind, file.path.display(), err);
        let reason = err.to_string();
        self.events.handle(&Event::FileSkipped {
            path: file.path.clone(),
            reason: reason.clone(),
        });
        skipped.push(SkippedFile {
            path: file.path.clone(),
            reason,
        });
        Ok(())
    }
}

/// Runs a session with no event handler.
pub fn run_matching(config: &MatchConfig, probe: &dyn VideoProbe) -> CoreResult<MatchReport> {
    MatchSession::new(config, probe).run()
}
