// ============================================================================
// submatch-cli/src/progress.rs
// ============================================================================
//
// PROGRESS REPORTING: indicatif progress bar driven by core events
//
// One bar per extraction phase (subtitles, then videos). The bar draws to
// stderr and is hidden entirely when stderr is not a terminal, so piped or
// captured output only contains the report.

use std::sync::Mutex;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use submatch_core::{Event, EventHandler, MediaKind};

/// Event handler that shows duration extraction progress.
pub struct ProgressHandler {
    enabled: bool,
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressHandler {
    /// Creates a handler that draws only when stderr is a terminal.
    pub fn new() -> Self {
        Self::with_enabled(console::Term::stderr().is_term())
    }

    pub fn with_enabled(enabled: bool) -> Self {
        Self {
            enabled,
            bar: Mutex::new(None),
        }
    }

    fn start(&self, kind: MediaKind, total: usize) {
        let target = if self.enabled {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        let pb = ProgressBar::with_draw_target(Some(total as u64), target);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  {msg:<26} [{bar:30}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("##."),
        );
        pb.set_message(format!("Reading {kind} durations"));

        if let Ok(mut guard) = self.bar.lock() {
            if let Some(previous) = guard.replace(pb) {
                previous.finish_and_clear();
            }
        }
    }

    fn advance(&self) {
        if let Ok(guard) = self.bar.lock() {
            if let Some(pb) = guard.as_ref() {
                pb.inc(1);
            }
        }
    }

    fn finish(&self) {
        if let Ok(mut guard) = self.bar.lock() {
            if let Some(pb) = guard.take() {
                pb.finish_and_clear();
            }
        }
    }

    /// Position of the active bar, if any.
    pub fn position(&self) -> Option<u64> {
        self.bar
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(ProgressBar::position))
    }
}

impl Default for ProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for ProgressHandler {
    fn handle(&self, event: &Event) {
        match event {
            Event::ScanCompleted { .. } => {}
            Event::ExtractionStarted { kind, total } => self.start(*kind, *total),
            Event::DurationExtracted { .. } | Event::FileSkipped { .. } => self.advance(),
            Event::MatchingCompleted { .. } => self.finish(),
        }
    }
}

impl Drop for ProgressHandler {
    fn drop(&mut self) {
        self.finish();
    }
}
