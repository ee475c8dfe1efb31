//! Progress events emitted by a matching run.
//!
//! The core never draws anything itself; front ends implement
//! [`EventHandler`] to show progress however they like.

use std::path::PathBuf;

use crate::discovery::MediaKind;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A scan of one location finished.
    ScanCompleted { kind: MediaKind, count: usize },
    /// Duration extraction is about to run over `total` files.
    ExtractionStarted { kind: MediaKind, total: usize },
    DurationExtracted {
        kind: MediaKind,
        path: PathBuf,
        seconds: f64,
    },
    /// A file failed extraction and was left out (skip-and-warn policy only).
    FileSkipped { path: PathBuf, reason: String },
    MatchingCompleted { matched: usize, unmatched: usize },
}

/// Receives events from a run. Called from worker threads when extraction
/// runs in parallel.
pub trait EventHandler: Send + Sync {
    fn handle(&self, event: &Event);
}

/// Handler that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEventHandler;

impl EventHandler for NullEventHandler {
    fn handle(&self, _event: &Event) {}
}
