//! Error types for the submatch-core library.
//!
//! Every failure that can abort a matching run is represented by a variant of
//! [`CoreError`]. Variants tied to a file carry its path so the CLI can print a
//! diagnostic naming the offending file.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Custom error types for submatch
#[derive(Error, Debug)]
pub enum CoreError {
    /// The scan target is missing or cannot be listed.
    #[error("directory not found or unreadable '{}': {source}", path.display())]
    DirectoryNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A video file could not be opened or its metadata is unusable.
    #[error("unreadable media '{}': {reason}", path.display())]
    UnreadableMedia { path: PathBuf, reason: String },

    /// A subtitle file is syntactically malformed.
    #[error("subtitle parse error in '{}' at line {line}: {reason}", path.display())]
    SubtitleParse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// A subtitle file parsed cleanly but contains no entries.
    #[error("empty subtitle track: '{}' contains no subtitle entries", path.display())]
    EmptySubtitleTrack { path: PathBuf },

    #[error("required external tool '{0}' was not found in PATH")]
    DependencyNotFound(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for submatch operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds an [`CoreError::UnreadableMedia`] for a file the prober could not open.
pub(crate) fn cannot_open_error(path: &Path, detail: impl std::fmt::Display) -> CoreError {
    CoreError::UnreadableMedia {
        path: path.to_path_buf(),
        reason: format!("cannot open media file: {detail}"),
    }
}

/// Builds an [`CoreError::UnreadableMedia`] for metadata that cannot yield a duration.
pub(crate) fn corrupt_metadata_error(path: &Path, detail: impl std::fmt::Display) -> CoreError {
    CoreError::UnreadableMedia {
        path: path.to_path_buf(),
        reason: format!("unreadable or corrupt video metadata: {detail}"),
    }
}
