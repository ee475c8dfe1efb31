//! File discovery module for finding video and subtitle files.
//!
//! Scans the top level of a directory (no recursion) and keeps regular files
//! whose extension is in the configured allow-list. Entries are returned in
//! directory-listing order, which is not guaranteed to be sorted.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// Role a discovered file plays in matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Subtitle,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Video => write!(f, "video"),
            MediaKind::Subtitle => write!(f, "subtitle"),
        }
    }
}

/// A file found by the scanner, classified by extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub path: PathBuf,
    pub kind: MediaKind,
}

/// Returns true when `path` has one of `extensions` (ASCII case-insensitive).
///
/// `extensions` are expected without the leading dot.
#[must_use]
pub fn has_allowed_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| ext.eq_ignore_ascii_case(allowed)))
}

/// Finds media files of the given kind at `path`.
///
/// If `path` is a directory, its top-level regular files with an allowed
/// extension are returned in listing order. If `path` is itself a file with an
/// allowed extension, it is returned alone. An empty result is not an error.
///
/// # Errors
///
/// * `CoreError::DirectoryNotFound` - if `path` does not exist or cannot be listed
///
/// # Examples
///
/// ```rust,no_run
/// use submatch_core::discovery::{find_media_files, MediaKind};
/// use std::path::Path;
///
/// let extensions = vec!["mp4".to_string()];
/// let files = find_media_files(Path::new("/path/to/videos"), &extensions, MediaKind::Video).unwrap();
/// for file in files {
///     println!("{}", file.path.display());
/// }
/// ```
pub fn find_media_files(
    path: &Path,
    extensions: &[String],
    kind: MediaKind,
) -> CoreResult<Vec<MediaFile>> {
    let metadata = std::fs::metadata(path).map_err(|source| CoreError::DirectoryNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    if metadata.is_file() {
        if has_allowed_extension(path, extensions) {
            return Ok(vec![MediaFile {
                path: path.to_path_buf(),
                kind,
            }]);
        }
        log::debug!(
            "{} is a file without an allowed {} extension, ignoring",
            path.display(),
            kind
        );
        return Ok(Vec::new());
    }

    let read_dir = std::fs::read_dir(path).map_err(|source| CoreError::DirectoryNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| CoreError::DirectoryNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let entry_path = entry.path();

        if !entry_path.is_file() {
            continue;
        }
        if has_allowed_extension(&entry_path, extensions) {
            log::trace!("Found {} file: {}", kind, entry_path.display());
            files.push(MediaFile {
                path: entry_path,
                kind,
            });
        }
    }

    log::info!("Found {} {} file(s) in {}", files.len(), kind, path.display());
    Ok(files)
}
