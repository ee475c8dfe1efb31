//! Core library for matching video files to subtitle files by duration.
//!
//! This crate scans a video location and one or more subtitle locations,
//! computes each video's duration from its frame metadata (via ffprobe) and
//! each subtitle's duration from the end of its last cue, then pairs them up
//! when the durations agree within a tolerance.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use submatch_core::{CrateFfprobeExecutor, MatchConfigBuilder, MatchSession, TableRenderer};
//! use std::path::PathBuf;
//!
//! let config = MatchConfigBuilder::new(PathBuf::from("/path/to/videos"))
//!     .subtitle_path(PathBuf::from("/path/to/subtitles"))
//!     .build()
//!     .unwrap();
//!
//! let probe = CrateFfprobeExecutor::new();
//! let report = MatchSession::new(&config, &probe).run().unwrap();
//!
//! TableRenderer::new()
//!     .render(&report, &mut std::io::stdout())
//!     .unwrap();
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod events;
pub mod external;
pub mod matcher;
pub mod records;
pub mod report;
pub mod session;
pub mod subtitle;
pub mod video;

// Re-exports for public API
pub use config::{ErrorPolicy, MatchConfig, MatchConfigBuilder};
pub use discovery::{MediaFile, MediaKind, find_media_files};
pub use error::{CoreError, CoreResult};
pub use events::{Event, EventHandler, NullEventHandler};
pub use external::{CrateFfprobeExecutor, VideoProbe};
pub use matcher::{MatchStrategy, match_videos};
pub use records::{SubtitleMatch, SubtitleRecord, VideoRecord};
pub use report::{MatchReport, ReportRow, TableRenderer, format_seconds, write_json};
pub use session::{MatchSession, run_matching};
pub use subtitle::{SubtitleEntry, extract_subtitle_duration, parse_srt};
pub use video::{FrameRate, VideoStreamInfo, extract_video_duration};
