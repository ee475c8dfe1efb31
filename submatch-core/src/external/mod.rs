// ============================================================================
// submatch-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with ffprobe
//
// Video metadata comes from an external tool. The VideoProbe trait is the
// seam: the default implementation shells out to ffprobe through the ffprobe
// crate, and tests supply their own implementation with canned metadata.

use std::path::Path;

use crate::error::CoreResult;
use crate::video::VideoStreamInfo;

/// Contains the ffprobe-backed implementation of [`VideoProbe`]
pub mod ffprobe_executor;

pub use ffprobe_executor::CrateFfprobeExecutor;

/// Reads the video-stream metadata of a media file.
///
/// Implementations must not keep the file open after `probe` returns, on
/// success or failure.
///
/// # Examples
///
/// ```rust
/// use submatch_core::external::VideoProbe;
/// use submatch_core::video::{FrameRate, VideoStreamInfo};
/// use submatch_core::CoreResult;
/// use std::path::Path;
///
/// struct FixedProbe;
///
/// impl VideoProbe for FixedProbe {
///     fn probe(&self, _path: &Path) -> CoreResult<VideoStreamInfo> {
///         Ok(VideoStreamInfo {
///             frame_count: Some(3000),
///             frame_rate: FrameRate::parse("25/1"),
///             duration_secs: None,
///         })
///     }
/// }
///
/// let info = FixedProbe.probe(Path::new("clip.mp4")).unwrap();
/// assert_eq!(info.frame_count, Some(3000));
/// ```
pub trait VideoProbe: Send + Sync {
    fn probe(&self, path: &Path) -> CoreResult<VideoStreamInfo>;
}
