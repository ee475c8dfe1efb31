//! Video duration extraction.
//!
//! Duration is derived the way frame-based decoders report it: total frame
//! count divided by frame rate, floored to whole seconds. The metadata comes
//! from a [`VideoProbe`](crate::external::VideoProbe).

use std::fmt;
use std::path::Path;

use crate::error::{CoreResult, corrupt_metadata_error};
use crate::external::VideoProbe;

/// A frame rate as the rational ffprobe reports (e.g. `30000/1001`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRate {
    pub num: f64,
    pub den: f64,
}

impl FrameRate {
    /// Parses `"num/den"` or a plain decimal such as `"25"` or `"29.97"`.
    ///
    /// Returns `None` for text that is not a number. `"0/0"` parses and is
    /// rejected later by [`FrameRate::fps`].
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let (num, den) = match text.split_once('/') {
            Some((num, den)) => (num.trim().parse::<f64>().ok()?, den.trim().parse::<f64>().ok()?),
            None => (text.parse::<f64>().ok()?, 1.0),
        };
        Some(Self { num, den })
    }

    /// Frames per second, or `None` when the rate is zero, negative or not finite.
    #[must_use]
    pub fn fps(&self) -> Option<f64> {
        if self.den == 0.0 {
            return None;
        }
        let fps = self.num / self.den;
        (fps.is_finite() && fps > 0.0).then_some(fps)
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

/// The subset of a container's video-stream metadata needed for duration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoStreamInfo {
    /// Total frames as recorded by the container (`nb_frames`)
    pub frame_count: Option<u64>,
    pub frame_rate: Option<FrameRate>,
    /// Stream (or container) duration in seconds, used to estimate the frame
    /// count when the container does not record one
    pub duration_secs: Option<f64>,
}

/// Computes the duration in whole seconds from probed stream metadata.
///
/// Returns the floored quotient of frame count and frame rate as an `f64`
/// with zero fractional part. The `path` is only used for error messages.
///
/// # Errors
///
/// * `CoreError::UnreadableMedia` - zero or missing frame rate, or no way to
///   determine the frame count
pub fn duration_from_stream_info(path: &Path, info: &VideoStreamInfo) -> CoreResult<f64> {
    let rate = info
        .frame_rate
        .ok_or_else(|| corrupt_metadata_error(path, "no frame rate reported"))?;
    let fps = rate
        .fps()
        .ok_or_else(|| corrupt_metadata_error(path, format!("invalid frame rate {rate}")))?;

    let frame_count = match info.frame_count {
        Some(count) => count,
        None => {
            let duration = info
                .duration_secs
                .filter(|d| d.is_finite() && *d >= 0.0)
                .ok_or_else(|| corrupt_metadata_error(path, "no frame count or duration reported"))?;
            let estimated = (duration * fps).round() as u64;
            log::debug!(
                "{}: no frame count in container, estimated {} frames from {:.3}s at {:.3} fps",
                path.display(),
                estimated,
                duration,
                fps
            );
            estimated
        }
    };

    Ok((frame_count as f64 / fps).floor())
}

/// Probes `path` and returns its duration in whole seconds.
pub fn extract_video_duration<P>(probe: &P, path: &Path) -> CoreResult<f64>
where
    P: VideoProbe + ?Sized,
{
    let info = probe.probe(path)?;
    let seconds = duration_from_stream_info(path, &info)?;
    log::debug!("Video duration for {}: {}s", path.display(), seconds);
    Ok(seconds)
}
