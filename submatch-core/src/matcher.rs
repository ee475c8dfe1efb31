//! Duration matching between videos and subtitles.
//!
//! A subtitle qualifies for a video when the absolute difference of their
//! durations, truncated to whole seconds, is strictly below the tolerance.
//! Which qualifying subtitle is kept depends on the [`MatchStrategy`].

use std::fmt;

use serde::Serialize;

use crate::records::{SubtitleMatch, SubtitleRecord, VideoRecord};

/// How to choose among several subtitles that fall within tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    /// Keep the qualifying subtitle with the smallest exact difference.
    /// On equal differences the earlier subtitle in iteration order wins.
    #[default]
    Nearest,
    /// Keep the last qualifying subtitle in iteration order.
    LastWithinTolerance,
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStrategy::Nearest => write!(f, "nearest"),
            MatchStrategy::LastWithinTolerance => write!(f, "last"),
        }
    }
}

/// Absolute difference truncated to whole seconds.
#[must_use]
pub fn deviation_secs(video_secs: f64, subtitle_secs: f64) -> u64 {
    (video_secs - subtitle_secs).abs().trunc() as u64
}

/// Returns true when the two durations are within `tolerance_secs`.
#[must_use]
pub fn within_tolerance(video_secs: f64, subtitle_secs: f64, tolerance_secs: u64) -> bool {
    deviation_secs(video_secs, subtitle_secs) < tolerance_secs
}

/// Picks the subtitle for a single video duration, if any qualifies.
#[must_use]
pub fn find_match<'a>(
    video_secs: f64,
    subtitles: &'a [SubtitleRecord],
    tolerance_secs: u64,
    strategy: MatchStrategy,
) -> Option<&'a SubtitleRecord> {
    let candidates = subtitles
        .iter()
        .filter(|s| within_tolerance(video_secs, s.duration_secs, tolerance_secs));

    match strategy {
        MatchStrategy::LastWithinTolerance => candidates.last(),
        MatchStrategy::Nearest => candidates.fold(None, |best: Option<&SubtitleRecord>, s| match best {
            Some(b) if (video_secs - b.duration_secs).abs() <= (video_secs - s.duration_secs).abs() => Some(b),
            _ => Some(s),
        }),
    }
}

/// Annotates every video with its match, leaving the rest untouched.
///
/// A subtitle may be assigned to several videos. Returns the number of
/// videos that received a match.
pub fn match_videos(
    videos: &mut [VideoRecord],
    subtitles: &[SubtitleRecord],
    tolerance_secs: u64,
    strategy: MatchStrategy,
) -> usize {
    let mut matched = 0;
    for video in videos.iter_mut() {
        video.matched = find_match(video.duration_secs, subtitles, tolerance_secs, strategy).map(|s| {
            SubtitleMatch {
                path: s.path.clone(),
                duration_secs: s.duration_secs,
            }
        });
        match &video.matched {
            Some(m) => {
                matched += 1;
                log::debug!(
                    "Matched {} ({}s) with {} ({}s)",
                    video.path.display(),
                    video.duration_secs,
                    m.path.display(),
                    m.duration_secs
                );
            }
            None => log::debug!(
                "No subtitle within {}s of {} ({}s)",
                tolerance_secs,
                video.path.display(),
                video.duration_secs
            ),
        }
    }
    matched
}
