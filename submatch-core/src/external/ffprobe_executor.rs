//! FFprobe integration for reading video frame metadata.
//!
//! Each call runs one short-lived ffprobe process; no handle to the media
//! file outlives the call.

use std::io;
use std::path::Path;

use ffprobe::{FfProbe, FfProbeError, ffprobe};

use super::VideoProbe;
use crate::error::{CoreError, CoreResult, cannot_open_error, corrupt_metadata_error};
use crate::video::{FrameRate, VideoStreamInfo};

/// [`VideoProbe`] backed by the `ffprobe` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrateFfprobeExecutor;

impl CrateFfprobeExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl VideoProbe for CrateFfprobeExecutor {
    fn probe(&self, path: &Path) -> CoreResult<VideoStreamInfo> {
        log::debug!("Running ffprobe (via crate) for frame metadata on: {}", path.display());
        match ffprobe(path) {
            Ok(metadata) => stream_info_from_metadata(path, &metadata),
            Err(err) => {
                log::debug!("ffprobe failed on {}: {:?}", path.display(), err);
                Err(map_ffprobe_error(path, err))
            }
        }
    }
}

fn stream_info_from_metadata(path: &Path, metadata: &FfProbe) -> CoreResult<VideoStreamInfo> {
    let video_stream = metadata
        .streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
        .ok_or_else(|| corrupt_metadata_error(path, "no video stream found"))?;

    let frame_rate = [&video_stream.avg_frame_rate, &video_stream.r_frame_rate]
        .into_iter()
        .filter_map(|rate| FrameRate::parse(rate))
        .find(|rate| rate.fps().is_some())
        .or_else(|| FrameRate::parse(&video_stream.avg_frame_rate));

    let frame_count = video_stream
        .nb_frames
        .as_deref()
        .and_then(|f| f.parse::<u64>().ok());

    let duration_secs = video_stream
        .duration
        .as_deref()
        .or(metadata.format.duration.as_deref())
        .and_then(|d| d.parse::<f64>().ok());

    Ok(VideoStreamInfo {
        frame_count,
        frame_rate,
        duration_secs,
    })
}

fn map_ffprobe_error(path: &Path, err: FfProbeError) -> CoreError {
    match err {
        FfProbeError::Io(io_err) if io_err.kind() == io::ErrorKind::NotFound => {
            CoreError::DependencyNotFound("ffprobe".to_string())
        }
        FfProbeError::Io(io_err) => cannot_open_error(path, io_err),
        FfProbeError::Status(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            if stderr.is_empty() {
                cannot_open_error(path, format!("ffprobe exited with {}", output.status))
            } else {
                cannot_open_error(path, stderr)
            }
        }
        FfProbeError::Deserialize(err) => {
            corrupt_metadata_error(path, format!("ffprobe output deserialization: {err}"))
        }
        #[allow(unreachable_patterns)]
        other => cannot_open_error(path, format!("{other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video::duration_from_stream_info;

    /// ffprobe `-show_format -show_streams` output with one video and one
    /// audio stream. Placeholders are replaced per test.
    fn ffprobe_json(video_stream: &str) -> String {
        format!(
            r#"{{
  "streams": [
    {{
      "index": 0,
      "codec_name": "aac",
      "codec_type": "audio",
      "codec_tag_string": "mp4a",
      "codec_tag": "0x6134706d",
      "sample_rate": "48000",
      "channels": 2,
      "r_frame_rate": "0/0",
      "avg_frame_rate": "0/0",
      "time_base": "1/48000",
      "duration": "120.021333",
      "disposition": {disposition}
    }},
    {{
      "index": 1,
      "codec_name": "h264",
      "codec_type": "video",
      "codec_tag_string": "avc1",
      "codec_tag": "0x31637661",
      "width": 1920,
      "height": 1080,
      "time_base": "1/12800",
      "disposition": {disposition},
      {video_stream}
    }}
  ],
  "format": {{
    "filename": "clip.mp4",
    "nb_streams": 2,
    "nb_programs": 0,
    "format_name": "mov,mp4,m4a,3gp,3g2,mj2",
    "format_long_name": "QuickTime / MOV",
    "start_time": "0.000000",
    "duration": "120.040000",
    "size": "1048576",
    "bit_rate": "69888",
    "probe_score": 100
  }}
}}"#,
            disposition = DISPOSITION,
        )
    }

    const DISPOSITION: &str = r#"{
        "default": 1, "dub": 0, "original": 0, "comment": 0, "lyrics": 0,
        "karaoke": 0, "forced": 0, "hearing_impaired": 0, "visual_impaired": 0,
        "clean_effects": 0, "attached_pic": 0, "timed_thumbnails": 0,
        "captions": 0, "descriptions": 0, "metadata": 0, "dependent": 0,
        "still_image": 0
      }"#;

    fn info_for(video_stream: &str) -> CoreResult<VideoStreamInfo> {
        let metadata: FfProbe = serde_json::from_str(&ffprobe_json(video_stream))
            .expect("canned ffprobe output should deserialize");
        stream_info_from_metadata(Path::new("clip.mp4"), &metadata)
    }

    #[test]
    fn test_reads_video_stream_not_audio() {
        let info = info_for(
            r#""r_frame_rate": "25/1", "avg_frame_rate": "25/1",
               "nb_frames": "3000", "duration": "120.000000""#,
        )
        .unwrap();

        assert_eq!(info.frame_count, Some(3000));
        assert_eq!(info.frame_rate.and_then(|r| r.fps()), Some(25.0));
        assert_eq!(info.duration_secs, Some(120.0));
        assert_eq!(duration_from_stream_info(Path::new("clip.mp4"), &info).unwrap(), 120.0);
    }

    #[test]
    fn test_zero_average_rate_falls_back_to_real_rate() {
        let info = info_for(
            r#""r_frame_rate": "30000/1001", "avg_frame_rate": "0/0",
               "nb_frames": "1800""#,
        )
        .unwrap();

        let rate = info.frame_rate.unwrap();
        assert_eq!(rate, FrameRate { num: 30000.0, den: 1001.0 });
        // 1800 frames at 29.97 fps is 60.06s
        assert_eq!(duration_from_stream_info(Path::new("clip.mp4"), &info).unwrap(), 60.0);
    }

    #[test]
    fn test_missing_frame_count_uses_stream_duration() {
        let info = info_for(
            r#""r_frame_rate": "25/1", "avg_frame_rate": "25/1",
               "nb_frames": "N/A", "duration": "90.500000""#,
        )
        .unwrap();

        assert_eq!(info.frame_count, None);
        assert_eq!(info.duration_secs, Some(90.5));
        assert_eq!(duration_from_stream_info(Path::new("clip.mp4"), &info).unwrap(), 90.0);
    }

    #[test]
    fn test_missing_stream_duration_uses_container_duration() {
        let info = info_for(r#""r_frame_rate": "25/1", "avg_frame_rate": "25/1""#).unwrap();

        assert_eq!(info.frame_count, None);
        assert_eq!(info.duration_secs, Some(120.04));
        // round(120.04 * 25) = 3001 frames, floor(3001 / 25) = 120
        assert_eq!(duration_from_stream_info(Path::new("clip.mp4"), &info).unwrap(), 120.0);
    }

    #[test]
    fn test_no_video_stream_is_corrupt_metadata() {
        let json = ffprobe_json(r#""r_frame_rate": "25/1", "avg_frame_rate": "25/1""#)
            .replace(r#""codec_type": "video""#, r#""codec_type": "data""#);
        let metadata: FfProbe = serde_json::from_str(&json).unwrap();

        let err = stream_info_from_metadata(Path::new("clip.mp4"), &metadata).unwrap_err();
        assert!(matches!(err, CoreError::UnreadableMedia { .. }));
        assert!(err.to_string().contains("unreadable or corrupt video metadata"));
        assert!(err.to_string().contains("no video stream found"));
    }

    #[test]
    fn test_missing_ffprobe_binary_is_dependency_error() {
        let err = map_ffprobe_error(
            Path::new("clip.mp4"),
            FfProbeError::Io(io::Error::from(io::ErrorKind::NotFound)),
        );
        assert!(matches!(err, CoreError::DependencyNotFound(ref tool) if tool == "ffprobe"));
    }

    #[test]
    fn test_other_io_failure_cannot_open() {
        let err = map_ffprobe_error(
            Path::new("clip.mp4"),
            FfProbeError::Io(io::Error::from(io::ErrorKind::PermissionDenied)),
        );
        assert!(matches!(err, CoreError::UnreadableMedia { .. }));
        assert!(err.to_string().contains("cannot open media file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_status_cannot_open() {
        use std::os::unix::process::ExitStatusExt;
        use std::process::{ExitStatus, Output};

        let output = Output {
            status: ExitStatus::from_raw(1 << 8),
            stdout: Vec::new(),
            stderr: b"clip.mp4: Invalid data found when processing input\n".to_vec(),
        };
        let err = map_ffprobe_error(Path::new("clip.mp4"), FfProbeError::Status(output));
        let message = err.to_string();
        assert!(matches!(err, CoreError::UnreadableMedia { .. }));
        assert!(message.contains("cannot open media file"));
        assert!(message.contains("Invalid data found"));

        let silent = Output {
            status: ExitStatus::from_raw(1 << 8),
            stdout: Vec::new(),
            stderr: Vec::new(),
        };
        let err = map_ffprobe_error(Path::new("clip.mp4"), FfProbeError::Status(silent));
        assert!(err.to_string().contains("ffprobe exited with"));
    }

    #[test]
    fn test_bad_output_is_corrupt_metadata() {
        let json_err = serde_json::from_str::<FfProbe>("{ not json").unwrap_err();
        let err = map_ffprobe_error(Path::new("clip.mp4"), FfProbeError::Deserialize(json_err));
        assert!(err.to_string().contains("unreadable or corrupt video metadata"));
    }
}
