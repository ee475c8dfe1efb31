//! SubRip (`.srt`) parsing and subtitle duration extraction.
//!
//! A subtitle file is a sequence of blocks separated by blank lines:
//!
//! ```text
//! 1
//! 00:00:01,000 --> 00:00:04,000
//! First caption text
//!
//! 2
//! 00:00:05,500 --> 00:00:08,000 X1:100 X2:200 Y1:10 Y2:20
//! Second caption text
//! with multiple lines
//! ```
//!
//! The index line is optional, `.` is accepted in place of `,`, position
//! coordinates after the end time are ignored and hours are unbounded.

use std::borrow::Cow;
use std::path::Path;
use std::time::Duration;

use thiserror::Error;

use crate::error::{CoreError, CoreResult, cannot_open_error};

const TIMING_ARROW: &str = "-->";

/// A single timed subtitle cue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEntry {
    /// Index from the file, or the 1-based position when the file omits it
    pub index: u64,
    pub start: Duration,
    pub end: Duration,
    pub text: String,
}

/// A syntax error found while parsing SubRip content.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {reason}")]
pub struct SrtSyntaxError {
    /// 1-based line number
    pub line: usize,
    pub reason: String,
}

impl SrtSyntaxError {
    fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

/// Parses SubRip content into entries, in file order.
///
/// Empty content (or content made only of blank lines) yields an empty vector.
pub fn parse_srt(content: &str) -> Result<Vec<SubtitleEntry>, SrtSyntaxError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.lines().enumerate().map(|(i, l)| (i + 1, l)).peekable();
    let mut entries = Vec::new();

    loop {
        while lines.peek().is_some_and(|(_, l)| l.trim().is_empty()) {
            lines.next();
        }
        let Some((first_no, first)) = lines.next() else {
            break;
        };

        let (timing_no, timing) = if first.contains(TIMING_ARROW) {
            (first_no, first)
        } else {
            let index_text = first.trim();
            if index_text.parse::<u64>().is_err() {
                return Err(SrtSyntaxError::new(
                    first_no,
                    format!("expected subtitle index or timing line, found '{index_text}'"),
                ));
            }
            match lines.next() {
                Some((no, line)) if !line.trim().is_empty() => (no, line),
                Some((no, _)) => {
                    return Err(SrtSyntaxError::new(no, "expected timing line, found blank line"));
                }
                None => {
                    return Err(SrtSyntaxError::new(
                        first_no + 1,
                        "unexpected end of file, expected timing line",
                    ));
                }
            }
        };

        let (start, end) = parse_timing_line(timing).map_err(|reason| SrtSyntaxError::new(timing_no, reason))?;

        let index = if timing_no == first_no {
            entries.len() as u64 + 1
        } else {
            first.trim().parse::<u64>().unwrap_or(entries.len() as u64 + 1)
        };

        let mut text_lines = Vec::new();
        while let Some((_, line)) = lines.next_if(|(_, l)| !l.trim().is_empty()) {
            text_lines.push(line);
        }

        entries.push(SubtitleEntry {
            index,
            start,
            end,
            text: text_lines.join("\n"),
        });
    }

    Ok(entries)
}

/// Parses `"00:00:01,000 --> 00:00:04,000 [coordinates]"`.
fn parse_timing_line(line: &str) -> Result<(Duration, Duration), String> {
    let (start, rest) = line
        .split_once(TIMING_ARROW)
        .ok_or_else(|| format!("expected 'start --> end' timing line, found '{}'", line.trim()))?;
    let end = rest
        .split_whitespace()
        .next()
        .ok_or_else(|| format!("missing end timestamp in '{}'", line.trim()))?;

    Ok((parse_timestamp(start.trim())?, parse_timestamp(end)?))
}

/// Parses `HH:MM:SS,mmm` (or `.mmm`) into a duration since zero.
pub fn parse_timestamp(ts: &str) -> Result<Duration, String> {
    let invalid = || format!("invalid timestamp '{ts}'");

    let parts: Vec<&str> = ts.split(':').collect();
    if parts.len() != 3 {
        return Err(invalid());
    }
    let (seconds, fraction) = match parts[2].split_once([',', '.']) {
        Some((secs, frac)) => (secs, frac),
        None => (parts[2], ""),
    };

    let hours = parse_digits(parts[0]).ok_or_else(invalid)?;
    let minutes = parse_digits(parts[1]).ok_or_else(invalid)?;
    let seconds = parse_digits(seconds).ok_or_else(invalid)?;
    let millis = if fraction.is_empty() {
        0
    } else {
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        // "5" is half a second, "5000" is truncated to millisecond precision
        let padded: String = fraction.chars().chain("000".chars()).take(3).collect();
        padded.parse::<u64>().map_err(|_| invalid())?
    };

    let total_secs = hours
        .checked_mul(3600)
        .and_then(|h| h.checked_add(minutes.checked_mul(60)?))
        .and_then(|hm| hm.checked_add(seconds))
        .ok_or_else(invalid)?;
    Ok(Duration::from_secs(total_secs) + Duration::from_millis(millis))
}

fn parse_digits(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Decodes raw subtitle bytes to text.
///
/// A UTF-32 or UTF-16 byte order mark selects that encoding; anything else is
/// read as UTF-8. Undecodable sequences are replaced rather than rejected,
/// since only the timing lines matter here. A UTF-8 BOM is left for
/// [`parse_srt`] to strip.
pub fn decode_subtitle_bytes(bytes: &[u8]) -> Cow<'_, str> {
    if let Some(rest) = bytes.strip_prefix(&[0xFF, 0xFE, 0x00, 0x00]) {
        return Cow::Owned(decode_utf32(rest, u32::from_le_bytes));
    }
    if let Some(rest) = bytes.strip_prefix(&[0x00, 0x00, 0xFE, 0xFF]) {
        return Cow::Owned(decode_utf32(rest, u32::from_be_bytes));
    }
    if let Some(rest) = bytes.strip_prefix(&[0xFF, 0xFE]) {
        return Cow::Owned(decode_utf16(rest, u16::from_le_bytes));
    }
    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        return Cow::Owned(decode_utf16(rest, u16::from_be_bytes));
    }
    String::from_utf8_lossy(bytes)
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

fn decode_utf32(bytes: &[u8], unit: fn([u8; 4]) -> u32) -> String {
    bytes
        .chunks_exact(4)
        .map(|quad| {
            char::from_u32(unit([quad[0], quad[1], quad[2], quad[3]]))
                .unwrap_or(char::REPLACEMENT_CHARACTER)
        })
        .collect()
}

/// Reads and parses a subtitle file.
///
/// The file is read fully and closed before parsing begins. Text encoding is
/// detected by [`decode_subtitle_bytes`].
///
/// # Errors
///
/// * `CoreError::UnreadableMedia` - the file cannot be read
/// * `CoreError::SubtitleParse` - the content is not valid SubRip
pub fn read_subtitle_file(path: &Path) -> CoreResult<Vec<SubtitleEntry>> {
    let bytes = std::fs::read(path).map_err(|e| cannot_open_error(path, e))?;
    let content = decode_subtitle_bytes(&bytes);

    parse_srt(&content).map_err(|err| CoreError::SubtitleParse {
        path: path.to_path_buf(),
        line: err.line,
        reason: err.reason,
    })
}

/// Duration of a subtitle track: the end time of its final entry.
///
/// Returns `None` for an empty track.
#[must_use]
pub fn track_duration(entries: &[SubtitleEntry]) -> Option<Duration> {
    entries.last().map(|entry| entry.end)
}

/// Returns the subtitle duration of `path` in seconds, fraction preserved.
///
/// # Errors
///
/// * `CoreError::EmptySubtitleTrack` - the file contains no entries
/// * errors from [`read_subtitle_file`]
pub fn extract_subtitle_duration(path: &Path) -> CoreResult<f64> {
    let entries = read_subtitle_file(path)?;
    let duration = track_duration(&entries).ok_or_else(|| CoreError::EmptySubtitleTrack {
        path: path.to_path_buf(),
    })?;
    log::debug!(
        "Subtitle duration for {}: {:.3}s ({} entries)",
        path.display(),
        duration.as_secs_f64(),
        entries.len()
    );
    Ok(duration.as_secs_f64())
}
