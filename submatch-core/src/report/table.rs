//! Boxed terminal table for a [`MatchReport`].

use std::io::{self, Write};

use console::Style;
use unicode_width::UnicodeWidthStr;

use super::{MatchReport, UNMATCHED_PLACEHOLDER, format_seconds};

const TITLE: &str = "Subtitle matches";
const HEADERS: [&str; 4] = ["Video", "Subtitle file", "Video duration", "Subtitle duration"];

/// Filename columns never shrink below this when fitting a maximum width.
const MIN_NAME_WIDTH: usize = 8;

/// xterm-256 "dark orange"
const ACCENT_COLOR: u8 = 208;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

const ALIGNMENTS: [Align; 4] = [Align::Left, Align::Left, Align::Right, Align::Left];

/// Renders a report as a box-drawn table with a title and a caption.
///
/// Colour is off unless enabled with [`TableRenderer::with_color`], so output
/// written to files or pipes stays plain.
///
/// # Examples
///
/// ```rust
/// use submatch_core::report::{MatchReport, TableRenderer};
/// use submatch_core::MatchStrategy;
/// use std::path::PathBuf;
///
/// let report = MatchReport {
///     video_path: PathBuf::from("/videos"),
///     subtitle_paths: vec![PathBuf::from("/videos")],
///     tolerance_secs: 2,
///     strategy: MatchStrategy::Nearest,
///     rows: Vec::new(),
///     skipped: Vec::new(),
///     generated_at: chrono::Local::now(),
/// };
///
/// let text = TableRenderer::new().render_to_string(&report);
/// assert!(text.contains("Subtitle duration"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableRenderer {
    colored: bool,
    max_width: Option<usize>,
}

impl TableRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Limits the table width (usually the terminal width). Filename columns
    /// are truncated with an ellipsis to fit.
    pub fn with_max_width(mut self, max_width: Option<usize>) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn render_to_string(&self, report: &MatchReport) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.render(report, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn render<W: Write>(&self, report: &MatchReport, out: &mut W) -> io::Result<()> {
        let rows: Vec<[String; 4]> = report
            .rows
            .iter()
            .map(|row| {
                [
                    row.video.clone(),
                    row.subtitle.clone().unwrap_or_default(),
                    format_seconds(row.video_duration),
                    row.subtitle_duration
                        .map(format_seconds)
                        .unwrap_or_else(|| UNMATCHED_PLACEHOLDER.to_string()),
                ]
            })
            .collect();

        let widths = self.column_widths(&rows);
        let table_width = widths.iter().sum::<usize>() + 3 * widths.len() + 1;

        let accent = self.style().color256(ACCENT_COLOR).bold();
        let title_pad = table_width.saturating_sub(TITLE.width()) / 2;
        writeln!(out, "{}{}", " ".repeat(title_pad), accent.apply_to(TITLE))?;

        writeln!(out, "{}", border('┌', '─', '┬', '┐', &widths))?;
        let header_cells: Vec<String> = HEADERS
            .iter()
            .zip(widths.iter())
            .map(|(header, width)| accent.apply_to(fit(header, *width, Align::Left)).to_string())
            .collect();
        writeln!(out, "{}", join_cells(&header_cells))?;
        writeln!(out, "{}", border('╞', '═', '╪', '╡', &widths))?;

        for (i, row) in rows.iter().enumerate() {
            let dim = i % 2 == 1;
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(col, text)| {
                    let mut style = self.style();
                    if col >= 2 {
                        style = style.blue();
                    }
                    if dim {
                        style = style.dim();
                    }
                    style.apply_to(fit(text, widths[col], ALIGNMENTS[col])).to_string()
                })
                .collect();
            writeln!(out, "{}", join_cells(&cells))?;
        }
        writeln!(out, "{}", border('└', '─', '┴', '┘', &widths))?;

        writeln!(out, "Video path: {}", report.video_path.display())?;
        let subtitle_paths: Vec<String> = report
            .subtitle_paths
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        writeln!(out, "Subtitle path: {}", subtitle_paths.join(", "))?;
        if !report.skipped.is_empty() {
            writeln!(out, "Skipped: {} file(s)", report.skipped.len())?;
        }
        Ok(())
    }

    fn style(&self) -> Style {
        Style::new().force_styling(self.colored)
    }

    fn column_widths(&self, rows: &[[String; 4]]) -> [usize; 4] {
        let mut widths = HEADERS.map(UnicodeWidthStr::width);
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.width());
            }
        }

        if let Some(max_width) = self.max_width {
            let total = |w: &[usize; 4]| w.iter().sum::<usize>() + 3 * w.len() + 1;
            while total(&widths) > max_width {
                let widest = if widths[0] >= widths[1] { 0 } else { 1 };
                let floor = MIN_NAME_WIDTH.max(HEADERS[widest].width());
                if widths[widest] > floor {
                    widths[widest] -= 1;
                } else {
                    let other = 1 - widest;
                    let other_floor = MIN_NAME_WIDTH.max(HEADERS[other].width());
                    if widths[other] > other_floor {
                        widths[other] -= 1;
                    } else {
                        break;
                    }
                }
            }
        }
        widths
    }
}

fn border(left: char, fill: char, joint: char, right: char, widths: &[usize; 4]) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|w| fill.to_string().repeat(w + 2))
        .collect();
    format!("{left}{}{right}", segments.join(&joint.to_string()))
}

fn join_cells(cells: &[String]) -> String {
    let inner: Vec<String> = cells.iter().map(|c| format!(" {c} ")).collect();
    format!("│{}│", inner.join("│"))
}

/// Truncates (with an ellipsis) or pads `text` to exactly `width` columns.
fn fit(text: &str, width: usize, align: Align) -> String {
    let text = console::truncate_str(text, width, "…");
    let pad = " ".repeat(width.saturating_sub(text.width()));
    match align {
        Align::Left => format!("{text}{pad}"),
        Align::Right => format!("{pad}{text}"),
    }
}
