// Output formatting utilities

use std::io::IsTerminal;

use serde_json::json;

use crate::models::{NamedRecord, StatusFrequency, COLUMN_LABELS};

// ANSI escape codes for terminal formatting
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

const COLUMN_GAP: usize = 2;
const MIN_COLUMN_WIDTH: usize = 8;

/// Check if stdout is a terminal (TTY)
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width dynamically
///
/// Uses the `terminal_size` crate for reliable detection, with fallback to
/// COLUMNS environment variable and a sensible default.
pub fn get_terminal_width() -> usize {
    if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size() {
        if w > 0 {
            return w as usize;
        }
    }

    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 && width < 10000 {
                return width;
            }
        }
    }

    120
}

/// Apply bold formatting if in TTY mode
fn bold_if_tty(text: &str, is_tty: bool) -> String {
    if is_tty {
        format!("{}{}{}", ANSI_BOLD, text, ANSI_RESET)
    } else {
        text.to_string()
    }
}

/// Truncate to `width` characters, marking the cut with an ellipsis.
fn fit(text: &str, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = chars[..width - 1].iter().collect();
    out.push('…');
    out
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

/// Shrink the widest columns until the table fits the terminal.
fn fit_widths(mut widths: Vec<usize>, terminal_width: usize) -> Vec<usize> {
    loop {
        let total: usize = widths.iter().sum::<usize>() + COLUMN_GAP * (widths.len() - 1);
        if total <= terminal_width {
            return widths;
        }
        let widest = widths
            .iter()
            .enumerate()
            .max_by_key(|(_, w)| **w)
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        if widths[widest] <= MIN_COLUMN_WIDTH {
            return widths;
        }
        widths[widest] -= 1;
    }
}

fn render_table(headers: &[&str], rows: &[Vec<String>], terminal_width: usize) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(cell.chars().count());
        }
    }
    let widths = fit_widths(widths, terminal_width);
    let gap = " ".repeat(COLUMN_GAP);
    let tty = is_tty();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&fit(header, *width), *width))
        .collect::<Vec<_>>()
        .join(&gap);
    lines.push(bold_if_tty(header_line.trim_end(), tty));

    for row in rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(&fit(cell, *width), *width))
            .collect::<Vec<_>>()
            .join(&gap);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Status counts as a two-column text table, one row per distinct label,
/// with a total line underneath.
pub fn format_status_table(frequency: &StatusFrequency) -> String {
    if frequency.is_empty() {
        return "No work orders found.".to_string();
    }
    let rows: Vec<Vec<String>> = frequency
        .iter()
        .map(|(label, count)| vec![label.to_string(), count.to_string()])
        .collect();
    let table = render_table(&["Status", "Count"], &rows, get_terminal_width());
    format!("{}\n\nTotal: {}", table, frequency.total())
}

/// Status counts in chart-series shape: parallel label and value arrays.
pub fn status_series_json(frequency: &StatusFrequency) -> serde_json::Value {
    json!({
        "labels": frequency.labels().collect::<Vec<_>>(),
        "values": frequency.counts().collect::<Vec<_>>(),
    })
}

/// The seven-column listing, width-fitted to the terminal. Null cells
/// render blank; the JSON form keeps them as null.
pub fn format_record_table(records: &[NamedRecord]) -> String {
    if records.is_empty() {
        return "No work orders found.".to_string();
    }
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            record
                .fields()
                .iter()
                .map(|(_, value)| value.display())
                .collect()
        })
        .collect();
    render_table(&COLUMN_LABELS, &rows, get_terminal_width())
}
