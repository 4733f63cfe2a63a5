use terminal_size::{terminal_size, Width};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const DEFAULT_TERMINAL_WIDTH: usize = 120;
const COLUMN_GAP: &str = "  ";
const ELLIPSIS: char = '…';
// the last column is never squeezed below this
const MIN_LAST_COLUMN: usize = 12;

fn terminal_width() -> usize {
    match terminal_size() {
        Some((Width(w), _)) => w as usize,
        None => DEFAULT_TERMINAL_WIDTH,
    }
}

/// Cut text to at most `max_width` display columns, marking the cut with an ellipsis
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        result.push(c);
        used += w;
    }
    result.push(ELLIPSIS);
    result
}

fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

/// Lay out rows under a header line.
///
/// Columns are aligned by display width so Polish diacritics line up. The
/// last column is truncated to fit `max_width`.
pub fn format_table(headers: &[&str], rows: &[Vec<String>], max_width: usize) -> Vec<String> {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(columns) {
            widths[i] = widths[i].max(cell.width());
        }
    }

    if let Some(last) = columns.checked_sub(1) {
        let fixed: usize = widths[..last].iter().sum::<usize>() + COLUMN_GAP.len() * last;
        let available = max_width.saturating_sub(fixed).max(MIN_LAST_COLUMN);
        widths[last] = widths[last].min(available);
    }

    let render = |cells: Vec<String>| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let cell = truncate_to_width(cell, widths[i]);
                if i + 1 == columns {
                    cell
                } else {
                    pad_to_width(&cell, widths[i])
                }
            })
            .collect::<Vec<_>>()
            .join(COLUMN_GAP)
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render(headers.iter().map(|h| h.to_string()).collect()));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP),
    );
    for row in rows {
        let mut cells = row.clone();
        cells.resize(columns, String::new());
        lines.push(render(cells));
    }
    lines
}

/// Print rows as a table fitted to the terminal width
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    for line in format_table(headers, rows, terminal_width()) {
        println!("{}", line);
    }
}
