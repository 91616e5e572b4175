//! Pipe-delimited table rendering.

use unicode_width::UnicodeWidthStr;

/// Render rows as an aligned, pipe-delimited text block.
///
/// Every cell is left-aligned and padded with spaces to the display
/// width of the widest cell in its column, with one space of padding
/// inside each `|` boundary. Ragged rows render empty cells for the
/// columns they lack, so every line spans the full column count. Lines
/// are joined with `\n`; there is no trailing newline and an empty row
/// set renders as the empty string.
pub fn render_rows(rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let widths = column_widths(rows);
    let lines: Vec<String> = rows.iter().map(|row| render_row(row, &widths)).collect();
    lines.join("\n")
}

/// Per-column maximum display width; ragged rows contribute nothing to
/// the columns they lack.
fn column_widths(rows: &[Vec<String>]) -> Vec<usize> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }
    widths
}

fn render_row(row: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (i, width) in widths.iter().enumerate() {
        let cell = row.get(i).map(String::as_str).unwrap_or("");
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(width.saturating_sub(cell.width())));
        line.push_str(" |");
    }
    line
}
