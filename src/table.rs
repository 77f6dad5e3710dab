// src/table.rs
//
// Pipe-table reading and writing (the Markdown subset the movie lists use).
//
// Grammar of a data row:
//   - after trimming, the line starts with '|'
//   - cells are separated by unescaped '|'; `\|` is a literal pipe, any other '\' is literal
//   - inside a cell, runs of whitespace count as one space; ends are trimmed
//   - only closed cells count (text after the last '|' is ignored)
//   - cell 1 is the title (non-empty after trim), cell 2 the year (exactly four digits)
//   - further cells are ignored
// Anything else (headers, `|---|` separators, blanks, malformed rows) is skipped.

use std::mem::take;

use crate::core::sanitize::{ escape_cell, is_year, normalize_ws };
use crate::data::{ EnrichedRecord, MovieRecord };

/* ---------------- Parsing ---------------- */

/// Split a table line into its whitespace-normalized, unescaped, closed cells.
/// `None` when the line isn't a table line at all.
pub fn split_cells(line: &str) -> Option<Vec<String>> {
    let rest = line.trim().strip_prefix('|')?;

    let mut cells = Vec::new();
    let mut cell = s!();
    let mut chars = rest.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' if matches!(chars.peek(), Some('|')) => {
                chars.next();
                cell.push('|');
            }
            '|' => cells.push(normalize_ws(&take(&mut cell))),
            _ => cell.push(ch),
        }
    }
    Some(cells)
}

/// One input line → record, if it is a well-formed data row.
pub fn parse_row(line: &str) -> Option<MovieRecord> {
    let cells = split_cells(line)?;
    let (title, year) = (cells.first()?, cells.get(1)?);
    if title.is_empty() || !is_year(year) {
        return None;
    }
    Some(MovieRecord::new(title.as_str(), year.as_str()))
}

/// All data rows of `text`, in order.
pub fn parse_records(text: &str) -> Vec<MovieRecord> {
    text.lines().filter_map(parse_row).collect()
}

/* ---------------- Writing ---------------- */

/// Append a single table row: `| a | b | c |`.
pub fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S]) {
    out.push('|');
    for cell in cells {
        out.push(' ');
        out.push_str(&escape_cell(cell.as_ref()));
        out.push_str(" |");
    }
    out.push('\n');
}

/// GitHub-flavored separator row, one `---` per column.
pub fn push_separator(out: &mut String, columns: usize) {
    out.push('|');
    out.push_str(&"---|".repeat(columns));
    out.push('\n');
}

/// Header, separator, then one row per record.
pub fn render_table(headers: &[&str], rows: &[EnrichedRecord]) -> String {
    let mut out = s!();
    push_row(&mut out, headers);
    push_separator(&mut out, headers.len());
    for r in rows {
        push_row(&mut out, &[r.title(), r.year(), r.description.as_str()]);
    }
    out
}
