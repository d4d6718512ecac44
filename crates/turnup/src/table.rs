//! Table structural inference
//!
//! A table is a contiguous run of pipe-prefixed lines. The separator row
//! (dashes, optionally with alignment colons) is never emitted as data; its
//! presence promotes the row immediately before it to header cells.

use turnup_core::{Block, Cell, TableRow};

use crate::inline::format_inline;
use crate::service::TurnupOptions;

/// Check if a collected line is the header/body separator row
fn is_separator(line: &str) -> bool {
    line.contains("---") || line.contains(":-:") || line.contains(":--") || line.contains("--:")
}

/// Parse a table from the contiguous `|`-prefixed run at `lines[start]`.
///
/// Returns `None` when the run yields no data rows (only separators, or no
/// cells at all); the caller then degrades the line to a paragraph. The
/// second value is the index one past the consumed lines, or `start` when
/// nothing was consumed.
pub(crate) fn parse_table(
    lines: &[&str],
    start: usize,
    options: &TurnupOptions,
) -> (Option<Block>, usize) {
    let mut end = start;
    while end < lines.len() && lines[end].starts_with('|') {
        end += 1;
    }
    let table_lines = &lines[start..end];
    if table_lines.is_empty() {
        return (None, start);
    }

    let separator = table_lines.iter().position(|line| is_separator(line));

    let mut rows = Vec::new();
    for (idx, line) in table_lines.iter().enumerate() {
        if is_separator(line) {
            continue;
        }

        let cells = split_cells(line);
        if cells.is_empty() {
            continue;
        }

        let is_header = matches!(separator, Some(sep) if idx + 1 == sep);
        let row = cells
            .into_iter()
            .map(|text| {
                let content = format_inline(text, options);
                if is_header {
                    Cell::header(content)
                } else {
                    Cell::body(content)
                }
            })
            .collect();
        rows.push(TableRow::new(row));
    }

    if rows.is_empty() {
        return (None, start);
    }

    (Some(Block::Table { content: rows }), end)
}

/// Split a pipe row into trimmed cell texts, discarding the empty fragments
/// produced by the outer pipes
fn split_cells(line: &str) -> Vec<&str> {
    let mut cells: Vec<&str> = line.split('|').map(str::trim).collect();
    if cells.first().is_some_and(|c| c.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    cells
}
