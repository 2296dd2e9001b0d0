//! Measuring the visible content width of each table column

use lazy_static::lazy_static;
use regex::Regex;

use super::rule::strip_rules;

lazy_static! {
    /// A command with an optional `[...]` and an optional `{...}` argument
    static ref FORMAT_COMMAND: Regex =
        Regex::new(r"\\[a-zA-Z]+\*?(?:\[[^\]]*\])?(?:\{[^}]*\})?").unwrap();
}

/// LaTeX row terminator
pub const ROW_TERMINATOR: &str = r"\\";

/// LaTeX column separator
pub const COLUMN_SEPARATOR: char = '&';

/// Strip formatting commands and surrounding whitespace from a cell
pub fn clean_cell(cell: &str) -> String {
    FORMAT_COMMAND.replace_all(cell, "").trim().to_string()
}

/// Visible length of a cell in characters
pub fn cell_length(cell: &str) -> usize {
    clean_cell(cell).chars().count()
}

/// Compute the maximum cleaned cell length for every column of a table body.
///
/// Rows that contain nothing but rule commands are skipped. The result has
/// one entry per column of the widest row.
pub fn analyze_body(body: &str) -> Vec<usize> {
    let mut col_lengths: Vec<usize> = Vec::new();

    for raw_row in body.split(ROW_TERMINATOR) {
        let row = strip_rules(raw_row);
        if row.is_empty() {
            continue;
        }

        let cells: Vec<&str> = row.split(COLUMN_SEPARATOR).collect();
        if cells.len() > col_lengths.len() {
            col_lengths.resize(cells.len(), 0);
        }

        for (i, cell) in cells.iter().enumerate() {
            let len = cell_length(cell);
            if len > col_lengths[i] {
                col_lengths[i] = len;
            }
        }

        log::trace!("row with {} cells -> {:?}", cells.len(), col_lengths);
    }

    col_lengths
}
