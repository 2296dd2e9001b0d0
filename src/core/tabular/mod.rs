//! Tabular Width Adjuster
//!
//! Rewrites the column specification of every `tabular` environment in a
//! document so that wide columns get a `p{..\textwidth}` width proportional
//! to their longest cell, and narrow columns stay centered.
//!
//! # Architecture
//!
//! ```text
//! Document -> Locator -> Analyzer (rule stripping, cell cleaning) -> Planner -> Substitution
//! ```
//!
//! Each block is processed on its own; malformed blocks are left untouched.
//!
//! # Example
//!
//! ```
//! use tabfit::core::tabular::adjust_tables;
//! use tabfit::WidthOptions;
//!
//! let doc = r"\begin{tabular}{|c|c|}
//! Short & A rather long description \\
//! \end{tabular}";
//! let out = adjust_tables(doc, &WidthOptions::default());
//! assert!(out.contains(r"\begin{tabular}{|c|p{0.75\textwidth}|}"));
//! ```

mod analyzer;
mod locator;
mod planner;
mod rule;


use std::fmt;

use crate::core::options::WidthOptions;

// Re-export public API
pub use analyzer::{analyze_body, cell_length, clean_cell, COLUMN_SEPARATOR, ROW_TERMINATOR};
pub use locator::{find_tables, replace_tables, TableBlock};
pub use planner::{column_spec, ColumnPlan, ColumnWidth, NARROW_COLUMN_LEN};
pub use rule::strip_rules;

/// Adjust the column widths of every `tabular` block in `content`.
///
/// Text outside tables is copied unchanged.
pub fn adjust_tables(content: &str, options: &WidthOptions) -> String {
    replace_tables(content, |block| adjust_table(block, options))
}

/// Adjust a single `\begin{tabular}...\end{tabular}` block.
///
/// Only the `{tabular}{<spec>}` header is rewritten; rows, rules and any
/// other content stay as they were. Blocks without a column spec, without
/// a body or without a closing `\end{tabular}` are returned verbatim.
pub fn adjust_table(table: &str, options: &WidthOptions) -> String {
    let block = match TableBlock::extract(table) {
        Some(block) if !block.col_spec.is_empty() && !block.body.is_empty() => block,
        _ => {
            log::debug!("leaving malformed or empty tabular untouched");
            return table.to_string();
        }
    };

    let col_lengths = analyze_body(block.body);
    let new_spec = column_spec(&col_lengths, block.col_spec, options);
    log::debug!(
        "tabular {{{}}}: column lengths {:?} -> {{{}}}",
        block.col_spec,
        col_lengths,
        new_spec
    );

    table.replace(
        &format!("{{tabular}}{{{}}}", block.col_spec),
        &format!("{{tabular}}{{{}}}", new_spec),
    )
}

/// What the adjuster would do to one table
#[derive(Debug, Clone, PartialEq)]
pub struct TableReport {
    /// 1-based line of `\begin{tabular}`
    pub line: usize,
    pub original_spec: String,
    /// Longest cleaned cell per column
    pub column_lengths: Vec<usize>,
    pub new_spec: String,
}

impl TableReport {
    pub fn is_changed(&self) -> bool {
        self.original_spec != self.new_spec
    }
}

impl fmt::Display for TableReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: {{{}}} lengths {:?} -> {{{}}}",
            self.line, self.original_spec, self.column_lengths, self.new_spec
        )
    }
}

/// Analyse every table in `content` without rewriting it.
///
/// Blocks that [`adjust_table`] would pass through verbatim are reported
/// with an unchanged spec and no lengths.
pub fn plan_tables(content: &str, options: &WidthOptions) -> Vec<TableReport> {
    find_tables(content)
        .into_iter()
        .map(|block| {
            let usable = !block.col_spec.is_empty() && !block.body.is_empty();
            let column_lengths = if usable {
                analyze_body(block.body)
            } else {
                Vec::new()
            };
            TableReport {
                line: block.line_in(content),
                original_spec: block.col_spec.to_string(),
                new_spec: column_spec(&column_lengths, block.col_spec, options),
                column_lengths,
            }
        })
        .collect()
}
