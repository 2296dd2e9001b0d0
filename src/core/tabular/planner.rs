//! Turning measured column lengths into a new column specification

use std::fmt;

use crate::core::options::WidthOptions;

/// Columns whose longest cell is at most this many characters stay centered
pub const NARROW_COLUMN_LEN: usize = 10;

/// Width assigned to a single column
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Natural width, centered (`c`)
    Centered,
    /// Fixed paragraph column as a fraction of `\textwidth` (`p{..\textwidth}`)
    Paragraph(f64),
}

impl fmt::Display for ColumnWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnWidth::Centered => write!(f, "c"),
            ColumnWidth::Paragraph(w) => write!(f, "p{{{:.2}\\textwidth}}", w),
        }
    }
}

/// Planned widths for every column of one table
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnPlan {
    pub columns: Vec<ColumnWidth>,
    /// Whether to draw vertical rules around and between columns
    pub vertical_rules: bool,
}

impl ColumnPlan {
    /// Build a plan from per-column maximum lengths.
    ///
    /// Returns `None` if there are no columns to plan.
    pub fn from_lengths(
        col_lengths: &[usize],
        orig_spec: &str,
        options: &WidthOptions,
    ) -> Option<Self> {
        if col_lengths.is_empty() {
            return None;
        }

        let total = col_lengths.iter().sum::<usize>().max(1) as f64;
        let columns = col_lengths
            .iter()
            .map(|&len| {
                if len <= NARROW_COLUMN_LEN {
                    ColumnWidth::Centered
                } else {
                    let ratio = len as f64 / total;
                    let width = (ratio * options.max_width).max(options.min_width).min(1.0);
                    ColumnWidth::Paragraph(width)
                }
            })
            .collect();

        Some(ColumnPlan {
            columns,
            vertical_rules: orig_spec.starts_with('|'),
        })
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Render as a `tabular` column specification
    pub fn to_spec(&self) -> String {
        let parts: Vec<String> = self.columns.iter().map(|c| c.to_string()).collect();
        if self.vertical_rules {
            format!("|{}|", parts.join("|"))
        } else {
            parts.concat()
        }
    }
}

/// New column spec for the given lengths, or the original spec when there is nothing to plan
pub fn column_spec(col_lengths: &[usize], orig_spec: &str, options: &WidthOptions) -> String {
    match ColumnPlan::from_lengths(col_lengths, orig_spec, options) {
        Some(plan) => plan.to_spec(),
        None => orig_spec.to_string(),
    }
}
