//! # tabfit
//!
//! Proportional column widths for LaTeX `tabular` environments.
//!
//! Wide tables pasted into a document often overflow the page because every
//! column is sized to its longest cell. `tabfit` rewrites only the column
//! specification of each `tabular`: columns whose content is short stay
//! centered (`c`), and longer columns become paragraph columns whose width is
//! a share of `\textwidth` proportional to their content.
//!
//! ## Usage Examples
//!
//! ```rust
//! use tabfit::adjust_table_widths;
//!
//! let latex = r"\begin{tabular}{|c|c|c|}
//! \hline
//! Model & Task & Notes on the evaluation setup \\
//! \hline
//! \end{tabular}";
//!
//! let adjusted = adjust_table_widths(latex);
//! assert!(adjusted.starts_with(r"\begin{tabular}{|c|c|p{0.69\textwidth}|}"));
//! ```
//!
//! ### Custom thresholds
//!
//! ```rust
//! use tabfit::{adjust_table_widths_with_options, WidthOptions};
//!
//! let options = WidthOptions::spacious();
//! let out = adjust_table_widths_with_options("no tables here", &options);
//! assert_eq!(out, "no tables here");
//! ```

/// Core adjustment modules
pub mod core;

/// Utility modules
pub mod utils;

pub use crate::core::tabular;
pub use crate::core::{adjust_table, plan_tables, TableReport, WidthOptions};

// Re-export utilities
pub use utils::error::{TabfitError, TabfitResult};

/// Adjust every `tabular` in `content` with the default thresholds
/// (`max_width = 0.90`, `min_width = 0.15`).
///
/// Never fails: tables that cannot be analysed are left as they are, and a
/// document without tables is returned unchanged.
pub fn adjust_table_widths(content: &str) -> String {
    adjust_table_widths_with_options(content, &WidthOptions::default())
}

/// Adjust every `tabular` in `content` with custom thresholds
///
/// # Arguments
/// * `content` - LaTeX document or fragment
/// * `options` - Width thresholds as fractions of `\textwidth`
///
/// # Returns
/// The document with rewritten column specifications
pub fn adjust_table_widths_with_options(content: &str, options: &WidthOptions) -> String {
    crate::core::adjust_tables(content, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_default_thresholds() {
        let input = "\\begin{tabular}{ll}\nx & a fairly long cell \\\\\n\\end{tabular}";
        let result = adjust_table_widths(input);
        assert!(result.contains("{tabular}{cp{0.85\\textwidth}}"));
    }

    #[test]
    fn test_adjust_with_options_matches_default() {
        let input = "\\begin{tabular}{ll}\nx & a fairly long cell \\\\\n\\end{tabular}";
        assert_eq!(
            adjust_table_widths(input),
            adjust_table_widths_with_options(input, &WidthOptions::default())
        );
    }

    #[test]
    fn test_plain_text_untouched() {
        let input = "Table 7: Performance (\\%) of models.";
        assert_eq!(adjust_table_widths(input), input);
    }
}
