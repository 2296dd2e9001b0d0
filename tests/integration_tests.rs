//! Integration tests for Tabfit document adjustment

use tabfit::{
    adjust_table_widths, adjust_table_widths_with_options, plan_tables, TabfitError,
    WidthOptions,
};

const DEMO: &str = include_str!("../demos/graph_tasks.tex");
const DEMO_ADJUSTED: &str = include_str!("../demos/graph_tasks.adjusted.tex");

// ============================================================================
// Full Document Tests
// ============================================================================

mod documents {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_demo_document_matches_reference() {
        assert_eq!(adjust_table_widths(DEMO), DEMO_ADJUSTED);
    }

    #[test]
    fn test_demo_only_headers_change() {
        let output = adjust_table_widths(DEMO);
        let before: Vec<&str> = DEMO.lines().collect();
        let after: Vec<&str> = output.lines().collect();
        assert_eq!(before.len(), after.len());

        let changed: Vec<(&str, &str)> = before
            .iter()
            .zip(after.iter())
            .filter(|(a, b)| a != b)
            .map(|(a, b)| (*a, *b))
            .collect();
        assert_eq!(changed.len(), 2);
        for (old, new) in changed {
            assert!(old.starts_with("\\begin{tabular}{|c|c|c|c|c|c|c|c|c|c|}"));
            assert!(new.starts_with("\\begin{tabular}{|p{0.15\\textwidth}|"));
        }
    }

    #[test]
    fn test_demo_plan() {
        let reports = plan_tables(DEMO, &WidthOptions::default());
        assert_eq!(reports.len(), 2);
        for report in &reports {
            assert_eq!(report.column_lengths.len(), 10);
            assert!(report.is_changed());
        }
        assert_eq!(reports[0].line, 6);
    }

    #[test]
    fn test_prose_only_document() {
        let doc = r"\documentclass{article}
\begin{document}
\section{Results}
See Table~\ref{tab:main} for details \\ and more.
\end{document}
";
        assert_eq!(adjust_table_widths(doc), doc);
    }

    #[test]
    fn test_table_inside_table_environment() {
        let doc = r"\begin{table}[h]
\centering
\caption{Main results}
\begin{tabular}{l|r}
\toprule
Method & Score \\
\midrule
Baseline with every trick enabled & 41.2 \\
\bottomrule
\end{tabular}
\label{tab:main}
\end{table}";
        let output = adjust_table_widths(doc);
        assert!(output.contains("\\begin{tabular}{p{0.78\\textwidth}c}"));
        assert!(output.contains("\\caption{Main results}"));
        assert!(output.contains("\\label{tab:main}"));
        assert!(output.contains("\\toprule\nMethod & Score \\\\\n\\midrule"));
    }
}

// ============================================================================
// Options Tests
// ============================================================================

mod options {
    use super::*;

    #[test]
    fn test_spacious_preset_widens_columns() {
        let doc = "\\begin{tabular}{ll}\nid & a considerably longer cell \\\\\n\\end{tabular}";
        let default = adjust_table_widths(doc);
        let spacious = adjust_table_widths_with_options(doc, &WidthOptions::spacious());
        assert!(default.contains("{cp{0.84\\textwidth}}"));
        assert!(spacious.contains("{cp{0.93\\textwidth}}"));
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        let err = WidthOptions::validated(0.9, 2.0).unwrap_err();
        assert!(matches!(err, TabfitError::InvalidThreshold { name: "min_width", .. }));
    }
}
