//! Horizontal rule commands inside table rows

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    /// Full rules (`\hline`, booktabs rules) and partial rules (`\cline{2-4}`, `\cmidrule(lr){2-4}`)
    static ref RULE_COMMAND: Regex = Regex::new(
        r"\\(?:hline|cline\{[^}]*\}|toprule|midrule|bottomrule|cmidrule(?:\[[^\]]*\])?(?:\([^)]*\))?\{[^}]*\})"
    )
    .unwrap();
}

/// Remove every rule-drawing command from a row, keeping the rest of it.
///
/// The result is trimmed; an empty result means the row only drew lines.
pub fn strip_rules(row: &str) -> Cow<'_, str> {
    let row = row.trim();
    match RULE_COMMAND.replace_all(row, "") {
        Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
        Cow::Owned(s) => Cow::Owned(s.trim().to_string()),
    }
}
