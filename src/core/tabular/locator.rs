//! Locating `tabular` environments inside a document

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A whole `tabular` block: non-greedy, so it ends at the first `\end{tabular}`
    static ref TABULAR_BLOCK: Regex =
        Regex::new(r"(?s)\\begin\{tabular\}\{[^}]*\}.*?\\end\{tabular\}").unwrap();

    /// The column specification right after `\begin{tabular}`
    static ref COLUMN_SPEC: Regex = Regex::new(r"\\begin\{tabular\}\{([^}]*)\}").unwrap();
}

const END_TABULAR: &str = r"\end{tabular}";

/// A `tabular` environment borrowed from the document it was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableBlock<'a> {
    /// Byte offset of `\begin{tabular}` in the document
    pub start: usize,
    /// Full text from `\begin{tabular}` through `\end{tabular}`
    pub text: &'a str,
    /// Original column specification (without braces)
    pub col_spec: &'a str,
    /// Raw body between the column specification and `\end{tabular}`
    pub body: &'a str,
}

impl<'a> TableBlock<'a> {
    /// Split a matched block into its column spec and body.
    ///
    /// Returns `None` when either the column spec or the closing
    /// `\end{tabular}` cannot be found.
    pub fn extract(text: &'a str) -> Option<Self> {
        let caps = COLUMN_SPEC.captures(text)?;
        let header = caps.get(0)?;
        let col_spec = caps.get(1)?.as_str();

        let rest = &text[header.end()..];
        let end = rest.find(END_TABULAR)?;

        Some(TableBlock {
            start: 0,
            text,
            col_spec,
            body: &rest[..end],
        })
    }

    /// Byte offset just past the block in the document
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// 1-based line number of the block start within `document`
    pub fn line_in(&self, document: &str) -> usize {
        document[..self.start].matches('\n').count() + 1
    }
}

/// Find every extractable `tabular` block in document order.
pub fn find_tables(content: &str) -> Vec<TableBlock<'_>> {
    TABULAR_BLOCK
        .find_iter(content)
        .filter_map(|m| {
            TableBlock::extract(m.as_str()).map(|block| TableBlock {
                start: m.start(),
                ..block
            })
        })
        .collect()
}

/// Rewrite every matched block with `f`, keeping the text between blocks.
///
/// `f` receives the raw matched text, including blocks that would fail
/// [`TableBlock::extract`], so it decides itself how to pass them through.
pub fn replace_tables<F>(content: &str, mut f: F) -> String
where
    F: FnMut(&str) -> String,
{
    TABULAR_BLOCK
        .replace_all(content, |caps: &regex::Captures| f(&caps[0]))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_basic_block() {
        let text = "\\begin{tabular}{|c|l|}\nA & B \\\\\n\\end{tabular}";
        let block = TableBlock::extract(text).unwrap();
        assert_eq!(block.col_spec, "|c|l|");
        assert_eq!(block.body, "\nA & B \\\\\n");
    }

    #[test]
    fn test_extract_missing_end() {
        assert!(TableBlock::extract("\\begin{tabular}{cc} A & B").is_none());
    }

    #[test]
    fn test_find_tables_offsets() {
        let doc = "intro\n\\begin{tabular}{c}x\\end{tabular}\nmid\n\\begin{tabular}{cc}a&b\\end{tabular}";
        let tables = find_tables(doc);
        assert_eq!(tables.len(), 2);
        assert_eq!(&doc[tables[0].start..tables[0].end()], tables[0].text);
        assert_eq!(tables[0].line_in(doc), 2);
        assert_eq!(tables[1].col_spec, "cc");
        assert_eq!(tables[1].line_in(doc), 4);
    }

    #[test]
    fn test_first_end_closes_block() {
        let doc = "\\begin{tabular}{c}\\begin{tabular}{c}x\\end{tabular}y\\end{tabular}";
        let tables = find_tables(doc);
        assert_eq!(tables.len(), 1);
        assert!(tables[0].text.ends_with("x\\end{tabular}"));
    }

    #[test]
    fn test_replace_tables_keeps_gaps() {
        let doc = "a \\begin{tabular}{c}x\\end{tabular} b";
        let out = replace_tables(doc, |_| "T".to_string());
        assert_eq!(out, "a T b");
    }
}
