//! Whitespace normalization filter.

use super::CharFilter;

/// Trims the text and collapses every whitespace run (including
/// newlines) into a single space.
///
/// Not part of the default pipeline — the Tibetan-only filter removes
/// whitespace wholesale. Useful for callers that keep foreign text.
///
/// # Examples
///
/// ```
/// use tsheg::analysis::char_filter::{CharFilter, WhitespaceCleanFilter};
///
/// let filter = WhitespaceCleanFilter::new();
/// assert_eq!(filter.filter("  ཀ་ཁ \n\n ག  "), "ཀ་ཁ ག");
/// ```
#[derive(Clone, Debug, Default)]
pub struct WhitespaceCleanFilter;

impl WhitespaceCleanFilter {
    /// Create a new whitespace cleanup filter.
    pub fn new() -> Self {
        WhitespaceCleanFilter
    }
}

impl CharFilter for WhitespaceCleanFilter {
    fn filter(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut in_run = false;
        for c in input.trim().chars() {
            if c.is_whitespace() {
                if !in_run {
                    out.push(' ');
                }
                in_run = true;
            } else {
                out.push(c);
                in_run = false;
            }
        }
        out
    }

    fn name(&self) -> &'static str {
        "whitespace_clean"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_collapses() {
        let filter = WhitespaceCleanFilter::new();
        assert_eq!(filter.filter("    \n  ཀ་ཁ།\nག  \u{3000} ང\n\n  "), "ཀ་ཁ། ག ང");
    }

    #[test]
    fn test_passthrough() {
        let filter = WhitespaceCleanFilter::new();
        assert_eq!(filter.filter("一二三"), "一二三");
        assert_eq!(filter.filter(""), "");
    }
}
