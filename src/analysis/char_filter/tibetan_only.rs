//! Foreign-character removal filter.

use super::CharFilter;
use crate::crossbar;

/// Retains only code points inside the Tibetan Unicode block
/// (U+0F00–U+0FFF); everything else, whitespace included, is dropped.
///
/// # Examples
///
/// ```
/// use tsheg::analysis::char_filter::{CharFilter, TibetanOnlyFilter};
///
/// let filter = TibetanOnlyFilter::new();
/// assert_eq!(filter.filter("2024ལོ་ abc"), "ལོ་");
/// ```
#[derive(Clone, Debug, Default)]
pub struct TibetanOnlyFilter;

impl TibetanOnlyFilter {
    /// Create a new Tibetan-only filter.
    pub fn new() -> Self {
        TibetanOnlyFilter
    }
}

impl CharFilter for TibetanOnlyFilter {
    fn filter(&self, input: &str) -> String {
        input
            .chars()
            .filter(|&c| crossbar::letter_code(c).is_some())
            .collect()
    }

    fn name(&self) -> &'static str {
        "tibetan_only"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_foreign_text() {
        let filter = TibetanOnlyFilter::new();
        assert_eq!(filter.filter("一二三"), "");
        assert_eq!(filter.filter("!@#$%^&*()_+1234567890"), "");
        assert_eq!(filter.filter(""), "");
    }

    #[test]
    fn test_keeps_tibetan_marks_and_digits() {
        let filter = TibetanOnlyFilter::new();
        assert_eq!(filter.filter("༄༅།ཀ་༡ x"), "༄༅།ཀ་༡");
    }
}
