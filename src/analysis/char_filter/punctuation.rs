//! Punctuation stripping filter.

use super::CharFilter;
use crate::letters;

/// Removes Tibetan punctuation marks (head marks, brackets and the
/// like). Sentence terminators and syllable delimiters are left in
/// place for the tokenizers.
///
/// # Examples
///
/// ```
/// use tsheg::analysis::char_filter::{CharFilter, PunctuationStripFilter};
///
/// let filter = PunctuationStripFilter::new();
/// assert_eq!(filter.filter("༄༅།ཀ་ཁ།"), "།ཀ་ཁ།");
/// ```
#[derive(Clone, Debug, Default)]
pub struct PunctuationStripFilter;

impl PunctuationStripFilter {
    /// Create a new punctuation stripping filter.
    pub fn new() -> Self {
        PunctuationStripFilter
    }
}

impl CharFilter for PunctuationStripFilter {
    fn filter(&self, input: &str) -> String {
        input
            .chars()
            .filter(|c| !letters::PUNCTUATION_MARKS.contains(c))
            .collect()
    }

    fn name(&self) -> &'static str {
        "punctuation_strip"
    }
}
