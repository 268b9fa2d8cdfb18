//! Char filter implementations for text cleanup.
//!
//! Char filters pre-process the text string before it reaches the
//! tokenizers: whitespace normalization, foreign-character removal,
//! punctuation stripping.

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod punctuation;
pub mod tibetan_only;
pub mod whitespace;

pub use punctuation::PunctuationStripFilter;
pub use tibetan_only::TibetanOnlyFilter;
pub use whitespace::WhitespaceCleanFilter;
