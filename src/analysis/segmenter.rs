//! The segmentation pipeline.

use std::sync::Arc;

use crate::analysis::char_filter::{CharFilter, PunctuationStripFilter, TibetanOnlyFilter};
use crate::analysis::token::Token;
use crate::analysis::token_filter::{FusedSyllableFilter, NumeralSplitFilter, TokenFilter};
use crate::analysis::tokenizer::{SentenceTokenizer, SyllableTokenizer, Tokenizer};
use crate::error::Result;

/// Turns raw text into syllable tokens.
///
/// The pipeline applies its char filters to the whole text, splits into
/// sentences on the shad class, splits each sentence into raw syllable
/// tokens on the tsheg class, runs the token filters over each
/// sentence's stream, and finally drops empty tokens and renumbers
/// positions.
///
/// [`Segmenter::new`] gives the default pipeline (Tibetan-only filter,
/// punctuation strip, numeral extraction, fused-syllable split); use
/// [`Segmenter::builder`] to compose a custom one.
///
/// # Examples
///
/// ```
/// use tsheg::analysis::Segmenter;
///
/// let segmenter = Segmenter::new();
/// let tokens = segmenter.segment("ཀ་ཁ།ག་ང།").unwrap();
/// let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(texts, ["ཀ", "ཁ", "ག", "ང"]);
/// ```
#[derive(Clone)]
pub struct Segmenter {
    char_filters: Vec<Arc<dyn CharFilter>>,
    token_filters: Vec<Arc<dyn TokenFilter>>,
    sentences: SentenceTokenizer,
    syllables: SyllableTokenizer,
}

impl Segmenter {
    /// Create a segmenter with the default pipeline.
    pub fn new() -> Self {
        Segmenter::builder()
            .char_filter(Arc::new(TibetanOnlyFilter::new()))
            .char_filter(Arc::new(PunctuationStripFilter::new()))
            .token_filter(Arc::new(NumeralSplitFilter::new()))
            .token_filter(Arc::new(FusedSyllableFilter::new()))
            .build()
    }

    /// Start building a custom pipeline.
    pub fn builder() -> SegmenterBuilder {
        SegmenterBuilder {
            char_filters: Vec::new(),
            token_filters: Vec::new(),
        }
    }

    /// The char filters in pipeline order.
    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    /// The token filters in pipeline order.
    pub fn token_filters(&self) -> &[Arc<dyn TokenFilter>] {
        &self.token_filters
    }

    /// Segment text into syllable tokens.
    pub fn segment(&self, text: &str) -> Result<Vec<Token>> {
        let mut text = text.to_string();
        for filter in &self.char_filters {
            text = filter.filter(&text);
        }

        let mut tokens: Vec<Token> = Vec::new();
        for sentence in self.sentences.tokenize(&text)? {
            let mut stream = self.syllables.tokenize(&sentence.text)?;
            for filter in &self.token_filters {
                stream = filter.filter(stream)?;
            }
            tokens.extend(stream.filter(|t| !t.text.is_empty()));
        }

        for (position, token) in tokens.iter_mut().enumerate() {
            token.position = position;
        }
        Ok(tokens)
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Segmenter::new()
    }
}

impl std::fmt::Debug for Segmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segmenter")
            .field(
                "char_filters",
                &self.char_filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .field(
                "token_filters",
                &self
                    .token_filters
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Builder for a custom [`Segmenter`] pipeline.
pub struct SegmenterBuilder {
    char_filters: Vec<Arc<dyn CharFilter>>,
    token_filters: Vec<Arc<dyn TokenFilter>>,
}

impl SegmenterBuilder {
    /// Append a char filter.
    pub fn char_filter(mut self, filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(filter);
        self
    }

    /// Append a token filter.
    pub fn token_filter(mut self, filter: Arc<dyn TokenFilter>) -> Self {
        self.token_filters.push(filter);
        self
    }

    /// Finish the pipeline.
    pub fn build(self) -> Segmenter {
        Segmenter {
            char_filters: self.char_filters,
            token_filters: self.token_filters,
            sentences: SentenceTokenizer::new(),
            syllables: SyllableTokenizer::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::SanskritNormalizeFilter;

    #[test]
    fn test_default_pipeline_on_clean_text() {
        let segmenter = Segmenter::new();
        let tokens = segmenter.segment("ཀ་ཁ་ག་ང་").unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["ཀ", "ཁ", "ག", "ང"]);
    }

    #[test]
    fn test_foreign_text_and_punctuation_removed() {
        let segmenter = Segmenter::new();
        let tokens = segmenter
            .segment("༄༅།།ཞི་ཅིན་ཕིང་། 2024 【x】")
            .unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["ཞི", "ཅིན", "ཕིང"]);
    }

    #[test]
    fn test_fused_case_particle_is_split() {
        let segmenter = Segmenter::new();
        let tokens = segmenter.segment("ལན་ཁའི་ཙུང་").unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["ལན", "ཁ", "འི", "ཙུང"]);
    }

    #[test]
    fn test_positions_are_sequential() {
        let segmenter = Segmenter::new();
        let tokens = segmenter.segment("ཞི་ཅིན།ཕིང་གིས།").unwrap();
        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(token.position, i);
        }
    }

    #[test]
    fn test_custom_pipeline() {
        let segmenter = Segmenter::builder()
            .token_filter(Arc::new(SanskritNormalizeFilter::new()))
            .build();
        let tokens = segmenter.segment("སིཊ་ཀ").unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["སིགས", "ཀ"]);
    }

    #[test]
    fn test_empty_input() {
        let segmenter = Segmenter::new();
        assert!(segmenter.segment("").unwrap().is_empty());
        assert!(segmenter.segment("a b c").unwrap().is_empty());
    }
}
