//! Syllable tokenizer: splits on the tsheg marks.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;
use crate::letters;

/// Splits a sentence into raw syllable tokens on the tsheg class (་ ༌).
///
/// Empty segments are preserved here and dropped at the end of the
/// pipeline; a raw token may still hold several syllables fused around
/// an achung or a vowel pair (see the fused-syllable token filter).
#[derive(Clone, Debug, Default)]
pub struct SyllableTokenizer;

impl SyllableTokenizer {
    /// Create a new syllable tokenizer.
    pub fn new() -> Self {
        SyllableTokenizer
    }
}

impl Tokenizer for SyllableTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let words: Vec<Token> = text
            .split(|c: char| letters::TSHEG_MARKS.contains(&c))
            .enumerate()
            .map(|(position, s)| Token::new(s, position))
            .collect();
        Ok(Box::new(words.into_iter()))
    }

    fn name(&self) -> &'static str {
        "syllable"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_tsheg() {
        let tokenizer = SyllableTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("ཞི་ཅིན་ཕིང").unwrap().collect();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["ཞི", "ཅིན", "ཕིང"]);
    }

    #[test]
    fn test_keeps_empty_segments() {
        let tokenizer = SyllableTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("ཀ་་ཁ་").unwrap().collect();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["ཀ", "", "ཁ", ""]);
    }

    #[test]
    fn test_non_breaking_tsheg() {
        let tokenizer = SyllableTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("ཀ༌ཁ").unwrap().collect();
        assert_eq!(tokens.len(), 2);
    }
}
