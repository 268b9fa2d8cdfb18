//! Sentence tokenizer: splits on the shad marks.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;
use crate::letters;

/// Splits text into sentences on the shad class (། ༎ ༏ ༐ ༑); empty
/// segments are dropped.
///
/// # Examples
///
/// ```
/// use tsheg::analysis::tokenizer::{SentenceTokenizer, Tokenizer};
///
/// let tokenizer = SentenceTokenizer::new();
/// let sentences: Vec<_> = tokenizer.tokenize("ཀ་ཁ།ག་ང།").unwrap().collect();
/// assert_eq!(sentences.len(), 2);
/// assert_eq!(sentences[0].text, "ཀ་ཁ");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SentenceTokenizer;

impl SentenceTokenizer {
    /// Create a new sentence tokenizer.
    pub fn new() -> Self {
        SentenceTokenizer
    }
}

impl Tokenizer for SentenceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let sentences: Vec<Token> = text
            .split(|c: char| letters::SHAD_MARKS.contains(&c))
            .filter(|s| !s.is_empty())
            .enumerate()
            .map(|(position, s)| Token::new(s, position))
            .collect();
        Ok(Box::new(sentences.into_iter()))
    }

    fn name(&self) -> &'static str {
        "sentence"
    }
}
