//! Text segmentation for Tibetan input.
//!
//! This module turns raw text into syllable-sized tokens through a
//! staged pipeline: character filters normalize the text, tokenizers
//! split it on sentence and syllable delimiters, and token filters
//! rewrite the token stream (numeral extraction, fused-syllable
//! splitting). [`segmenter::Segmenter`] composes the stages.

pub mod char_filter;
pub mod segmenter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use char_filter::CharFilter;
pub use segmenter::Segmenter;
pub use token::{Token, TokenStream};
pub use token_filter::TokenFilter;
pub use tokenizer::Tokenizer;
