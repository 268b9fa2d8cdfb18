//! Token types for the segmentation pipeline.

use serde::{Deserialize, Serialize};

/// A single unit of text after segmentation — normally one orthographic
/// syllable.
///
/// # Examples
///
/// ```
/// use tsheg::analysis::Token;
///
/// let token = Token::new("ཀ", 0);
/// assert_eq!(token.text, "ཀ");
/// assert_eq!(token.position, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token.
    pub text: String,
    /// The position of the token in the token stream (0-based).
    pub position: usize,
}

impl Token {
    /// Create a new token.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }
}

/// A stream of tokens flowing through the pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
