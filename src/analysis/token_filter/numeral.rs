//! Numeral extraction filter.

use super::TokenFilter;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;
use crate::letters;

/// Pulls Tibetan numerals embedded in a token out into tokens of their
/// own.
///
/// A token longer than one character that contains numerals is rewritten
/// as one token per numeral, followed by the text after the last numeral
/// (if any) as a single token. Tokens without numerals pass through
/// untouched.
///
/// # Examples
///
/// ```
/// use tsheg::analysis::token::Token;
/// use tsheg::analysis::token_filter::{NumeralSplitFilter, TokenFilter};
///
/// let filter = NumeralSplitFilter::new();
/// let tokens = vec![Token::new("༢༠ལོ", 0)];
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
/// let texts: Vec<&str> = result.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(texts, ["༢", "༠", "ལོ"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct NumeralSplitFilter;

impl NumeralSplitFilter {
    /// Create a new numeral extraction filter.
    pub fn new() -> Self {
        NumeralSplitFilter
    }
}

fn is_numeral(c: char) -> bool {
    letters::NUMERALS.contains(&c)
}

impl TokenFilter for NumeralSplitFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut out: Vec<Token> = Vec::new();
        for token in tokens {
            let chars: Vec<char> = token.text.chars().collect();
            if chars.len() <= 1 || !chars.iter().copied().any(is_numeral) {
                out.push(token);
                continue;
            }
            let mut last_numeral = 0;
            for (i, &c) in chars.iter().enumerate() {
                if is_numeral(c) {
                    out.push(Token::new(c.to_string(), 0));
                    last_numeral = i;
                }
            }
            let tail: String = chars[last_numeral + 1..].iter().collect();
            if !tail.is_empty() {
                out.push(Token::new(tail, 0));
            }
        }
        for (position, token) in out.iter_mut().enumerate() {
            token.position = position;
        }
        Ok(Box::new(out.into_iter()))
    }

    fn name(&self) -> &'static str {
        "numeral_split"
    }
}
