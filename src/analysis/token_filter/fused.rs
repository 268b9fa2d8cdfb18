//! Fused-syllable splitting filter.
//!
//! A raw token between two tshegs sometimes holds two syllables sharing
//! one orthographic unit, most commonly a case particle attached with
//! achung (ཁ + འི written ཁའི). Whether a non-initial achung closes the
//! first syllable or carries a vowel of the same syllable cannot be read
//! off the achung itself; the filter decides from structural evidence in
//! the letters before it.

use super::TokenFilter;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;
use crate::letters;

/// The achung letter.
const ACHUNG: char = 'འ';

/// Splits tokens that hold two fused syllables.
///
/// Two independent cases per token:
///
/// - a token with exactly two vowel signs belongs to two syllables; the
///   split point is one character before the second vowel sign
/// - otherwise, the first non-initial achung is a syllable boundary if
///   any character before it is a root letter or a subscript letter
///   (evidence that the first syllable is already structurally
///   complete); the token is split at the achung. Without such evidence
///   the achung is part of the running syllable and the token is left
///   intact.
///
/// # Examples
///
/// ```
/// use tsheg::analysis::token::Token;
/// use tsheg::analysis::token_filter::{FusedSyllableFilter, TokenFilter};
///
/// let filter = FusedSyllableFilter::new();
/// let tokens = vec![Token::new("ཁའི", 0)];
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
/// let texts: Vec<&str> = result.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(texts, ["ཁ", "འི"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FusedSyllableFilter;

impl FusedSyllableFilter {
    /// Create a new fused-syllable filter.
    pub fn new() -> Self {
        FusedSyllableFilter
    }

    fn split_token(&self, text: &str) -> Option<(String, String)> {
        let chars: Vec<char> = text.chars().collect();

        let vowel_positions: Vec<usize> = chars
            .iter()
            .enumerate()
            .filter(|(_, c)| letters::VOWEL_SIGNS.contains(c))
            .map(|(i, _)| i)
            .collect();
        if vowel_positions.len() == 2 {
            let second = vowel_positions[1];
            if second >= 2 {
                let split = second - 1;
                let head: String = chars[..split].iter().collect();
                let tail: String = chars[split..].iter().collect();
                return Some((head, tail));
            }
            return None;
        }

        let achung = chars.iter().skip(1).position(|&c| c == ACHUNG)? + 1;
        let boundary = chars[..achung].iter().any(|c| {
            letters::ROOT_LETTERS.contains(c) || letters::SUBSCRIPT_LETTERS.contains(c)
        });
        if boundary {
            let head: String = chars[..achung].iter().collect();
            let tail: String = chars[achung..].iter().collect();
            Some((head, tail))
        } else {
            None
        }
    }
}

impl TokenFilter for FusedSyllableFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut out: Vec<Token> = Vec::new();
        for token in tokens {
            match self.split_token(&token.text) {
                Some((head, tail)) => {
                    out.push(Token::new(head, 0));
                    out.push(Token::new(tail, 0));
                }
                None => out.push(token),
            }
        }
        for (position, token) in out.iter_mut().enumerate() {
            token.position = position;
        }
        Ok(Box::new(out.into_iter()))
    }

    fn name(&self) -> &'static str {
        "fused_syllable"
    }
}
