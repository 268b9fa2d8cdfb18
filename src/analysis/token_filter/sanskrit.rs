//! Borrowed-spelling normalization filter.

use super::TokenFilter;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Spellings borrowed through Sanskrit transliteration and their native
/// orthographic equivalents.
const SANSKRIT_MAPPINGS: &[(&str, &str)] = &[("སིཊ", "སིགས")];

/// Rewrites tokens whose spelling uses Sanskrit transliteration letters
/// to the native equivalent (e.g. སིཊ → སིགས).
///
/// Opt-in; not part of the default pipeline.
#[derive(Clone, Debug, Default)]
pub struct SanskritNormalizeFilter;

impl SanskritNormalizeFilter {
    /// Create a new Sanskrit normalization filter.
    pub fn new() -> Self {
        SanskritNormalizeFilter
    }
}

impl TokenFilter for SanskritNormalizeFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let out: Vec<Token> = tokens
            .map(|mut token| {
                if let Some(&(_, replacement)) = SANSKRIT_MAPPINGS
                    .iter()
                    .find(|(from, _)| *from == token.text)
                {
                    token.text = replacement.to_string();
                }
                token
            })
            .collect();
        Ok(Box::new(out.into_iter()))
    }

    fn name(&self) -> &'static str {
        "sanskrit_normalize"
    }
}
