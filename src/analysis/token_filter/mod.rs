//! Token filter implementations.
//!
//! Token filters rewrite the token stream after syllable splitting:
//! pulling embedded numerals out into their own tokens, splitting fused
//! syllables, normalizing borrowed spellings.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform a token stream.
pub trait TokenFilter: Send + Sync {
    /// Apply this filter to the token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod fused;
pub mod numeral;
pub mod sanskrit;

pub use fused::FusedSyllableFilter;
pub use numeral::NumeralSplitFilter;
pub use sanskrit::SanskritNormalizeFilter;
