//! Category membership matching over pre-written crossbars.
//!
//! [`CategoryMatcher`] writes each letter category's code list into its
//! own [`Crossbar`] once at construction; a membership query is a single
//! readout against the relevant array. Relation-table checks go through
//! [`CategoryMatcher::match_in_set`], which performs the same readout
//! against an ad-hoc candidate set.

use std::sync::Arc;

use crate::crossbar::{self, Crossbar};
use crate::letters::{LetterClass, LetterTables};

const CLASSES: [LetterClass; 9] = [
    LetterClass::Prefix,
    LetterClass::Superscript,
    LetterClass::Root,
    LetterClass::RootShort,
    LetterClass::Subscript,
    LetterClass::SecondSubscript,
    LetterClass::Suffix,
    LetterClass::SecondSuffix,
    LetterClass::Vowel,
];

fn class_index(class: LetterClass) -> usize {
    match class {
        LetterClass::Prefix => 0,
        LetterClass::Superscript => 1,
        LetterClass::Root => 2,
        LetterClass::RootShort => 3,
        LetterClass::Subscript => 4,
        LetterClass::SecondSubscript => 5,
        LetterClass::Suffix => 6,
        LetterClass::SecondSuffix => 7,
        LetterClass::Vowel => 8,
    }
}

/// Exact-match letter categorizer.
///
/// # Examples
///
/// ```
/// use tsheg::crossbar::letter_code;
/// use tsheg::letters::{tables, LetterClass};
/// use tsheg::matcher::CategoryMatcher;
///
/// let matcher = CategoryMatcher::new(tables());
/// assert_eq!(matcher.match_class(letter_code('ཕ'), LetterClass::Root), Some('ཕ'));
/// assert_eq!(matcher.match_class(letter_code('ི'), LetterClass::Root), None);
/// ```
#[derive(Debug, Clone)]
pub struct CategoryMatcher {
    tables: Arc<LetterTables>,
    bars: Vec<Crossbar>,
}

impl CategoryMatcher {
    /// Build a matcher over shared letter tables, writing one crossbar
    /// per category.
    pub fn new(tables: Arc<LetterTables>) -> Self {
        let bars = CLASSES
            .iter()
            .map(|&class| Crossbar::write(tables.codes(class)))
            .collect();
        CategoryMatcher { tables, bars }
    }

    /// The tables this matcher was built over.
    pub fn tables(&self) -> &Arc<LetterTables> {
        &self.tables
    }

    /// Match a letter code against a category, returning the member
    /// letter it resolves to.
    pub fn match_class(&self, code: Option<u8>, class: LetterClass) -> Option<char> {
        let code = code?;
        let index = self.bars[class_index(class)].first_match(code)?;
        self.tables.letters(class).get(index).copied()
    }

    /// Match a character against a category.
    pub fn match_char(&self, c: char, class: LetterClass) -> Option<char> {
        self.match_class(crossbar::letter_code(c), class)
    }

    /// Whether a character is a member of a category.
    pub fn is_member(&self, c: char, class: LetterClass) -> bool {
        self.match_char(c, class).is_some()
    }

    /// Match a letter against an arbitrary candidate set (relation-table
    /// second pass). Candidate codes are derived on the fly, as the sets
    /// are small and vary per lookup.
    pub fn match_in_set(&self, letter: char, candidates: &[char]) -> Option<char> {
        let code = crossbar::letter_code(letter)?;
        let codes: Vec<u8> = candidates.iter().map(|&c| crossbar::block_code(c)).collect();
        Crossbar::write(&codes)
            .first_match(code)
            .and_then(|i| candidates.get(i).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letters::{self, tables};

    #[test]
    fn test_self_consistency_for_every_category_member() {
        let matcher = CategoryMatcher::new(tables());
        for class in CLASSES {
            for &letter in matcher.tables().letters(class) {
                assert_eq!(
                    matcher.match_char(letter, class),
                    Some(letter),
                    "{letter} should match itself in {class:?}"
                );
            }
        }
    }

    #[test]
    fn test_non_members_do_not_match() {
        let matcher = CategoryMatcher::new(tables());
        // a vowel sign is not a root, a root is not a vowel
        assert_eq!(matcher.match_char('ི', LetterClass::Root), None);
        assert_eq!(matcher.match_char('ཀ', LetterClass::Vowel), None);
        // subjoined forms are not tall roots
        assert_eq!(matcher.match_char('ྒ', LetterClass::Root), None);
        // non-Tibetan characters never match
        assert_eq!(matcher.match_char('a', LetterClass::Root), None);
    }

    #[test]
    fn test_numerals_match_as_roots() {
        let matcher = CategoryMatcher::new(tables());
        assert_eq!(matcher.match_char('༣', LetterClass::Root), Some('༣'));
    }

    #[test]
    fn test_match_in_set() {
        let matcher = CategoryMatcher::new(tables());
        let t = tables();
        let candidates = t.prefix_root('འ').unwrap();
        assert_eq!(matcher.match_in_set('ཕ', candidates), Some('ཕ'));
        assert_eq!(matcher.match_in_set('ཀ', candidates), None);
        assert_eq!(matcher.match_in_set('x', candidates), None);
    }

    #[test]
    fn test_every_root_letter_resolves() {
        let matcher = CategoryMatcher::new(tables());
        for &letter in letters::ROOT_LETTERS {
            assert!(matcher.is_member(letter, LetterClass::Root));
        }
    }
}
