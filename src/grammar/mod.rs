//! The structural grammar: ordered syllable templates.
//!
//! A [`Template`] describes one admissible syllable shape as a fixed
//! sequence of slot categories, a set of cross-slot [`RelationCheck`]s,
//! and the record field each slot's letter is assigned to. Templates are
//! grouped by arity (letter count, 1–7) into ordered tables
//! ([`tables::templates_for_arity`]) and tried strictly top to bottom;
//! the first template whose category tests and relation checks all pass
//! wins. Priority is purely positional — several templates can
//! structurally cover the same letter sequence, so table order is part of
//! the grammar and must not be rearranged.
//!
//! Relation checks name which slot supplies the table key and which
//! supplies the candidate, and whether the candidate root is presented to
//! the table in tall form or as written. A few templates present a
//! subjoined root to a table keyed on tall forms; those checks reject by
//! construction and the sequence falls through to later templates. Which
//! form each check presents is part of the grammar.

pub mod tables;

use crate::letters::LetterClass;
use crate::matcher::CategoryMatcher;
use crate::syllable::SyllableComponents;

pub use tables::{templates_for_arity, SUFFIX_EXCEPTIONS};

/// A record field a matched slot letter is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Prefix,
    Superscript,
    Root,
    Subscript,
    SecondSubscript,
    Vowel,
    Suffix,
    SecondSuffix,
}

impl Field {
    /// Write a letter into this field of a record.
    pub fn assign(self, record: &mut SyllableComponents, letter: char) {
        match self {
            Field::Prefix => record.prefix = Some(letter),
            Field::Superscript => record.superscript = Some(letter),
            Field::Root => record.root = Some(letter),
            Field::Subscript => record.subscript = Some(letter),
            Field::SecondSubscript => record.second_subscript = Some(letter),
            Field::Vowel => record.vowel = Some(letter),
            Field::Suffix => record.suffix = Some(letter),
            Field::SecondSuffix => record.second_suffix = Some(letter),
        }
    }
}

/// A cross-slot orthographic compatibility check.
///
/// Slot indices refer to positions within the syllable's letter
/// sequence. A lookup on a key absent from its relation table is a
/// failed check, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationCheck {
    /// The root at `root` (tall form if `tall`) must be combinable with
    /// the prefix at `prefix`.
    PrefixRoot { prefix: usize, root: usize, tall: bool },
    /// The root at `root` (tall form if `tall`) must be combinable with
    /// the superscript at `superscript`.
    SuperscriptRoot {
        superscript: usize,
        root: usize,
        tall: bool,
    },
    /// The root at `root` (tall form if `tall`) must be combinable with
    /// the subscript at `subscript`.
    SubscriptRoot {
        subscript: usize,
        root: usize,
        tall: bool,
    },
    /// The suffix at `suffix` must be one the second suffix at `second`
    /// may follow.
    SuffixPair { suffix: usize, second: usize },
    /// The syllable must not be one of [`SUFFIX_EXCEPTIONS`].
    NotSuffixException,
}

impl RelationCheck {
    /// Evaluate the check against a syllable's letters.
    pub fn passes(&self, matcher: &CategoryMatcher, syllable: &str, chars: &[char]) -> bool {
        let tables = matcher.tables();
        let in_relation = |letter: char, set: Option<&[char]>| {
            set.is_some_and(|set| matcher.match_in_set(letter, set).is_some())
        };
        match *self {
            RelationCheck::PrefixRoot { prefix, root, tall } => {
                let letter = presented_root(tables, chars[root], tall);
                in_relation(letter, tables.prefix_root(chars[prefix]))
            }
            RelationCheck::SuperscriptRoot {
                superscript,
                root,
                tall,
            } => {
                let letter = presented_root(tables, chars[root], tall);
                in_relation(letter, tables.superscript_root(chars[superscript]))
            }
            RelationCheck::SubscriptRoot {
                subscript,
                root,
                tall,
            } => {
                let letter = presented_root(tables, chars[root], tall);
                in_relation(letter, tables.subscript_root(chars[subscript]))
            }
            RelationCheck::SuffixPair { suffix, second } => {
                in_relation(chars[suffix], tables.suffix_pair(chars[second]))
            }
            RelationCheck::NotSuffixException => !SUFFIX_EXCEPTIONS.contains(&syllable),
        }
    }
}

fn presented_root(tables: &crate::letters::LetterTables, c: char, tall: bool) -> char {
    if tall {
        tables.short_to_tall(c).unwrap_or(c)
    } else {
        c
    }
}

/// One admissible syllable shape.
///
/// `slots` and `fields` are parallel: slot `i`'s letter must belong to
/// `slots[i]` and is assigned to `fields[i]`. They usually correspond
/// one-to-one, but not always — the exception-list fallback reads a
/// {prefix, root, suffix}-shaped sequence as {root, suffix, second
/// suffix}.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    /// Required category per slot, in syllable order.
    pub slots: &'static [LetterClass],
    /// Relation checks gating this template.
    pub checks: &'static [RelationCheck],
    /// Record field receiving each slot's letter.
    pub fields: &'static [Field],
}

impl Template {
    /// Attempt this template: every slot's letter must be a member of its
    /// category and every relation check must pass.
    pub fn try_match(
        &self,
        matcher: &CategoryMatcher,
        syllable: &str,
        chars: &[char],
        codes: &[Option<u8>],
    ) -> bool {
        if chars.len() != self.slots.len() {
            return false;
        }
        for (i, &class) in self.slots.iter().enumerate() {
            if matcher.match_class(codes[i], class).is_none() {
                return false;
            }
        }
        self.checks
            .iter()
            .all(|check| check.passes(matcher, syllable, chars))
    }

    /// Fill a record with this template's field assignments.
    pub fn fill(&self, record: &mut SyllableComponents, chars: &[char]) {
        for (i, &field) in self.fields.iter().enumerate() {
            field.assign(record, chars[i]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossbar::letter_code;
    use crate::letters::tables as letter_tables;

    fn chars_and_codes(s: &str) -> (Vec<char>, Vec<Option<u8>>) {
        let chars: Vec<char> = s.chars().collect();
        let codes = chars.iter().map(|&c| letter_code(c)).collect();
        (chars, codes)
    }

    #[test]
    fn test_tables_are_consistent() {
        for arity in 1..=7 {
            let templates = templates_for_arity(arity);
            assert!(!templates.is_empty(), "arity {arity} has no templates");
            for (i, t) in templates.iter().enumerate() {
                assert_eq!(
                    t.slots.len(),
                    arity,
                    "arity {arity} template {i}: wrong slot count"
                );
                assert_eq!(
                    t.slots.len(),
                    t.fields.len(),
                    "arity {arity} template {i}: slots/fields not parallel"
                );
                assert!(
                    t.fields.contains(&Field::Root),
                    "arity {arity} template {i}: no root field"
                );
            }
        }
    }

    #[test]
    fn test_out_of_range_arity_has_no_templates() {
        assert!(templates_for_arity(0).is_empty());
        assert!(templates_for_arity(8).is_empty());
    }

    #[test]
    fn test_suffix_exception_check() {
        let matcher = CategoryMatcher::new(letter_tables());
        let (chars, _) = chars_and_codes("བགས");
        assert!(!RelationCheck::NotSuffixException.passes(&matcher, "བགས", &chars));
        assert!(RelationCheck::NotSuffixException.passes(&matcher, "བཟས", &chars));
    }

    #[test]
    fn test_template_first_match_order() {
        // ཀ + ྲ satisfies both the {root, subscript} shape and, category-wise,
        // nothing earlier in the arity-2 table; it must take the subscript
        // reading with its relation gate.
        let matcher = CategoryMatcher::new(letter_tables());
        let (chars, codes) = chars_and_codes("ཀྲ");
        let templates = templates_for_arity(2);
        let winner = templates
            .iter()
            .position(|t| t.try_match(&matcher, "ཀྲ", &chars, &codes));
        assert_eq!(winner, Some(1));
    }

    #[test]
    fn test_relation_check_failure_rejects_template() {
        // ཀ cannot take prefix འ; the {prefix, root, vowel} template must
        // reject འཀི even though every category test passes.
        let matcher = CategoryMatcher::new(letter_tables());
        let (chars, codes) = chars_and_codes("འཀི");
        let template = &templates_for_arity(3)[3];
        assert!(!template.try_match(&matcher, "འཀི", &chars, &codes));
    }
}
