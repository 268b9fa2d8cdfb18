//! Letter category and relation tables for Tibetan orthography.
//!
//! This module holds the fixed reference data the whole engine runs on:
//! the ordered letter categories (prefix, superscript, root, subscript,
//! suffix, vowel, ...), the four cross-component relation tables, and the
//! short-form (subjoined) to tall-form root letter mapping.
//!
//! [`LetterTables`] is constructed once and shared read-only; the 8-bit
//! category code lists used by the matcher are derived at construction
//! time and memoized, never per call. Category ordering is stable and
//! observable through [`crate::vector::vectorize`].

use std::sync::{Arc, LazyLock};

use ahash::AHashMap;

use crate::crossbar;

/// The letter categories a syllable component can be drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClass {
    /// Preposed letters (前加字).
    Prefix,
    /// Superscribed letters (上加字).
    Superscript,
    /// Root letters, tall form; includes the Tibetan digits so a bare
    /// numeral token parses as a single-component syllable.
    Root,
    /// Root letters in subjoined (short) form, as written under a
    /// superscript.
    RootShort,
    /// Subjoined letters (下加字).
    Subscript,
    /// Second-level subjoined letters (再下加字).
    SecondSubscript,
    /// Suffix letters (后加字).
    Suffix,
    /// Second suffix letters (再后加字).
    SecondSuffix,
    /// Vowel signs.
    Vowel,
}

/// Preposed letters, in reference order.
pub const PREFIX_LETTERS: &[char] = &['ག', 'ད', 'བ', 'མ', 'འ'];

/// Superscribed letters.
pub const SUPERSCRIPT_LETTERS: &[char] = &['ར', 'ལ', 'ས'];

/// The thirty root consonants, in alphabet order.
pub const ROOT_LETTERS: &[char] = &[
    'ཀ', 'ཁ', 'ག', 'ང', 'ཅ', 'ཆ', 'ཇ', 'ཉ', 'ཏ', 'ཐ', 'ད', 'ན', 'པ', 'ཕ',
    'བ', 'མ', 'ཙ', 'ཚ', 'ཛ', 'ཝ', 'ཞ', 'ཟ', 'འ', 'ཡ', 'ར', 'ལ', 'ཤ', 'ས',
    'ཧ', 'ཨ',
];

/// Subjoined (short-form) root letters: the fifteen consonants that occur
/// under a superscript.
pub const ROOT_LETTERS_SHORT: &[char] = &[
    'ྐ', 'ྒ', 'ྔ', 'ྕ', 'ྗ', 'ྙ', 'ྟ', 'ྡ', 'ྣ', 'ྤ', 'ྦ', 'ྨ', 'ྩ', 'ྫ',
    'ྷ',
];

/// Subjoined letters.
pub const SUBSCRIPT_LETTERS: &[char] = &['ྱ', 'ྲ', 'ླ', 'ྭ'];

/// Second-level subjoined letters (wazur only).
pub const SECOND_SUBSCRIPT_LETTERS: &[char] = &['ྭ'];

/// Suffix letters, in reference order.
pub const SUFFIX_LETTERS: &[char] = &['ག', 'ང', 'ད', 'ན', 'བ', 'མ', 'འ', 'ར', 'ལ', 'ས'];

/// Second suffix letters.
pub const SECOND_SUFFIX_LETTERS: &[char] = &['ས', 'ད'];

/// Vowel signs.
pub const VOWEL_SIGNS: &[char] = &['ི', 'ུ', 'ེ', 'ོ'];

/// Tibetan digits ༠–༩.
pub const NUMERALS: &[char] = &['༠', '༡', '༢', '༣', '༤', '༥', '༦', '༧', '༨', '༩'];

/// Sentence terminator marks (shad and its variants).
pub const SHAD_MARKS: &[char] = &['།', '༎', '༏', '༐', '༑'];

/// Syllable delimiters (tsheg and non-breaking tsheg).
pub const TSHEG_MARKS: &[char] = &['་', '༌'];

/// Punctuation stripped before segmentation: head marks, the caret and
/// gter marks, and the paired brackets.
pub const PUNCTUATION_MARKS: &[char] = &[
    '༄', '༅', '༆', '༇', '༈', '༉', '༊', '༒', '༔', '༺', '༻', '༼', '༽',
];

/// Subjoined form → standalone form, one pair per short root letter.
pub const SHORT_TO_TALL: &[(char, char)] = &[
    ('ྐ', 'ཀ'),
    ('ྒ', 'ག'),
    ('ྔ', 'ང'),
    ('ྕ', 'ཅ'),
    ('ྗ', 'ཇ'),
    ('ྙ', 'ཉ'),
    ('ྟ', 'ཏ'),
    ('ྡ', 'ད'),
    ('ྣ', 'ན'),
    ('ྤ', 'པ'),
    ('ྦ', 'བ'),
    ('ྨ', 'མ'),
    ('ྩ', 'ཙ'),
    ('ྫ', 'ཛ'),
    ('ྷ', 'ཧ'),
];

/// Which root letters each prefix may precede.
const PREFIX_ROOT: &[(char, &[char])] = &[
    ('ག', &['ཅ', 'ཉ', 'ཏ', 'ད', 'ན', 'ཙ', 'ཞ', 'ཟ', 'ཡ', 'ཤ', 'ས']),
    ('ད', &['ཀ', 'ག', 'ང', 'པ', 'བ', 'མ']),
    ('བ', &['ཀ', 'ག', 'ཅ', 'ཏ', 'ད', 'ཙ', 'ཞ', 'ཟ', 'ཤ', 'ས']),
    ('མ', &['ཁ', 'ག', 'ང', 'ཆ', 'ཇ', 'ཉ', 'ཐ', 'ད', 'ན', 'ཚ', 'ཛ']),
    ('འ', &['ཁ', 'ག', 'ཆ', 'ཇ', 'ཐ', 'ད', 'ཕ', 'བ', 'ཚ', 'ཛ']),
];

/// Which root letters (tall form) each superscript may sit over.
const SUPERSCRIPT_ROOT: &[(char, &[char])] = &[
    ('ར', &['ཀ', 'ག', 'ང', 'ཇ', 'ཉ', 'ཏ', 'ད', 'ན', 'བ', 'མ', 'ཙ', 'ཛ']),
    ('ལ', &['ཀ', 'ག', 'ང', 'ཅ', 'ཇ', 'ཏ', 'ད', 'པ', 'བ', 'ཧ']),
    ('ས', &['ཀ', 'ག', 'ང', 'ཉ', 'ཏ', 'ད', 'ན', 'པ', 'བ', 'མ', 'ཙ']),
];

/// Which root letters each subscript may sit under. Also consulted for the
/// second subscript.
const SUBSCRIPT_ROOT: &[(char, &[char])] = &[
    ('ྱ', &['ཀ', 'ཁ', 'ག', 'པ', 'ཕ', 'བ', 'མ']),
    ('ྲ', &['ཀ', 'ཁ', 'ག', 'ཏ', 'ཐ', 'ད', 'པ', 'ཕ', 'བ', 'མ', 'ས', 'ཧ']),
    ('ླ', &['ཀ', 'ག', 'བ', 'ཟ', 'ར', 'ས']),
    (
        'ྭ',
        &['ཀ', 'ཁ', 'ག', 'ཅ', 'ཉ', 'ཏ', 'ད', 'ཙ', 'ཚ', 'ཞ', 'ཟ', 'ར', 'ལ', 'ཤ', 'ས', 'ཧ'],
    ),
];

/// Which suffixes each second suffix may follow, keyed by the second
/// suffix.
const SUFFIX_PAIR: &[(char, &[char])] = &[
    ('ས', &['ག', 'ང', 'བ', 'མ']),
    ('ད', &['ན', 'ར', 'ལ']),
];

/// Immutable letter category and relation tables.
///
/// Construct once with [`LetterTables::new`] (or use the process-wide
/// [`tables`] instance) and share by reference; all lookups are read-only.
///
/// # Examples
///
/// ```
/// use tsheg::letters::{LetterClass, tables};
///
/// let t = tables();
/// assert_eq!(t.letters(LetterClass::Prefix).len(), 5);
/// assert!(t.prefix_root('འ').unwrap().contains(&'ཕ'));
/// assert_eq!(t.short_to_tall('ྒ'), Some('ག'));
/// ```
#[derive(Debug)]
pub struct LetterTables {
    root_with_numerals: Vec<char>,
    prefix_codes: Vec<u8>,
    superscript_codes: Vec<u8>,
    root_codes: Vec<u8>,
    root_short_codes: Vec<u8>,
    subscript_codes: Vec<u8>,
    second_subscript_codes: Vec<u8>,
    suffix_codes: Vec<u8>,
    second_suffix_codes: Vec<u8>,
    vowel_codes: Vec<u8>,
    prefix_root: AHashMap<char, &'static [char]>,
    superscript_root: AHashMap<char, &'static [char]>,
    subscript_root: AHashMap<char, &'static [char]>,
    suffix_pair: AHashMap<char, &'static [char]>,
    short_to_tall: AHashMap<char, char>,
    tall_to_short: AHashMap<char, char>,
}

impl LetterTables {
    /// Build the tables, deriving and memoizing the per-category code
    /// lists.
    pub fn new() -> Self {
        let root_with_numerals: Vec<char> =
            ROOT_LETTERS.iter().chain(NUMERALS.iter()).copied().collect();

        let codes = |letters: &[char]| -> Vec<u8> {
            letters.iter().map(|&c| crossbar::block_code(c)).collect()
        };

        LetterTables {
            prefix_codes: codes(PREFIX_LETTERS),
            superscript_codes: codes(SUPERSCRIPT_LETTERS),
            root_codes: codes(&root_with_numerals),
            root_short_codes: codes(ROOT_LETTERS_SHORT),
            subscript_codes: codes(SUBSCRIPT_LETTERS),
            second_subscript_codes: codes(SECOND_SUBSCRIPT_LETTERS),
            suffix_codes: codes(SUFFIX_LETTERS),
            second_suffix_codes: codes(SECOND_SUFFIX_LETTERS),
            vowel_codes: codes(VOWEL_SIGNS),
            root_with_numerals,
            prefix_root: PREFIX_ROOT.iter().copied().collect(),
            superscript_root: SUPERSCRIPT_ROOT.iter().copied().collect(),
            subscript_root: SUBSCRIPT_ROOT.iter().copied().collect(),
            suffix_pair: SUFFIX_PAIR.iter().copied().collect(),
            short_to_tall: SHORT_TO_TALL.iter().copied().collect(),
            tall_to_short: SHORT_TO_TALL.iter().map(|&(s, t)| (t, s)).collect(),
        }
    }

    /// The ordered member letters of a category.
    pub fn letters(&self, class: LetterClass) -> &[char] {
        match class {
            LetterClass::Prefix => PREFIX_LETTERS,
            LetterClass::Superscript => SUPERSCRIPT_LETTERS,
            LetterClass::Root => &self.root_with_numerals,
            LetterClass::RootShort => ROOT_LETTERS_SHORT,
            LetterClass::Subscript => SUBSCRIPT_LETTERS,
            LetterClass::SecondSubscript => SECOND_SUBSCRIPT_LETTERS,
            LetterClass::Suffix => SUFFIX_LETTERS,
            LetterClass::SecondSuffix => SECOND_SUFFIX_LETTERS,
            LetterClass::Vowel => VOWEL_SIGNS,
        }
    }

    /// The memoized 8-bit codes of a category, parallel to
    /// [`Self::letters`].
    pub fn codes(&self, class: LetterClass) -> &[u8] {
        match class {
            LetterClass::Prefix => &self.prefix_codes,
            LetterClass::Superscript => &self.superscript_codes,
            LetterClass::Root => &self.root_codes,
            LetterClass::RootShort => &self.root_short_codes,
            LetterClass::Subscript => &self.subscript_codes,
            LetterClass::SecondSubscript => &self.second_subscript_codes,
            LetterClass::Suffix => &self.suffix_codes,
            LetterClass::SecondSuffix => &self.second_suffix_codes,
            LetterClass::Vowel => &self.vowel_codes,
        }
    }

    /// Roots compatible with the given prefix, or `None` for an unknown
    /// key.
    pub fn prefix_root(&self, prefix: char) -> Option<&'static [char]> {
        self.prefix_root.get(&prefix).copied()
    }

    /// Roots (tall form) compatible with the given superscript.
    pub fn superscript_root(&self, superscript: char) -> Option<&'static [char]> {
        self.superscript_root.get(&superscript).copied()
    }

    /// Roots compatible with the given subscript (or second subscript).
    pub fn subscript_root(&self, subscript: char) -> Option<&'static [char]> {
        self.subscript_root.get(&subscript).copied()
    }

    /// Suffixes the given second suffix may follow.
    pub fn suffix_pair(&self, second_suffix: char) -> Option<&'static [char]> {
        self.suffix_pair.get(&second_suffix).copied()
    }

    /// Tall-form equivalent of a subjoined root letter.
    pub fn short_to_tall(&self, short: char) -> Option<char> {
        self.short_to_tall.get(&short).copied()
    }

    /// Subjoined equivalent of a tall root letter, where one exists.
    pub fn tall_to_short(&self, tall: char) -> Option<char> {
        self.tall_to_short.get(&tall).copied()
    }

    /// Whether the letter is a subjoined root form.
    pub fn is_short_root(&self, c: char) -> bool {
        self.short_to_tall.contains_key(&c)
    }
}

impl Default for LetterTables {
    fn default() -> Self {
        LetterTables::new()
    }
}

static TABLES: LazyLock<Arc<LetterTables>> = LazyLock::new(|| Arc::new(LetterTables::new()));

/// The process-wide shared table instance.
pub fn tables() -> Arc<LetterTables> {
    Arc::clone(&TABLES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_sizes() {
        let t = LetterTables::new();
        assert_eq!(t.letters(LetterClass::Prefix).len(), 5);
        assert_eq!(t.letters(LetterClass::Superscript).len(), 3);
        assert_eq!(t.letters(LetterClass::Root).len(), 40);
        assert_eq!(t.letters(LetterClass::RootShort).len(), 15);
        assert_eq!(t.letters(LetterClass::Subscript).len(), 4);
        assert_eq!(t.letters(LetterClass::Suffix).len(), 10);
        assert_eq!(t.letters(LetterClass::SecondSuffix).len(), 2);
        assert_eq!(t.letters(LetterClass::Vowel).len(), 4);
    }

    #[test]
    fn test_codes_parallel_to_letters() {
        let t = LetterTables::new();
        for class in [
            LetterClass::Prefix,
            LetterClass::Superscript,
            LetterClass::Root,
            LetterClass::RootShort,
            LetterClass::Subscript,
            LetterClass::SecondSubscript,
            LetterClass::Suffix,
            LetterClass::SecondSuffix,
            LetterClass::Vowel,
        ] {
            assert_eq!(t.letters(class).len(), t.codes(class).len());
        }
    }

    #[test]
    fn test_relation_values_are_roots() {
        let relations = [PREFIX_ROOT, SUPERSCRIPT_ROOT, SUBSCRIPT_ROOT];
        for table in relations {
            for (_, roots) in table {
                for r in *roots {
                    assert!(ROOT_LETTERS.contains(r), "{r} is not a root letter");
                }
            }
        }
        for (_, suffixes) in SUFFIX_PAIR {
            for s in *suffixes {
                assert!(SUFFIX_LETTERS.contains(s), "{s} is not a suffix letter");
            }
        }
    }

    #[test]
    fn test_short_tall_round_trip() {
        let t = LetterTables::new();
        for &(short, tall) in SHORT_TO_TALL {
            assert_eq!(t.short_to_tall(short), Some(tall));
            assert_eq!(t.tall_to_short(tall), Some(short));
            // subjoined block sits a fixed offset above the standalone block
            assert_eq!(short as u32, tall as u32 + 0x50);
        }
    }

    #[test]
    fn test_relation_lookups() {
        let t = LetterTables::new();
        assert!(t.prefix_root('འ').unwrap().contains(&'ཕ'));
        assert!(t.superscript_root('ར').unwrap().contains(&'ཀ'));
        assert!(t.subscript_root('ྲ').unwrap().contains(&'ཕ'));
        assert!(t.suffix_pair('ས').unwrap().contains(&'ག'));
        // unknown keys are absent, not errors
        assert!(t.prefix_root('ཀ').is_none());
        assert!(t.suffix_pair('མ').is_none());
    }

    #[test]
    fn test_shared_instance() {
        let a = tables();
        let b = tables();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
