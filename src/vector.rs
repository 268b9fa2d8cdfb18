//! Numeric index vectors over syllable records.

use crate::letters::{LetterClass, LetterTables};
use crate::syllable::SyllableComponents;

/// Map a record to a fixed-length index vector for downstream numeric
/// consumers.
///
/// One element per component, in the order prefix, superscript, root,
/// subscript, suffix, second suffix, vowel; each element is the
/// zero-based index of the letter within its category's reference
/// ordering, or −1 when the field is unset or the letter is not a
/// category member.
///
/// # Examples
///
/// ```
/// use tsheg::{letters, vector, Recognizer};
///
/// let recognizer = Recognizer::new();
/// let record = recognizer.recognize_syllable("འཕྲིན");
/// let v = vector::vectorize(&letters::tables(), &record);
/// assert_eq!(v, [4, -1, 13, 1, 3, -1, 0]);
/// ```
pub fn vectorize(tables: &LetterTables, record: &SyllableComponents) -> [i32; 7] {
    let index_of = |class: LetterClass, letter: Option<char>| -> i32 {
        letter
            .and_then(|l| tables.letters(class).iter().position(|&c| c == l))
            .map_or(-1, |i| i as i32)
    };

    [
        index_of(LetterClass::Prefix, record.prefix),
        index_of(LetterClass::Superscript, record.superscript),
        index_of(LetterClass::Root, record.root),
        index_of(LetterClass::Subscript, record.subscript),
        index_of(LetterClass::Suffix, record.suffix),
        index_of(LetterClass::SecondSuffix, record.second_suffix),
        index_of(LetterClass::Vowel, record.vowel),
    ]
}
