//! Orthographic spell checking.

use rayon::prelude::*;

use crate::error::Result;
use crate::recognizer::Recognizer;

/// Validates syllables against the orthographic combination rules.
///
/// A syllable passes when its recognized structure satisfies every
/// relation its populated components impose: the root must be present,
/// prefix/superscript/subscript (and second subscript) must each be
/// combinable with the root, and a second suffix must be combinable
/// with its suffix. Unset components impose nothing.
///
/// # Examples
///
/// ```
/// use tsheg::Checker;
///
/// let checker = Checker::new();
/// assert!(checker.check_syllable("འཕྲིན"));
/// assert!(checker.check_syllable("ཀ"));
/// assert!(!checker.check_syllable("ིི"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Checker {
    recognizer: Recognizer,
}

impl Checker {
    /// Create a checker over the default recognizer.
    pub fn new() -> Self {
        Checker {
            recognizer: Recognizer::new(),
        }
    }

    /// Create a checker over an explicitly configured recognizer.
    pub fn with_recognizer(recognizer: Recognizer) -> Self {
        Checker { recognizer }
    }

    /// The recognizer in use.
    pub fn recognizer(&self) -> &Recognizer {
        &self.recognizer
    }

    /// Check one syllable against the combination rules.
    pub fn check_syllable(&self, syllable: &str) -> bool {
        let record = self.recognizer.recognize_syllable(syllable);
        let Some(root) = record.root else {
            return false;
        };

        let matcher = self.recognizer.matcher();
        let tables = matcher.tables();
        let compatible = |letter: char, set: Option<&[char]>| {
            set.is_some_and(|set| matcher.match_in_set(letter, set).is_some())
        };

        if let Some(prefix) = record.prefix {
            if !compatible(root, tables.prefix_root(prefix)) {
                return false;
            }
        }
        if let Some(superscript) = record.superscript {
            if !compatible(root, tables.superscript_root(superscript)) {
                return false;
            }
        }
        if let Some(subscript) = record.subscript {
            if !compatible(root, tables.subscript_root(subscript)) {
                return false;
            }
        }
        if let Some(second_subscript) = record.second_subscript {
            if !compatible(root, tables.subscript_root(second_subscript)) {
                return false;
            }
        }
        if let (Some(suffix), Some(second_suffix)) = (record.suffix, record.second_suffix) {
            if !compatible(suffix, tables.suffix_pair(second_suffix)) {
                return false;
            }
        }
        true
    }

    /// Segment text and check every syllable token, pairing each token's
    /// text with its verdict.
    pub fn check_text(&self, text: &str) -> Result<Vec<(String, bool)>> {
        let tokens = self.recognizer.segmenter().segment(text)?;
        Ok(tokens
            .into_iter()
            .map(|token| {
                let ok = self.check_syllable(&token.text);
                (token.text, ok)
            })
            .collect())
    }

    /// Check many documents in parallel. Workers share the immutable
    /// tables; results keep document order.
    pub fn check_corpus(&self, documents: &[&str]) -> Result<Vec<Vec<(String, bool)>>> {
        documents
            .par_iter()
            .map(|document| self.check_text(document))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_syllables() {
        let checker = Checker::new();
        for syllable in ["ཀ", "མི", "ལན", "འཕྲིན", "བཟང", "བསྒྲུབས", "མགོ", "རྒ"] {
            assert!(checker.check_syllable(syllable), "{syllable} should pass");
        }
    }

    #[test]
    fn test_unrecognized_is_invalid() {
        let checker = Checker::new();
        assert!(!checker.check_syllable("ི"));
        assert!(!checker.check_syllable(""));
        assert!(!checker.check_syllable("ཀཀཀཀཀཀཀཀ"));
    }

    #[test]
    fn test_root_required() {
        let checker = Checker::new();
        let record = checker.recognizer().recognize_syllable("ིུ");
        assert!(record.root.is_none());
        assert!(!checker.check_syllable("ིུ"));
    }

    #[test]
    fn test_incompatible_five_letter_combination() {
        // ཟ does not take subscript ྲ; the five-slot shape carries no
        // relation gate, so the checker's relation pass must reject it.
        let checker = Checker::new();
        let record = checker.recognizer().recognize_syllable("འཟྲིན");
        assert_eq!(record.root, Some('ཟ'));
        assert_eq!(record.subscript, Some('ྲ'));
        assert!(!checker.check_syllable("འཟྲིན"));
    }

    #[test]
    fn test_exception_reading_passes() {
        let checker = Checker::new();
        assert!(checker.check_syllable("བགས"));
    }

    #[test]
    fn test_check_text() {
        let checker = Checker::new();
        let results = checker.check_text("ཀ་ཁ་ག་ང་").unwrap();
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|(_, ok)| *ok));
    }

    #[test]
    fn test_check_corpus_matches_sequential() {
        let checker = Checker::new();
        let documents = ["ཀ་ཁ།", "འཕྲིན་བཏང་།", "མི་དམངས་"];
        let parallel = checker.check_corpus(&documents).unwrap();
        for (doc, expected) in documents.iter().zip(&parallel) {
            assert_eq!(&checker.check_text(doc).unwrap(), expected);
        }
    }
}
