//! Syllable structure recognition.

use std::sync::Arc;

use crate::analysis::Segmenter;
use crate::crossbar;
use crate::error::Result;
use crate::grammar;
use crate::letters::{self, LetterTables};
use crate::matcher::CategoryMatcher;
use crate::syllable::SyllableComponents;
use crate::vector;

/// Recognizes the component structure of Tibetan syllables.
///
/// Recognition is deterministic and idempotent; the recognizer holds no
/// mutable state and can be shared freely across threads. The letter
/// tables are shared (`Arc`), so cloning a recognizer or creating many
/// is cheap.
///
/// # Examples
///
/// ```
/// use tsheg::Recognizer;
///
/// let recognizer = Recognizer::new();
/// let record = recognizer.recognize_syllable("འཕྲིན");
/// assert_eq!(record.prefix, Some('འ'));
/// assert_eq!(record.root, Some('ཕ'));
/// assert_eq!(record.subscript, Some('ྲ'));
/// assert_eq!(record.vowel, Some('ི'));
/// assert_eq!(record.suffix, Some('ན'));
/// ```
#[derive(Debug, Clone)]
pub struct Recognizer {
    matcher: CategoryMatcher,
    segmenter: Segmenter,
}

impl Recognizer {
    /// Create a recognizer over the process-wide letter tables and the
    /// default segmentation pipeline.
    pub fn new() -> Self {
        Recognizer::with_tables(letters::tables())
    }

    /// Create a recognizer over explicitly shared tables.
    pub fn with_tables(tables: Arc<LetterTables>) -> Self {
        Recognizer {
            matcher: CategoryMatcher::new(tables),
            segmenter: Segmenter::new(),
        }
    }

    /// Replace the segmentation pipeline.
    pub fn with_segmenter(mut self, segmenter: Segmenter) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// The letter tables in use.
    pub fn tables(&self) -> &Arc<LetterTables> {
        self.matcher.tables()
    }

    /// The category matcher in use.
    pub fn matcher(&self) -> &CategoryMatcher {
        &self.matcher
    }

    /// The segmentation pipeline in use.
    pub fn segmenter(&self) -> &Segmenter {
        &self.segmenter
    }

    /// Recognize the component structure of one syllable.
    ///
    /// The syllable's letters are categorized and the ordered template
    /// table for the letter count (1–7) is tried top to bottom; the
    /// first fully satisfied template fills the record. A syllable no
    /// template covers — including anything longer than 7 letters —
    /// yields a record with only the original text set.
    pub fn recognize_syllable(&self, syllable: &str) -> SyllableComponents {
        let mut record = SyllableComponents::empty(syllable);
        let chars: Vec<char> = syllable.chars().collect();
        let codes: Vec<Option<u8>> = chars.iter().map(|&c| crossbar::letter_code(c)).collect();

        for template in grammar::templates_for_arity(chars.len()) {
            if template.try_match(&self.matcher, syllable, &chars, &codes) {
                template.fill(&mut record, &chars);
                break;
            }
        }

        // a root resolved in subjoined form is reported tall
        if let Some(root) = record.root {
            if let Some(tall) = self.tables().short_to_tall(root) {
                record.root = Some(tall);
            }
        }
        record
    }

    /// Segment text and recognize every syllable token.
    pub fn recognize_text(&self, text: &str) -> Result<Vec<SyllableComponents>> {
        let tokens = self.segmenter.segment(text)?;
        Ok(tokens
            .iter()
            .map(|token| self.recognize_syllable(&token.text))
            .collect())
    }

    /// Index vector of a recognized record (see [`vector::vectorize`]).
    pub fn vectorize(&self, record: &SyllableComponents) -> [i32; 7] {
        vector::vectorize(self.tables(), record)
    }
}

impl Default for Recognizer {
    fn default() -> Self {
        Recognizer::new()
    }
}
