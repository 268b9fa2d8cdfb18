//! The syllable component record.

use serde::{Deserialize, Serialize};

/// The recognized internal structure of one Tibetan syllable.
///
/// Every field holds at most one letter; unset fields were simply not
/// present in the syllable. A record whose `root` is unset is an
/// unrecognized syllable — that is a result, not an error. The root is
/// always reported in tall form: a subjoined root resolved under a
/// superscript is normalized as the final step of recognition.
///
/// Records are created fresh per syllable and have no identity beyond a
/// single recognition call.
///
/// # Examples
///
/// ```
/// use tsheg::Recognizer;
///
/// let recognizer = Recognizer::new();
/// let record = recognizer.recognize_syllable("ཀ");
/// assert_eq!(record.root, Some('ཀ'));
/// assert!(record.prefix.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SyllableComponents {
    /// The original syllable text.
    pub text: String,
    /// Preposed letter.
    pub prefix: Option<char>,
    /// Superscribed letter.
    pub superscript: Option<char>,
    /// Root letter, tall form.
    pub root: Option<char>,
    /// Subjoined letter.
    pub subscript: Option<char>,
    /// Second-level subjoined letter.
    pub second_subscript: Option<char>,
    /// Vowel sign.
    pub vowel: Option<char>,
    /// Suffix letter.
    pub suffix: Option<char>,
    /// Second suffix letter.
    pub second_suffix: Option<char>,
}

impl SyllableComponents {
    /// An empty record carrying only the original text.
    pub fn empty<S: Into<String>>(text: S) -> Self {
        SyllableComponents {
            text: text.into(),
            ..SyllableComponents::default()
        }
    }

    /// Whether recognition produced any structure.
    pub fn is_recognized(&self) -> bool {
        self.root.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record() {
        let record = SyllableComponents::empty("ཀླུ");
        assert_eq!(record.text, "ཀླུ");
        assert!(!record.is_recognized());
        assert_eq!(record.prefix, None);
    }

    #[test]
    fn test_serialization_round_trip() {
        let record = SyllableComponents {
            text: "ཀ".to_string(),
            root: Some('ཀ'),
            ..SyllableComponents::default()
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: SyllableComponents = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
