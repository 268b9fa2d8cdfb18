//! Segmentation pipeline scenarios: cleanup filters and pipeline
//! composition over noisy corpus text.

use std::sync::Arc;

use tsheg::analysis::char_filter::{
    CharFilter, PunctuationStripFilter, TibetanOnlyFilter, WhitespaceCleanFilter,
};
use tsheg::analysis::token_filter::NumeralSplitFilter;
use tsheg::analysis::Segmenter;

const EXAMPLE_TEXT: &str = "    \n    ༄༅།།ཞི་ཅིན་ཕིང་གིས་ཏི་ས་ནཱ་ཡ་ཁེས་སི་རི་ལན་ཁའི་ཙུང་ཐུང་གི་འགན་བཞེས་པར་རྟེན་འབྲེལ་གློག་འཕྲིན་བཏང་གནང་བ།\nགསར་འགྱུར་སྤེལ་དུས། \u{3000}【2024ལོའི་ཟླ་ 09ཚེས་25ཉིན། 14:21】  ཡོང་ཁུངས།：མི་དམངས་ཉིན་རེའི་ཚགས་པར། （རྩོམ་སྒྲིག་འགན་འཁུར་པ། མཁའ་འགྲོ།）\n\n      ";

#[test]
fn test_tibetan_only_filter_on_corpus_text() {
    let filter = TibetanOnlyFilter::new();
    assert_eq!(
        filter.filter(EXAMPLE_TEXT),
        "༄༅།།ཞི་ཅིན་ཕིང་གིས་ཏི་ས་ནཱ་ཡ་ཁེས་སི་རི་ལན་ཁའི་ཙུང་ཐུང་གི་འགན་བཞེས་པར་རྟེན་འབྲེལ་གློག་འཕྲིན་བཏང་གནང་བ།གསར་འགྱུར་སྤེལ་དུས།ལོའི་ཟླ་ཚེས་ཉིན།ཡོང་ཁུངས།མི་དམངས་ཉིན་རེའི་ཚགས་པར།རྩོམ་སྒྲིག་འགན་འཁུར་པ།མཁའ་འགྲོ།"
    );
}

#[test]
fn test_whitespace_clean_preserves_foreign_text() {
    let filter = WhitespaceCleanFilter::new();
    assert_eq!(filter.filter("一二三四五"), "一二三四五");
    assert_eq!(filter.filter("!@#$%^&*()_+1234567890"), "!@#$%^&*()_+1234567890");
    assert_eq!(filter.filter(""), "");
}

#[test]
fn test_punctuation_strip_after_tibetan_only() {
    let cleaned = TibetanOnlyFilter::new().filter("༄༅།།ཞི་ཅིན།");
    let stripped = PunctuationStripFilter::new().filter(&cleaned);
    assert_eq!(stripped, "།།ཞི་ཅིན།");
}

#[test]
fn test_minimal_pipeline_without_fused_split() {
    // a pipeline without the fused-syllable filter keeps ཁའི as one token
    let segmenter = Segmenter::builder()
        .char_filter(Arc::new(TibetanOnlyFilter::new()))
        .char_filter(Arc::new(PunctuationStripFilter::new()))
        .token_filter(Arc::new(NumeralSplitFilter::new()))
        .build();
    let tokens = segmenter.segment("ལན་ཁའི་ཙུང་").unwrap();
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["ལན", "ཁའི", "ཙུང"]);
}

#[test]
fn test_embedded_tibetan_numerals_become_tokens() {
    let segmenter = Segmenter::new();
    let tokens = segmenter.segment("༢༠༢༤ལོར་ཕྱིན།").unwrap();
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["༢", "༠", "༢", "༤", "ལོར", "ཕྱིན"]);
}

#[test]
fn test_two_vowel_raw_token_splits_into_two() {
    // without a tsheg between them, two vowel-bearing syllables arrive
    // fused; the split lands one character before the second vowel sign
    let segmenter = Segmenter::new();
    let tokens = segmenter.segment("ཁུངསམི").unwrap();
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["ཁུངས", "མི"]);
}

#[test]
fn test_tokens_are_clean_over_corpus_text() {
    let segmenter = Segmenter::new();
    let tokens = segmenter.segment(EXAMPLE_TEXT).unwrap();
    // every token is non-empty and free of delimiters
    for token in &tokens {
        assert!(!token.text.is_empty());
        assert!(!token.text.contains('་'));
        assert!(!token.text.contains('།'));
    }
}
