//! Text processors for the tokenizer pipeline
//!
//! Every processor takes a piece of text and returns the processed text, so
//! any of them can be used as a document stage or a word stage. Returning an
//! empty string from a word stage drops that word.

use crate::config::StemLanguage;
use crate::crawler::extract_text;
use rust_stemmers::{Algorithm, Stemmer};
use std::fmt;

/// Replaces markup with whitespace, keeping only visible text
///
/// ```
/// use site_indexer::tokenizer::processors::strip_markup;
///
/// assert_eq!(strip_markup("<div>Some<strong>Text</strong></div>"), "Some Text");
/// ```
pub fn strip_markup(text: &str) -> String {
    extract_text(text)
}

pub fn to_lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Drops text that is a number
///
/// Thousands separators and decimal points are ignored when deciding, so
/// `100,000` and `1.5` are both dropped. Mixed text such as `123abc` is kept.
pub fn remove_numeric_values(text: &str) -> String {
    let digits: String = text
        .trim()
        .chars()
        .filter(|c| *c != '.' && *c != ',')
        .collect();

    if !digits.is_empty() && digits.chars().all(char::is_numeric) {
        return String::new();
    }

    text.to_string()
}

/// Removes leading and trailing whitespace
pub fn strip_whitespace(text: &str) -> String {
    text.trim().to_string()
}

/// Removes leading and trailing ASCII punctuation
pub fn strip_punctuation(text: &str) -> String {
    text.trim_matches(|c: char| c.is_ascii_punctuation())
        .to_string()
}

/// Snowball stemmer for one language
///
/// Each tokenizer builds its own instance; nothing is shared between
/// tokenizers.
pub struct WordStemmer {
    language: StemLanguage,
    stemmer: Stemmer,
}

impl WordStemmer {
    pub fn new(language: StemLanguage) -> Self {
        Self {
            language,
            stemmer: Stemmer::create(algorithm(language)),
        }
    }

    pub fn language(&self) -> StemLanguage {
        self.language
    }

    /// Reduces a word to its stem
    ///
    /// Expects lowercase input.
    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word).into_owned()
    }
}

impl fmt::Debug for WordStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordStemmer")
            .field("language", &self.language)
            .finish()
    }
}

fn algorithm(language: StemLanguage) -> Algorithm {
    match language {
        StemLanguage::Danish => Algorithm::Danish,
        StemLanguage::Dutch => Algorithm::Dutch,
        StemLanguage::English => Algorithm::English,
        StemLanguage::Finnish => Algorithm::Finnish,
        StemLanguage::French => Algorithm::French,
        StemLanguage::German => Algorithm::German,
        StemLanguage::Italian => Algorithm::Italian,
        StemLanguage::Norwegian => Algorithm::Norwegian,
        StemLanguage::Portuguese => Algorithm::Portuguese,
        StemLanguage::Romanian => Algorithm::Romanian,
        StemLanguage::Russian => Algorithm::Russian,
        StemLanguage::Spanish => Algorithm::Spanish,
        StemLanguage::Swedish => Algorithm::Swedish,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup(r#"<div class="content">Some Text</div>"#), "Some Text");
        assert_eq!(
            strip_markup(r#"<div class="content">Some<strong>Text</strong></div>"#),
            "Some Text"
        );
        assert_eq!(strip_markup(r#"<div class="content">Some Text"#), "Some Text");
    }

    #[test]
    fn test_to_lowercase() {
        let cases = [
            ("LDKSJlkfjslkdfakldsjLKJSD", "ldksjlkfjslkdfakldsjlkjsd"),
            ("ŊŋŔŪ", "ŋŋŕū"),
            ("asldkfjasldkf100", "asldkfjasldkf100"),
            ("AAA100aaa200III", "aaa100aaa200iii"),
            ("☀☁☈☋", "☀☁☈☋"),
        ];

        for (text, expected) in cases {
            assert_eq!(to_lowercase(text), expected);
        }
    }

    #[test]
    fn test_remove_numeric_values() {
        let cases = [
            ("1", ""),
            ("9880083", ""),
            ("  123445", ""),
            ("1.0", ""),
            ("1.439054", ""),
            ("100,000", ""),
            ("123asdf34", "123asdf34"),
            ("word", "word"),
            (".", "."),
            ("", ""),
        ];

        for (text, expected) in cases {
            assert_eq!(remove_numeric_values(text), expected, "input {:?}", text);
        }
    }

    #[test]
    fn test_strip_whitespace() {
        let cases = [
            ("     ", ""),
            ("\tsomething", "something"),
            ("something\t", "something"),
            ("\tsomething\t", "something"),
            ("    test ", "test"),
        ];

        for (text, expected) in cases {
            assert_eq!(strip_whitespace(text), expected);
        }
    }

    #[test]
    fn test_strip_punctuation() {
        assert_eq!(strip_punctuation("\"quoted\""), "quoted");
        assert_eq!(strip_punctuation("end."), "end");
        assert_eq!(strip_punctuation("(a.b)"), "a.b");
        assert_eq!(strip_punctuation("!?!"), "");
        assert_eq!(strip_punctuation("plain"), "plain");
    }

    #[test]
    fn test_english_stemmer() {
        let stemmer = WordStemmer::new(StemLanguage::English);
        assert_eq!(stemmer.stem("programming"), "program");
        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("cats"), "cat");
        assert_eq!(stemmer.language(), StemLanguage::English);
    }

    #[test]
    fn test_stemmers_are_independent() {
        let english = WordStemmer::new(StemLanguage::English);
        let german = WordStemmer::new(StemLanguage::German);
        assert_eq!(english.stem("cats"), "cat");
        assert_eq!(german.language(), StemLanguage::German);
    }
}
