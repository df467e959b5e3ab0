//! Word segmentation strategies
//!
//! A segmenter turns (already document-processed) text into raw words. The
//! tokenizer then runs its word stages over each of them.

use unicode_segmentation::UnicodeSegmentation;

/// Splits normalized document text into an ordered sequence of raw words
pub trait Segmenter: Send + Sync {
    fn segment<'t>(&self, text: &'t str) -> Vec<&'t str>;
}

/// Splits on a fixed delimiter
///
/// Consecutive delimiters produce empty pieces; those are returned as-is and
/// dropped later by the tokenizer. An empty delimiter falls back to splitting
/// on any whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterSegmenter {
    delimiter: String,
}

impl DelimiterSegmenter {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }
}

impl Default for DelimiterSegmenter {
    fn default() -> Self {
        Self::new(" ")
    }
}

impl Segmenter for DelimiterSegmenter {
    fn segment<'t>(&self, text: &'t str) -> Vec<&'t str> {
        if self.delimiter.is_empty() {
            return text.split_whitespace().collect();
        }
        text.split(self.delimiter.as_str()).collect()
    }
}

/// Splits on Unicode word boundaries (UAX #29)
///
/// Punctuation and whitespace never form words; contractions and decimal
/// numbers stay whole (`can't`, `3.14`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn segment<'t>(&self, text: &'t str) -> Vec<&'t str> {
        text.unicode_words().collect()
    }
}
