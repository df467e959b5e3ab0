//! Text tokenization pipeline
//!
//! A [`Tokenizer`] runs three steps over each document:
//! 1. Document stages, folded in the order they were added
//! 2. Segmentation into raw words
//! 3. Word stages on every raw word, in order
//!
//! A word stage that returns an empty string drops the word, and the stages
//! after it are skipped for that word.

pub mod processors;
mod segment;

pub use processors::WordStemmer;
pub use segment::{DelimiterSegmenter, Segmenter, UnicodeSegmenter};

use crate::config::{Segmentation, StemLanguage, TokenizerConfig};
use std::fmt;

/// A single text transformation in the pipeline
pub type Stage = Box<dyn Fn(&str) -> String + Send + Sync>;

pub struct Tokenizer {
    document_stages: Vec<Stage>,
    word_stages: Vec<Stage>,
    segmenter: Box<dyn Segmenter>,
}

impl Tokenizer {
    /// Creates an empty pipeline that splits on single spaces
    pub fn new() -> Self {
        Self::with_segmenter(DelimiterSegmenter::default())
    }

    /// Creates an empty pipeline with the given segmentation strategy
    pub fn with_segmenter(segmenter: impl Segmenter + 'static) -> Self {
        Self {
            document_stages: Vec::new(),
            word_stages: Vec::new(),
            segmenter: Box::new(segmenter),
        }
    }

    pub fn add_document_stage<F>(&mut self, stage: F)
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.document_stages.push(Box::new(stage));
    }

    pub fn add_word_stage<F>(&mut self, stage: F)
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.word_stages.push(Box::new(stage));
    }

    pub fn with_document_stage<F>(mut self, stage: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.add_document_stage(stage);
        self
    }

    pub fn with_word_stage<F>(mut self, stage: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.add_word_stage(stage);
        self
    }

    /// The pipeline used when nothing is configured
    ///
    /// Markup is stripped, text is split on Unicode word boundaries, and each
    /// word is lowercased and reduced to its English stem.
    pub fn default_pipeline() -> Self {
        let stemmer = WordStemmer::new(StemLanguage::English);

        Self::with_segmenter(UnicodeSegmenter)
            .with_document_stage(processors::strip_markup)
            .with_word_stage(processors::to_lowercase)
            .with_word_stage(move |word: &str| stemmer.stem(word))
    }

    /// Builds a pipeline from the `[tokenizer]` configuration section
    ///
    /// Word stages run in a fixed order: whitespace, punctuation, numeric
    /// removal, lowercase, stem. Disabled ones are left out.
    pub fn from_config(config: &TokenizerConfig) -> Self {
        let mut tokenizer = match config.segmentation {
            Segmentation::Delimiter => {
                Self::with_segmenter(DelimiterSegmenter::new(config.delimiter.clone()))
            }
            Segmentation::Unicode => Self::with_segmenter(UnicodeSegmenter),
        };

        if config.strip_markup {
            tokenizer.add_document_stage(processors::strip_markup);
        }

        if config.strip_whitespace {
            tokenizer.add_word_stage(processors::strip_whitespace);
        }
        if config.strip_punctuation {
            tokenizer.add_word_stage(processors::strip_punctuation);
        }
        if config.remove_numeric {
            tokenizer.add_word_stage(processors::remove_numeric_values);
        }
        if config.lowercase {
            tokenizer.add_word_stage(processors::to_lowercase);
        }
        if config.stem {
            let stemmer = WordStemmer::new(config.language);
            tokenizer.add_word_stage(move |word: &str| stemmer.stem(word));
        }

        tokenizer
    }

    /// Turns a document into its sequence of processed words
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let document = self
            .document_stages
            .iter()
            .fold(text.to_string(), |acc, stage| stage(&acc));

        self.segmenter
            .segment(&document)
            .into_iter()
            .filter(|raw| !raw.is_empty())
            .filter_map(|raw| self.process_word(raw))
            .collect()
    }

    pub fn document_stage_count(&self) -> usize {
        self.document_stages.len()
    }

    pub fn word_stage_count(&self) -> usize {
        self.word_stages.len()
    }

    fn process_word(&self, raw: &str) -> Option<String> {
        let mut word = raw.to_string();
        for stage in &self.word_stages {
            word = stage(&word);
            if word.is_empty() {
                return None;
            }
        }
        Some(word)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("document_stages", &self.document_stages.len())
            .field("word_stages", &self.word_stages.len())
            .finish_non_exhaustive()
    }
}
