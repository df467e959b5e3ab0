//! Word frequency index

use crate::tokenizer::Tokenizer;
use std::collections::HashMap;

/// Accumulates word counts across every document it is given
///
/// Counts only ever grow: indexing more text adds to existing entries and
/// never removes or lowers one.
#[derive(Debug)]
pub struct WordIndexer {
    tokenizer: Tokenizer,
    words: HashMap<String, u64>,
    total_tokens: u64,
    documents: u64,
}

impl WordIndexer {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
            words: HashMap::new(),
            total_tokens: 0,
            documents: 0,
        }
    }

    /// Tokenizes `text` and adds each resulting word to the index
    ///
    /// Returns the number of tokens added. Empty text still counts as an
    /// indexed document.
    pub fn index_text(&mut self, text: &str) -> usize {
        let tokens = self.tokenizer.tokenize(text);
        let added = tokens.len();

        for token in tokens {
            *self.words.entry(token).or_insert(0) += 1;
        }

        self.total_tokens += added as u64;
        self.documents += 1;
        added
    }

    /// Occurrences of `word` so far, 0 if it has never been seen
    pub fn count(&self, word: &str) -> u64 {
        self.words.get(word).copied().unwrap_or(0)
    }

    /// A snapshot of the index
    ///
    /// The returned map is independent: later indexing does not change it,
    /// and changing it does not affect the indexer.
    pub fn index(&self) -> HashMap<String, u64> {
        self.words.clone()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    pub fn documents_indexed(&self) -> u64 {
        self.documents
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }
}
