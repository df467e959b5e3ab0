//! Site indexing
//!
//! Glues the crawler to the word indexer: every document the crawl yields is
//! tokenized and counted before the next page is fetched.

mod word_indexer;

pub use word_indexer::WordIndexer;

use crate::config::TokenizerConfig;
use crate::crawler::{Crawler, PageFetcher};
use crate::tokenizer::Tokenizer;
use crate::Result;
use std::collections::HashMap;

/// Hop levels followed when the caller does not choose one
pub const DEFAULT_MAX_DEPTH: u32 = 1;

/// An indexer using the default tokenizer pipeline
pub fn build_default_indexer() -> WordIndexer {
    WordIndexer::new(Tokenizer::default_pipeline())
}

/// An indexer using the pipeline described by `config`
pub fn build_indexer(config: &TokenizerConfig) -> WordIndexer {
    WordIndexer::new(Tokenizer::from_config(config))
}

/// Crawls from `root_url` and indexes every page found
///
/// Returns a copy of the indexer's contents once the crawl is exhausted.
/// Counts already in `indexer` are kept and added to.
///
/// # Errors
///
/// Fails with [`IndexerError::InvalidUrl`](crate::IndexerError::InvalidUrl)
/// before any request is made if `root_url` is not a valid absolute
/// `http(s)` URL. Failures on individual pages never fail the call.
///
/// # Example
///
/// ```no_run
/// use site_indexer::{build_default_indexer, index_site, Config, HttpFetcher, DEFAULT_MAX_DEPTH};
///
/// # async fn run() -> site_indexer::Result<()> {
/// let fetcher = HttpFetcher::new(&Config::default())?;
/// let mut indexer = build_default_indexer();
/// let words = index_site(&fetcher, "https://example.com/", &mut indexer, DEFAULT_MAX_DEPTH).await?;
/// println!("{} distinct words", words.len());
/// # Ok(())
/// # }
/// ```
pub async fn index_site<F: PageFetcher + ?Sized>(
    fetcher: &F,
    root_url: &str,
    indexer: &mut WordIndexer,
    max_depth: u32,
) -> Result<HashMap<String, u64>> {
    let mut crawl = Crawler::new(fetcher).crawl(root_url, max_depth)?;

    while let Some(document) = crawl.next_document().await {
        let added = indexer.index_text(&document.body);
        tracing::debug!("Indexed {} ({} tokens)", document.url, added);
    }

    tracing::info!(
        "Indexed {} pages, {} distinct words",
        crawl.stats().documents,
        indexer.len()
    );

    Ok(indexer.index())
}
