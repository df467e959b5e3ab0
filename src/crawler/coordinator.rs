//! Crawler coordinator - depth-bounded traversal
//!
//! This module ties the fetcher, the link extractor and the URL sanitizer
//! into a lazy, depth-first sequence of documents:
//! - Claiming each URL in the visited set before it is fetched
//! - Treating non-2xx responses as empty pages
//! - Abandoning a branch on transport failure while its siblings carry on
//! - Following links until the depth budget is spent

use crate::crawler::fetcher::{FetchResult, PageFetcher};
use crate::crawler::parser::extract_links;
use crate::output::CrawlStatistics;
use crate::state::CrawlState;
use crate::url::{sanitize_href, validate_absolute};
use crate::UrlResult;

/// A fetched page, handed to the tokenizer and then dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// The URL the page was requested from
    pub url: String,

    /// Raw page text; empty when the server answered with an error status
    pub body: String,

    /// Remaining hop budget at this page
    pub depth: u32,
}

/// Entry point for crawls over a given fetcher
///
/// A `Crawler` holds no traversal state of its own: every call to
/// [`Crawler::crawl`] starts from an empty visited set.
pub struct Crawler<'a, F: PageFetcher + ?Sized> {
    fetcher: &'a F,
    max_pages: Option<u32>,
}

impl<'a, F: PageFetcher + ?Sized> Crawler<'a, F> {
    /// Creates a crawler that fetches pages through `fetcher`
    pub fn new(fetcher: &'a F) -> Self {
        Self {
            fetcher,
            max_pages: None,
        }
    }

    /// Caps the number of fetch attempts per crawl
    pub fn with_page_limit(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Starts a crawl from `root_url`
    ///
    /// The root URL is validated before any request is made. The returned
    /// [`Crawl`] performs no I/O until [`Crawl::next_document`] is awaited.
    ///
    /// # Arguments
    ///
    /// * `root_url` - Absolute `http(s)` URL of the first page
    /// * `max_depth` - Hop levels to follow; `0` fetches only the root
    ///
    /// # Returns
    ///
    /// * `Ok(Crawl)` - A fresh traversal
    /// * `Err(UrlError)` - `root_url` is not a valid absolute URL
    pub fn crawl(&self, root_url: &str, max_depth: u32) -> UrlResult<Crawl<'a, F>> {
        validate_absolute(root_url)?;

        tracing::info!("Starting crawl of {} (max depth {})", root_url, max_depth);

        Ok(Crawl {
            fetcher: self.fetcher,
            state: CrawlState::new(root_url, max_depth),
            stats: CrawlStatistics::default(),
            max_pages: self.max_pages,
        })
    }
}

/// One traversal in progress
///
/// Documents are produced one at a time, in depth-first order, and each
/// fetch happens only when the caller asks for the next document. Once
/// [`Crawl::next_document`] returns `None` the crawl is over for good; start
/// a new one from the [`Crawler`] to crawl again.
pub struct Crawl<'a, F: PageFetcher + ?Sized> {
    fetcher: &'a F,
    state: CrawlState,
    stats: CrawlStatistics,
    max_pages: Option<u32>,
}

impl<'a, F: PageFetcher + ?Sized> Crawl<'a, F> {
    /// Fetches and returns the next document, or `None` when the crawl is done
    ///
    /// # Processing Flow
    ///
    /// 1. Pop the next URL from the frontier; skip it if already visited
    /// 2. Claim it in the visited set, then fetch it
    /// 3. Non-2xx status → empty body; transport failure → skip the branch
    /// 4. If depth remains, sanitize the page's links and push the unvisited
    ///    ones with one less hop of budget
    /// 5. Return the document
    pub async fn next_document(&mut self) -> Option<Document> {
        while let Some(entry) = self.state.pop() {
            if self.state.is_visited(&entry.url) {
                self.stats.revisits_skipped += 1;
                continue;
            }

            if self.page_limit_reached() {
                tracing::info!(
                    "Page limit reached after {} fetches, {} URLs left unvisited",
                    self.state.fetch_attempts(),
                    self.state.frontier_size() + 1
                );
                self.stats.truncated = true;
                self.state.clear_frontier();
                return None;
            }

            self.state.claim(&entry.url);

            let result = self.fetcher.fetch(&entry.url).await;
            self.stats.record_page(result.state());

            let body = match result {
                FetchResult::Success { body, .. } => body,
                FetchResult::HttpError { status_code } => {
                    tracing::warn!(
                        "Failed to fetch page (url: {}, status: {})",
                        entry.url,
                        status_code
                    );
                    String::new()
                }
                FetchResult::NetworkError { error, state } => {
                    tracing::warn!(
                        "Skipping {} and its links ({}): {}",
                        entry.url,
                        state,
                        error
                    );
                    continue;
                }
            };

            if entry.depth > 0 {
                self.enqueue_links(&entry.url, &body, entry.depth - 1);
            }

            self.stats.documents += 1;
            return Some(Document {
                url: entry.url,
                body,
                depth: entry.depth,
            });
        }

        None
    }

    /// Running statistics for this crawl
    pub fn stats(&self) -> &CrawlStatistics {
        &self.stats
    }

    /// Consumes the crawl, returning its statistics
    pub fn into_stats(self) -> CrawlStatistics {
        self.stats
    }

    /// Number of URLs claimed so far
    pub fn visited_count(&self) -> usize {
        self.state.visited_count()
    }

    fn page_limit_reached(&self) -> bool {
        self.max_pages
            .map(|max| self.state.fetch_attempts() >= max)
            .unwrap_or(false)
    }

    /// Sanitizes the links of one page and pushes the unvisited ones
    ///
    /// Links are pushed in reverse sorted order so that the first one in
    /// sorted order is fetched next.
    fn enqueue_links(&mut self, page_url: &str, body: &str, depth: u32) {
        let mut links: Vec<String> = extract_links(body).into_iter().collect();
        links.sort();
        self.stats.links_found += links.len() as u64;

        for link in links.into_iter().rev() {
            let url = match sanitize_href(page_url, &link) {
                Ok(url) => url,
                Err(e) => {
                    tracing::debug!("Failed to sanitize URL (skipping {}): {}", link, e);
                    self.stats.invalid_links += 1;
                    continue;
                }
            };

            if self.state.is_visited(&url) {
                self.stats.revisits_skipped += 1;
                continue;
            }

            self.state.push(url, depth);
        }
    }
}
