use std::collections::HashSet;

/// A URL waiting on the frontier together with its remaining depth budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    pub url: String,

    /// Number of hop levels the crawler may still follow from this page
    pub depth: u32,
}

/// Tracks the state of a single crawl
///
/// Holds the visited set and the frontier stack for one traversal. A fresh
/// `CrawlState` is created for each crawl and never shared between crawls.
///
/// The frontier is a LIFO stack: entries pushed last are fetched first,
/// which gives the same depth-first order as a recursive traversal without
/// depending on the call stack.
#[derive(Debug, Clone, Default)]
pub struct CrawlState {
    visited: HashSet<String>,
    frontier: Vec<FrontierEntry>,
    fetch_attempts: u32,
}

impl CrawlState {
    /// Creates a crawl state seeded with the root URL
    pub fn new(root_url: impl Into<String>, max_depth: u32) -> Self {
        Self {
            visited: HashSet::new(),
            frontier: vec![FrontierEntry {
                url: root_url.into(),
                depth: max_depth,
            }],
            fetch_attempts: 0,
        }
    }

    /// Claims a URL for fetching
    ///
    /// Returns `true` the first time a URL is claimed and `false` on every
    /// later call. The URL is recorded before it is fetched so that a failed
    /// fetch is never retried within the same crawl.
    pub fn claim(&mut self, url: &str) -> bool {
        if self.visited.contains(url) {
            return false;
        }
        self.visited.insert(url.to_string());
        self.fetch_attempts += 1;
        true
    }

    /// Returns true if the URL has already been claimed
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Pushes a URL onto the frontier
    pub fn push(&mut self, url: String, depth: u32) {
        self.frontier.push(FrontierEntry { url, depth });
    }

    /// Pops the next URL to consider
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.frontier.pop()
    }

    /// Drops everything still waiting on the frontier
    pub fn clear_frontier(&mut self) {
        self.frontier.clear();
    }

    pub fn frontier_size(&self) -> usize {
        self.frontier.len()
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of URLs claimed so far
    pub fn fetch_attempts(&self) -> u32 {
        self.fetch_attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_seeds_root() {
        let mut state = CrawlState::new("https://example.com/", 2);
        assert_eq!(state.frontier_size(), 1);
        assert_eq!(state.visited_count(), 0);

        let entry = state.pop().unwrap();
        assert_eq!(entry.url, "https://example.com/");
        assert_eq!(entry.depth, 2);
        assert!(state.pop().is_none());
    }

    #[test]
    fn test_claim_only_once() {
        let mut state = CrawlState::default();
        assert!(state.claim("https://example.com/a"));
        assert!(!state.claim("https://example.com/a"));
        assert!(state.is_visited("https://example.com/a"));
        assert_eq!(state.fetch_attempts(), 1);
    }

    #[test]
    fn test_trailing_slash_is_distinct() {
        let mut state = CrawlState::default();
        assert!(state.claim("https://example.com"));
        assert!(state.claim("https://example.com/"));
        assert_eq!(state.visited_count(), 2);
    }

    #[test]
    fn test_frontier_is_lifo() {
        let mut state = CrawlState::default();
        state.push("https://example.com/a".to_string(), 1);
        state.push("https://example.com/b".to_string(), 0);

        assert_eq!(state.pop().unwrap().url, "https://example.com/b");
        assert_eq!(state.pop().unwrap().url, "https://example.com/a");
    }

    #[test]
    fn test_clear_frontier_keeps_visited() {
        let mut state = CrawlState::new("https://example.com/", 1);
        state.claim("https://example.com/");
        state.push("https://example.com/a".to_string(), 0);

        state.clear_frontier();
        assert_eq!(state.frontier_size(), 0);
        assert!(state.is_visited("https://example.com/"));
    }
}
