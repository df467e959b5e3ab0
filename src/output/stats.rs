//! Crawl statistics
//!
//! Counters collected while a crawl runs, and a plain-text printer for them.

use crate::state::PageState;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrawlStatistics {
    /// Documents handed to the caller (including empty ones)
    pub documents: u64,

    /// Count of fetch attempts by outcome
    pub pages_by_state: BTreeMap<PageState, u64>,

    /// Raw links found on pages that still had depth budget
    pub links_found: u64,

    /// Links that could not be turned into a valid absolute URL
    pub invalid_links: u64,

    /// Links skipped because their URL was already visited
    pub revisits_skipped: u64,

    /// Whether the crawl stopped early on the page limit
    pub truncated: bool,
}

impl CrawlStatistics {
    /// Records the outcome of one fetch attempt
    pub fn record_page(&mut self, state: PageState) {
        *self.pages_by_state.entry(state).or_insert(0) += 1;
    }

    /// Total number of fetch attempts
    pub fn total_pages(&self) -> u64 {
        self.pages_by_state.values().sum()
    }

    /// Fetch attempts that ended in an error state
    pub fn error_count(&self) -> u64 {
        self.pages_by_state
            .iter()
            .filter(|(state, _)| state.is_error())
            .map(|(_, count)| count)
            .sum()
    }

    /// Percentage of fetch attempts that succeeded
    pub fn success_rate(&self) -> f64 {
        let total = self.total_pages();
        if total == 0 {
            return 0.0;
        }
        let processed = self
            .pages_by_state
            .get(&PageState::Processed)
            .copied()
            .unwrap_or(0);
        (processed as f64 / total as f64) * 100.0
    }
}

/// Prints statistics in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
/// * `out` - Where to write (the CLI passes stderr so stdout stays JSON)
pub fn print_statistics(stats: &CrawlStatistics, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "=== Crawl Statistics ===\n")?;

    writeln!(out, "Overview:")?;
    writeln!(out, "  Pages fetched: {}", stats.total_pages())?;
    writeln!(out, "  Documents indexed: {}", stats.documents)?;
    writeln!(out, "  Links found: {}", stats.links_found)?;
    writeln!(out, "  Invalid links skipped: {}", stats.invalid_links)?;
    writeln!(out, "  Revisits skipped: {}", stats.revisits_skipped)?;
    if stats.truncated {
        writeln!(out, "  Stopped early: page limit reached")?;
    }
    writeln!(out)?;

    writeln!(out, "Pages by State:")?;
    // Sort states by count (descending)
    let mut state_counts: Vec<_> = stats.pages_by_state.iter().collect();
    state_counts.sort_by(|a, b| b.1.cmp(a.1));

    let total = stats.total_pages();
    for (state, count) in state_counts {
        let percentage = if total > 0 {
            (*count as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        writeln!(out, "  {}: {} ({:.1}%)", state, count, percentage)?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "Success Rate: {:.1}% ({} errors)",
        stats.success_rate(),
        stats.error_count()
    )?;

    Ok(())
}
