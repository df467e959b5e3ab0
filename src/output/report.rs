//! Index report written at the end of a crawl
//!
//! The crate itself never serializes the word index; this report is how the
//! command-line front end hands it to the outside world as JSON.

use crate::index::WordIndexer;
use crate::output::{CrawlStatistics, OutputResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Everything known about one crawl-and-index run
#[derive(Debug, Clone, Serialize)]
pub struct IndexReport {
    pub root_url: String,
    pub max_depth: u32,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub duration_ms: u64,

    /// The crawl was cut short by the overall time budget
    pub timed_out: bool,

    pub unique_words: usize,
    pub total_tokens: u64,
    pub stats: CrawlStatistics,

    /// Word → count, sorted by word for stable output
    pub words: BTreeMap<String, u64>,
}

impl IndexReport {
    /// Builds a report from a finished crawl, stamping the finish time now
    pub fn new(
        root_url: &str,
        max_depth: u32,
        started_at: DateTime<Utc>,
        stats: CrawlStatistics,
        indexer: &WordIndexer,
    ) -> Self {
        let finished_at = Utc::now();
        let duration_ms = (finished_at - started_at).num_milliseconds().max(0) as u64;
        let words: BTreeMap<String, u64> = indexer.index().into_iter().collect();

        Self {
            root_url: root_url.to_string(),
            max_depth,
            started_at,
            finished_at,
            duration_ms,
            timed_out: false,
            unique_words: words.len(),
            total_tokens: indexer.total_tokens(),
            stats,
            words,
        }
    }

    /// Marks the report as produced from a crawl that ran out of time
    pub fn with_timeout(mut self, timed_out: bool) -> Self {
        self.timed_out = timed_out;
        self
    }

    /// The `n` most frequent words, ties broken alphabetically
    pub fn top_words(&self, n: usize) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self
            .words
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }

    /// Writes the report as JSON
    pub fn write_json(&self, out: &mut dyn Write, pretty: bool) -> OutputResult<()> {
        if pretty {
            serde_json::to_writer_pretty(&mut *out, self)?;
        } else {
            serde_json::to_writer(&mut *out, self)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

/// Prints a ranked word table
pub fn print_top_words(words: &[(&str, u64)], out: &mut dyn Write) -> io::Result<()> {
    let width = words.iter().map(|(word, _)| word.len()).max().unwrap_or(4).max(4);

    writeln!(out, "{:<width$}  COUNT", "WORD", width = width)?;
    for (word, count) in words {
        writeln!(out, "{:<width$}  {}", word, count, width = width)?;
    }
    Ok(())
}
