//! Output module for crawl statistics and index reports
//!
//! This module handles:
//! - Counting fetch outcomes during a crawl
//! - Printing statistics for humans
//! - Serializing the final word index as a JSON report

mod report;
pub mod stats;

pub use report::{print_top_words, IndexReport};
pub use stats::{print_statistics, CrawlStatistics};

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
