//! Site-Indexer: a depth-bounded crawler with a word-frequency index
//!
//! This crate fetches a starting web page, follows its hyperlinks up to a
//! bounded depth, and counts every word it finds across the fetched pages
//! using a configurable tokenizer pipeline.

pub mod config;
pub mod crawler;
pub mod index;
pub mod output;
pub mod state;
pub mod tokenizer;
pub mod url;

use thiserror::Error;

/// Main error type for Site-Indexer operations
#[derive(Debug, Error)]
pub enum IndexerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UrlError {
    #[error("Failed to parse URL '{url}': {reason}")]
    Parse { url: String, reason: String },

    #[error("Unsupported URL scheme in '{0}'")]
    InvalidScheme(String),

    #[error("Missing host in URL '{0}'")]
    MissingHost(String),

    #[error("URL '{0}' is not absolute")]
    NotAbsolute(String),
}

/// Result type alias for Site-Indexer operations
pub type Result<T> = std::result::Result<T, IndexerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Crawl, Crawler, Document, HttpFetcher, PageFetcher};
pub use index::{build_default_indexer, build_indexer, index_site, WordIndexer, DEFAULT_MAX_DEPTH};
pub use state::{CrawlState, PageState};
pub use tokenizer::Tokenizer;
pub use url::{is_valid_absolute_url, sanitize_href};
