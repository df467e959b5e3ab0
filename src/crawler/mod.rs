//! Crawler module for web page fetching and traversal
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the `PageFetcher` trait
//! - HTML parsing for link and text extraction
//! - The depth-bounded, cycle-avoiding traversal

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::{Crawl, Crawler, Document};
pub use fetcher::{build_http_client, fetch_url, FetchResult, HttpFetcher, PageFetcher};
pub use parser::{extract_links, extract_text};
