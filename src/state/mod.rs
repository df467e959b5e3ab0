//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `PageState`: Outcome of a single fetch attempt (processed, HTTP error, unreachable, failed)
//! - `CrawlState`: Visited set and frontier owned by one crawl

mod crawl_state;
mod page_state;

// Re-export main types
pub use crawl_state::{CrawlState, FrontierEntry};
pub use page_state::PageState;
