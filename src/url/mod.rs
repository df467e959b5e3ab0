//! URL handling module for Site-Indexer
//!
//! This module turns raw `href` values found on a page into absolute,
//! validated URLs that the crawler can fetch.
//!
//! URLs are deliberately not canonicalized: `http://example.com` and
//! `http://example.com/` are two different URLs to the crawler, and so are
//! URLs that differ only in their query string.

mod sanitize;

pub use sanitize::{is_valid_absolute_url, sanitize_href, validate_absolute};
