//! Page state definitions for tracking fetch outcomes
//!
//! Every URL the crawler claims ends up in exactly one of these states.
use serde::Serialize;
use std::fmt;

/// Represents the outcome of fetching one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageState {
    // ===== Success =====
    /// Page was fetched with a 2xx status and handed to the indexer
    Processed,

    // ===== Soft failure =====
    /// Page returned a non-2xx status; indexed as an empty document
    HttpError,

    // ===== Branch-aborting failures =====
    /// Page could not be reached (timeout, DNS failure, connection refused)
    Unreachable,

    /// Page fetch failed for other transport reasons (TLS, body decoding, etc.)
    Failed,
}

impl PageState {
    /// Returns true if the page body was fetched successfully
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Processed)
    }

    /// Returns true if a document is still produced for this page
    ///
    /// HTTP errors yield an empty document so the crawl continues as if
    /// the page were blank.
    pub fn yields_document(&self) -> bool {
        matches!(self, Self::Processed | Self::HttpError)
    }

    /// Returns true if this represents an error state
    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// Returns the snake_case name used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Processed => "processed",
            Self::HttpError => "http_error",
            Self::Unreachable => "unreachable",
            Self::Failed => "failed",
        }
    }

    /// Parses a page state from its report name
    ///
    /// Returns None if the string doesn't match any known state.
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "processed" => Some(Self::Processed),
            "http_error" => Some(Self::HttpError),
            "unreachable" => Some(Self::Unreachable),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    /// Returns all possible page states
    pub fn all_states() -> Vec<Self> {
        vec![
            Self::Processed,
            Self::HttpError,
            Self::Unreachable,
            Self::Failed,
        ]
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
