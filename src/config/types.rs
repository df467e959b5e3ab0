use serde::Deserialize;

/// Main configuration structure for Site-Indexer
///
/// Every section is optional; a missing section takes its defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub http: HttpConfig,
    pub tokenizer: TokenizerConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Number of hop levels to follow from the root page
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Maximum number of fetch attempts in one crawl
    #[serde(rename = "max-pages")]
    pub max_pages: Option<u32>,

    /// Overall time budget for one crawl (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: Option<u64>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_depth: 1,
            max_pages: None,
            timeout_secs: None,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: Option<String>,
}

impl UserAgentConfig {
    /// Formats the `User-Agent` header value
    ///
    /// Format: `CrawlerName/Version` or `CrawlerName/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        match &self.contact_url {
            Some(contact) => format!(
                "{}/{} (+{})",
                self.crawler_name, self.crawler_version, contact
            ),
            None => format!("{}/{}", self.crawler_name, self.crawler_version),
        }
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "site-indexer".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: None,
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Total time allowed for one request (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Time allowed to establish a connection (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// Maximum number of redirects followed per request
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
            max_redirects: 10,
        }
    }
}

/// How document text is split into raw words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segmentation {
    /// Split on the configured delimiter
    Delimiter,
    /// Split on Unicode word boundaries
    Unicode,
}

/// Languages supported by the stemming stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemLanguage {
    Danish,
    Dutch,
    English,
    Finnish,
    French,
    German,
    Italian,
    Norwegian,
    Portuguese,
    Romanian,
    Russian,
    Spanish,
    Swedish,
}

/// Tokenizer pipeline configuration
///
/// Word stages run in a fixed order: whitespace, punctuation, numeric
/// removal, lowercase, stem.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    pub segmentation: Segmentation,

    /// Delimiter used when `segmentation = "delimiter"`
    pub delimiter: String,

    /// Replace markup with whitespace before splitting
    #[serde(rename = "strip-markup")]
    pub strip_markup: bool,

    pub lowercase: bool,

    pub stem: bool,

    /// Stemmer language
    pub language: StemLanguage,

    #[serde(rename = "strip-whitespace")]
    pub strip_whitespace: bool,

    #[serde(rename = "strip-punctuation")]
    pub strip_punctuation: bool,

    /// Drop words that are numbers
    #[serde(rename = "remove-numeric")]
    pub remove_numeric: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            segmentation: Segmentation::Unicode,
            delimiter: " ".to_string(),
            strip_markup: true,
            lowercase: true,
            stem: true,
            language: StemLanguage::English,
            strip_whitespace: false,
            strip_punctuation: false,
            remove_numeric: false,
        }
    }
}
