use serde::Deserialize;

/// Fixed browser profile sent with every request; the origin varies its
/// responses by client fingerprint.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.1; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/71.0.3573.0 Safari/537.36";

pub const DEFAULT_SEARCH_URL: &str = "https://www.douban.com/search";
pub const DEFAULT_BOOK_CATEGORY: &str = "1001";
pub const DEFAULT_MOVIE_CATEGORY: &str = "1002";

/// Main configuration structure for a Provider instance
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub http: HttpConfig,
    pub search: SearchConfig,
    pub cache: CacheConfig,
}

/// Outbound request profile
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Total per-request timeout (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: 10,
            connect_timeout_secs: 5,
        }
    }
}

/// Search endpoint and fan-out limits
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Catalog search endpoint
    #[serde(rename = "search-url")]
    pub search_url: String,

    /// `cat` parameter selecting the book catalog
    #[serde(rename = "book-category")]
    pub book_category: String,

    /// `cat` parameter selecting the movie catalog
    #[serde(rename = "movie-category")]
    pub movie_category: String,

    /// Maximum number of candidates taken from one results page
    #[serde(rename = "max-candidates")]
    pub max_candidates: usize,

    /// Size of the worker pool that loads candidates
    pub workers: usize,

    /// Order in which loaded records are returned
    #[serde(rename = "result-order")]
    pub result_order: ResultOrder,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            book_category: DEFAULT_BOOK_CATEGORY.to_string(),
            movie_category: DEFAULT_MOVIE_CATEGORY.to_string(),
            max_candidates: 5,
            workers: 10,
            result_order: ResultOrder::Completion,
        }
    }
}

/// Ordering of records returned by a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultOrder {
    /// Records in the order their loads finished
    #[default]
    Completion,
    /// Records in the order their candidates appeared on the results page
    Rank,
}

/// Record cache and politeness settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of cached records
    pub capacity: usize,

    /// Upper bound of the random pause before each detail fetch (milliseconds)
    #[serde(rename = "politeness-delay-ms")]
    pub politeness_delay_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 500,
            politeness_delay_ms: 100,
        }
    }
}
