//! Application-wide constants and default configuration values
//!
//! This module centralizes the upstream endpoints, the featured team list,
//! and the other defaults the configuration layer falls back to.

/// Default base URL of the sports-data API
pub const DEFAULT_API_DOMAIN: &str = "https://api.sofascore.com/api/v1";

/// Default location of the written feed, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "../api/highlights.json";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 15;

/// Default cap on feed length. Zero disables the cap.
pub const DEFAULT_MAX_ENTRIES: usize = 200;

/// Browser-like identification sent with every upstream request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Category used when an event has no tournament name
pub const DEFAULT_CATEGORY: &str = "Football";

/// Canonical watch page a resolved video identifier is embedded into
pub const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// Hosts whose links carry a video identifier, matched with their subdomains
pub const VIDEO_HOSTS: &[&str] = &["youtube.com", "youtu.be", "youtube-nocookie.com", "ytimg.com"];

/// Length of a video identifier
pub const VIDEO_ID_LEN: usize = 11;

/// Name of the log file inside the log directory
pub const LOG_FILE_NAME: &str = "highlights_feed.log";

/// Teams and nations whose matches are ranked first
pub const DEFAULT_FEATURED_TEAMS: &[&str] = &[
    "al-nassr",
    "inter miami cf",
    "fc-bayern-munchen",
    "dortmund",
    "leverkusen",
    "paris-saint-germain",
    "juventus",
    "atletico-madrid",
    "barcelona",
    "real madrid",
    "arsenal",
    "chelsea",
    "manchester city",
    "manchester united",
    "liverpool",
    "portugal",
    "argentina",
    "brazil",
    "spain",
    "england",
    "france",
    "inter",
    "milan",
    "roma",
];

/// Match statuses that count as finished
pub const FINISHED_STATUSES: &[&str] = &["finished", "ended"];

/// Subtitle keywords that mark a highlight candidate as eligible
pub const HIGHLIGHT_KEYWORDS: &[&str] = &["highlights", "extended"];

/// Environment variable names
pub mod env_vars {
    /// Override for the schedule API base URL
    pub const API_DOMAIN: &str = "HIGHLIGHTS_API_DOMAIN";

    /// Override for the highlights API base URL
    pub const HIGHLIGHTS_DOMAIN: &str = "HIGHLIGHTS_HIGHLIGHTS_DOMAIN";

    /// Override for the feed output path
    pub const OUTPUT_PATH: &str = "HIGHLIGHTS_OUTPUT_PATH";

    /// Override for the log file path
    pub const LOG_FILE: &str = "HIGHLIGHTS_LOG_FILE";

    /// Override for the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "HIGHLIGHTS_HTTP_TIMEOUT";
}
