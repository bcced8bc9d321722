//! URL building utilities for API endpoints

use crate::constants::WATCH_URL_PREFIX;

/// Builds the schedule URL listing all football events of one date.
///
/// # Example
/// ```
/// use highlights_feed::data_fetcher::api::build_schedule_url;
///
/// let url = build_schedule_url("https://api.example.com", "2024-10-18");
/// assert_eq!(url, "https://api.example.com/sport/football/scheduled-events/2024-10-18");
/// ```
pub fn build_schedule_url(api_domain: &str, date: &str) -> String {
    format!(
        "{}/sport/football/scheduled-events/{date}",
        api_domain.trim_end_matches('/')
    )
}

/// Builds the highlights URL of one event.
///
/// # Example
/// ```
/// use highlights_feed::data_fetcher::api::build_highlights_url;
///
/// let url = build_highlights_url("https://api.example.com/", 11352451);
/// assert_eq!(url, "https://api.example.com/event/11352451/highlights");
/// ```
pub fn build_highlights_url(highlights_domain: &str, event_id: i64) -> String {
    format!(
        "{}/event/{event_id}/highlights",
        highlights_domain.trim_end_matches('/')
    )
}

/// Embeds a video identifier into the canonical watch page URL.
///
/// # Example
/// ```
/// use highlights_feed::data_fetcher::api::build_watch_url;
///
/// assert_eq!(build_watch_url("dQw4w9WgXcQ"), "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
/// ```
pub fn build_watch_url(video_id: &str) -> String {
    format!("{WATCH_URL_PREFIX}{video_id}")
}
