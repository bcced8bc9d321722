//! Picks a usable video link out of the highlight candidates of one event

use crate::constants::{HIGHLIGHT_KEYWORDS, VIDEO_HOSTS};
use crate::data_fetcher::api::build_watch_url;
use crate::data_fetcher::models::HighlightCandidate;
use regex::Regex;
use std::sync::LazyLock;

// An 11 character identifier after `v=`, `vi/`, `embed/` or a bare `/`,
// not followed by another identifier character.
static VIDEO_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:v=|vi/|embed/|/)([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)")
        .expect("video id pattern is valid")
});

// Host part of an absolute URL, skipping any user info and port.
static HOST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://(?:[^/?#@]*@)?([^/?#:]+)")
        .expect("host pattern is valid")
});

/// True when the URL points at one of the known video hosts or a subdomain of one.
pub fn is_video_host(url: &str) -> bool {
    let Some(host) = HOST_PATTERN.captures(url).and_then(|caps| caps.get(1)) else {
        return false;
    };
    let host = host.as_str().to_lowercase();
    VIDEO_HOSTS.iter().any(|known| {
        host == *known
            || host
                .strip_suffix(known)
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}

/// Extracts the video identifier from a watch, short, embed or thumbnail URL.
///
/// # Example
/// ```
/// use highlights_feed::data_fetcher::processors::extract_video_id;
///
/// assert_eq!(extract_video_id("https://youtu.be/dQw4w9WgXcQ?t=5"), Some("dQw4w9WgXcQ"));
/// assert_eq!(extract_video_id("https://example.com/clip.mp4"), None);
/// assert_eq!(extract_video_id("https://vimeo.com/channels/staffpicks1"), None);
/// ```
pub fn extract_video_id(url: &str) -> Option<&str> {
    if !is_video_host(url) {
        return None;
    }
    VIDEO_ID_PATTERN
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str())
}

/// True when the subtitle mentions "highlights" or "extended", ignoring case
pub fn is_highlight_subtitle(subtitle: &str) -> bool {
    let subtitle = subtitle.to_lowercase();
    HIGHLIGHT_KEYWORDS
        .iter()
        .any(|keyword| subtitle.contains(keyword))
}

/// Video identifier of a candidate, if it is eligible and carries one.
/// `url` is tried before `sourceUrl`.
pub fn candidate_video_id(candidate: &HighlightCandidate) -> Option<&str> {
    let subtitle = candidate.subtitle.as_deref()?;
    if !is_highlight_subtitle(subtitle) {
        return None;
    }
    candidate.links().find_map(extract_video_id)
}

/// Canonical watch link of the first qualifying candidate, in response order.
/// Candidates after the first qualifying one are not examined.
pub fn select_highlight_link(candidates: &[HighlightCandidate]) -> Option<String> {
    candidates
        .iter()
        .find_map(candidate_video_id)
        .map(build_watch_url)
}
