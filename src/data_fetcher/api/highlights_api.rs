//! Highlights endpoint access and link resolution for one event

use crate::config::Config;
use crate::data_fetcher::models::HighlightsResponse;
use crate::data_fetcher::processors::select_highlight_link;
use crate::error::AppError;
use reqwest::Client;

use super::fetch_utils::fetch;
use super::urls::build_highlights_url;

/// Outcome of looking up highlights for one match.
///
/// Only `Found` produces a feed entry. The other two drop the match; they are
/// kept apart so callers can count failures without changing what is dropped.
#[derive(Debug)]
pub enum HighlightLookup {
    /// Canonical watch link of the first qualifying candidate
    Found(String),
    /// No highlights at all, or none with a qualifying subtitle and video link
    NotAvailable,
    /// Request or parse failure
    Failed(AppError),
}

/// Fetches the highlights of `event_id` and resolves a watch link.
/// Never logs; failures are reported through [`HighlightLookup::Failed`].
pub async fn lookup_highlight(client: &Client, config: &Config, event_id: i64) -> HighlightLookup {
    let url = build_highlights_url(&config.highlights_domain, event_id);

    let response = match fetch::<HighlightsResponse>(client, &url).await {
        Ok(response) => response,
        Err(e) => return HighlightLookup::Failed(e),
    };

    match select_highlight_link(&response.highlights) {
        Some(link) => HighlightLookup::Found(link),
        None => HighlightLookup::NotAvailable,
    }
}
