//! Schedule endpoint access, one date at a time

use crate::config::Config;
use crate::data_fetcher::models::{ScheduleEvent, ScheduleResponse};
use reqwest::Client;
use tracing::{info, instrument, warn};

use super::fetch_utils::fetch;
use super::urls::build_schedule_url;

/// Fetches all football events scheduled on `date`.
///
/// Any transport, status or parse failure is logged and yields an empty list,
/// so one bad date never aborts the run.
#[instrument(skip(client, config))]
pub async fn fetch_events_for_date(
    client: &Client,
    config: &Config,
    date: &str,
) -> Vec<ScheduleEvent> {
    let url = build_schedule_url(&config.api_domain, date);

    match fetch::<ScheduleResponse>(client, &url).await {
        Ok(response) => {
            info!("Fetched {} events for {date}", response.events.len());
            response.events
        }
        Err(e) if e.is_not_found() => {
            info!("No schedule available for {date}: {e}");
            Vec::new()
        }
        Err(e) => {
            warn!("Failed to fetch schedule for {date}: {e}");
            Vec::new()
        }
    }
}

/// Fetches every date in order and concatenates the events.
pub async fn fetch_events_for_dates(
    client: &Client,
    config: &Config,
    dates: &[String],
) -> Vec<ScheduleEvent> {
    let mut events = Vec::new();
    for date in dates {
        events.extend(fetch_events_for_date(client, config, date).await);
    }
    events
}
