use crate::data_fetcher::models::{Match, ScheduleEvent};
use crate::error::AppError;
use std::collections::HashSet;
use tracing::debug;

/// Keeps finished events and drops repeated identifiers, first copy wins.
///
/// Runs a single left-to-right pass over the combined yesterday/today list.
/// Unfinished events are skipped whatever they contain, and so are later copies
/// of an id already kept. A first finished copy that cannot become a [`Match`]
/// aborts the run with `AppError::MalformedEvent`.
pub fn filter_finished_matches(events: Vec<ScheduleEvent>) -> Result<Vec<Match>, AppError> {
    let mut seen = HashSet::new();
    let mut matches = Vec::new();

    for event in events {
        if !event.is_finished() {
            continue;
        }

        if let Some(id) = event.id
            && seen.contains(&id)
        {
            debug!("Skipping duplicate event {id}");
            continue;
        }

        let m = Match::try_from(event)?;
        seen.insert(m.id);
        matches.push(m);
    }

    Ok(matches)
}
