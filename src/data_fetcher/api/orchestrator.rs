// src/data_fetcher/api/orchestrator.rs - Runs one highlights job from dates to written feed

use crate::config::Config;
use crate::data_fetcher::models::{HighlightEntry, Match};
use crate::data_fetcher::processors::{
    EntryIdGenerator, FeaturedTeams, clean_team_name, count_priority, filter_finished_matches,
    rank_entries,
};
use crate::error::AppError;
use crate::feed_writer::write_feed;
use chrono::NaiveDate;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use super::date_logic::{fetch_dates_for, resolve_run_date};
use super::highlights_api::{HighlightLookup, lookup_highlight};
use super::http_client::create_http_client;
use super::schedule_api::fetch_events_for_dates;

/// Counts reported to the operator at the end of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Entries in the written feed
    pub total: usize,
    /// Priority entries in the written feed
    pub priority: usize,
    /// Unique finished matches considered
    pub finished_matches: usize,
    /// Matches without a qualifying highlight
    pub dropped_without_highlights: usize,
    /// Matches whose highlight lookup failed
    pub highlight_failures: usize,
}

/// Builds the ranked feed without writing it.
///
/// Steps, strictly sequential:
/// - query yesterday and today relative to `today`
/// - keep unique finished matches (a malformed finished event is fatal)
/// - look up one highlight per match, dropping matches without a usable link
/// - rank priority-first and apply the configured cap
#[instrument(skip(client, config))]
pub async fn build_feed(
    client: &Client,
    config: &Config,
    today: NaiveDate,
) -> Result<(Vec<HighlightEntry>, RunSummary), AppError> {
    let dates = fetch_dates_for(today);
    let events = fetch_events_for_dates(client, config, &dates).await;
    let matches = filter_finished_matches(events)?;
    info!("Found {} finished matches", matches.len());

    let featured = FeaturedTeams::new(&config.featured_teams);
    if featured.is_empty() {
        warn!("No featured teams configured, every entry will be standard");
    } else {
        debug!("Classifying against {} featured teams", featured.len());
    }
    let mut ids = EntryIdGenerator::new();
    let mut summary = RunSummary {
        finished_matches: matches.len(),
        ..RunSummary::default()
    };
    let mut entries = Vec::with_capacity(matches.len());

    for m in matches {
        match lookup_highlight(client, config, m.id).await {
            HighlightLookup::Found(link) => {
                entries.push(build_entry(&m, link, &featured, &mut ids));
            }
            HighlightLookup::NotAvailable => {
                debug!("No usable highlight for event {}", m.id);
                summary.dropped_without_highlights += 1;
            }
            HighlightLookup::Failed(_) => summary.highlight_failures += 1,
        }
    }

    let ranked = rank_entries(entries, config.max_entries);
    summary.total = ranked.len();
    summary.priority = count_priority(&ranked);
    Ok((ranked, summary))
}

/// Builds the feed and writes it to `config.output_path`.
/// Nothing is written if building fails.
pub async fn run_pipeline(
    client: &Client,
    config: &Config,
    today: NaiveDate,
) -> Result<RunSummary, AppError> {
    let (entries, summary) = build_feed(client, config, today).await?;
    write_feed(&config.output_path, &entries).await?;
    info!(
        "Wrote {} highlights ({} priority) to {}",
        summary.total, summary.priority, config.output_path
    );
    Ok(summary)
}

/// Main entry point: creates the HTTP client and runs the job for `today`,
/// or for the current UTC date when not given.
///
/// # Example
/// ```rust,no_run
/// use highlights_feed::{Config, run_highlights_job};
///
/// #[tokio::main]
/// async fn main() -> Result<(), highlights_feed::AppError> {
///     let config = Config::load().await?;
///     let summary = run_highlights_job(&config, None).await?;
///     println!("{} entries", summary.total);
///     Ok(())
/// }
/// ```
pub async fn run_highlights_job(
    config: &Config,
    today: Option<NaiveDate>,
) -> Result<RunSummary, AppError> {
    let client = create_http_client(config)?;
    let today = resolve_run_date(today);
    info!("Starting highlights run for {today}");
    run_pipeline(&client, config, today).await
}

fn build_entry(
    m: &Match,
    link: String,
    featured: &FeaturedTeams,
    ids: &mut EntryIdGenerator,
) -> HighlightEntry {
    HighlightEntry {
        id: ids.next_id(),
        team1: clean_team_name(&m.home_team),
        team2: clean_team_name(&m.away_team),
        category: m.tournament.clone(),
        date: m.kickoff_date(),
        link,
        is_priority: featured.is_priority(&m.home_team, &m.away_team),
    }
}
