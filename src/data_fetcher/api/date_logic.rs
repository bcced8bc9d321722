//! Date range computation for the schedule queries

use crate::error::AppError;
use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

/// The date a run treats as "today": the requested one, or the current UTC date.
pub fn resolve_run_date(requested: Option<NaiveDate>) -> NaiveDate {
    requested.unwrap_or_else(|| run_date_at(Utc::now()))
}

/// UTC calendar date of `now_utc`, with the clock injected for tests.
pub fn run_date_at(now_utc: DateTime<Utc>) -> NaiveDate {
    now_utc.date_naive()
}

/// Yesterday and today relative to a given "today", as `YYYY-MM-DD`.
///
/// Matches close to midnight may be filed under either date upstream, so both
/// are queried, yesterday first.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use highlights_feed::data_fetcher::api::fetch_dates_for;
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(fetch_dates_for(today), ["2024-02-29".to_string(), "2024-03-01".to_string()]);
/// ```
pub fn fetch_dates_for(today: NaiveDate) -> [String; 2] {
    // NaiveDate::MIN has no predecessor; a run can never be dated there.
    let yesterday = today.pred_opt().unwrap_or(today);
    let dates = [
        yesterday.format("%Y-%m-%d").to_string(),
        today.format("%Y-%m-%d").to_string(),
    ];
    info!("Fetching dates: {} and {}", dates[0], dates[1]);
    dates
}

/// Parses a `YYYY-MM-DD` date given on the command line.
pub fn parse_date_arg(date: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
        AppError::datetime_parse_error(format!("Invalid date '{date}', expected YYYY-MM-DD: {e}"))
    })
}
