pub mod date_logic;
mod fetch_utils;
pub mod highlights_api;
pub mod http_client;
pub mod orchestrator;
pub mod schedule_api;
pub mod urls;

// Re-export URL utilities
pub use urls::*;
pub use date_logic::{fetch_dates_for, parse_date_arg, resolve_run_date, run_date_at};
pub use highlights_api::{HighlightLookup, lookup_highlight};
pub use http_client::create_http_client;
pub use orchestrator::{RunSummary, build_feed, run_highlights_job, run_pipeline};
pub use schedule_api::{fetch_events_for_date, fetch_events_for_dates};
