pub mod api;
pub mod models;
pub mod processors;

pub use api::{RunSummary, run_highlights_job, run_pipeline};
pub use models::{HighlightEntry, Match, ScheduleEvent};
