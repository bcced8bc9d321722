//! Football highlights feed library
//!
//! This library fetches recently finished football matches, resolves a video
//! highlight for each one and writes a ranked JSON feed with featured teams
//! first.
//!
//! # Examples
//!
//! ```rust,no_run
//! use highlights_feed::{Config, run_highlights_job};
//! use highlights_feed::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let mut config = Config::load().await?;
//!     config.output_path = "public/highlights.json".to_string();
//!
//!     // Query yesterday and today (UTC), then write the feed
//!     let summary = run_highlights_job(&config, None).await?;
//!     println!("{} entries, {} priority", summary.total, summary.priority);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod feed_writer;
pub mod logging;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::{RunSummary, build_feed, run_highlights_job, run_pipeline};
pub use data_fetcher::models::{HighlightEntry, Match, ScheduleResponse};
pub use data_fetcher::processors::FeaturedTeams;
pub use error::AppError;
pub use feed_writer::write_feed;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
