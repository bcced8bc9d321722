pub mod feed;
pub mod highlights;
pub mod schedule;

pub use feed::HighlightEntry;
pub use highlights::{HighlightCandidate, HighlightsResponse};
pub use schedule::{EventStatus, EventTeam, EventTournament, Match, ScheduleEvent, ScheduleResponse};
