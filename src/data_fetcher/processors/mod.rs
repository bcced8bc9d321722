pub mod entry_ids;
pub mod link_extraction;
pub mod match_filter;
pub mod ranking;
pub mod team_names;

pub use entry_ids::EntryIdGenerator;
pub use link_extraction::{
    candidate_video_id, extract_video_id, is_highlight_subtitle, is_video_host,
    select_highlight_link,
};
pub use match_filter::filter_finished_matches;
pub use ranking::{count_priority, rank_entries};
pub use team_names::{FeaturedTeams, clean_team_name, normalize_for_comparison};
