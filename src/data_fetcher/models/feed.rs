use serde::{Deserialize, Serialize};

/// One record of the written feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HighlightEntry {
    pub id: String,
    pub team1: String,
    pub team2: String,
    pub category: String,
    pub date: String,
    pub link: String,
    pub is_priority: bool,
}
