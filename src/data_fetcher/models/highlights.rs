use serde::Deserialize;

/// One highlight the upstream offers for an event
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct HighlightCandidate {
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "sourceUrl", default)]
    pub source_url: Option<String>,
}

impl HighlightCandidate {
    /// Links to inspect, `url` first, skipping empty values
    pub fn links(&self) -> impl Iterator<Item = &str> {
        [self.url.as_deref(), self.source_url.as_deref()]
            .into_iter()
            .flatten()
            .filter(|link| !link.is_empty())
    }
}

/// Highlights endpoint response. A missing `highlights` key means none.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct HighlightsResponse {
    #[serde(default)]
    pub highlights: Vec<HighlightCandidate>,
}
