//! Team name cleanup for display and featured-team classification

/// Cleans a team name for display.
///
/// Hyphens become spaces, a standalone "FC" token is dropped (any case) and
/// whitespace is trimmed and collapsed.
///
/// # Example
/// ```
/// use highlights_feed::data_fetcher::processors::clean_team_name;
///
/// assert_eq!(clean_team_name("FC Lowly United"), "Lowly United");
/// assert_eq!(clean_team_name("Paris Saint-Germain"), "Paris Saint Germain");
/// ```
pub fn clean_team_name(name: &str) -> String {
    name.replace('-', " ")
        .split_whitespace()
        .filter(|token| !token.eq_ignore_ascii_case("fc"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Comparison key: lower-case, hyphens as spaces, single spaces
pub fn normalize_for_comparison(name: &str) -> String {
    name.to_lowercase()
        .replace('-', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Set of featured team and nation names, stored as comparison keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedTeams {
    keys: Vec<String>,
}

impl FeaturedTeams {
    /// Builds the set from raw names such as "paris-saint-germain".
    /// Names that normalize to nothing are skipped.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keys: Vec<String> = Vec::new();
        for name in names {
            let key = normalize_for_comparison(name.as_ref());
            if !key.is_empty() && !keys.contains(&key) {
                keys.push(key);
            }
        }
        FeaturedTeams { keys }
    }

    /// True when the team name contains any featured key as a substring
    pub fn matches(&self, team_name: &str) -> bool {
        let name = normalize_for_comparison(team_name);
        self.keys.iter().any(|key| name.contains(key.as_str()))
    }

    /// A match is priority if either side is featured
    pub fn is_priority(&self, home_team: &str, away_team: &str) -> bool {
        self.matches(home_team) || self.matches(away_team)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Default for FeaturedTeams {
    fn default() -> Self {
        FeaturedTeams::new(crate::constants::DEFAULT_FEATURED_TEAMS)
    }
}
