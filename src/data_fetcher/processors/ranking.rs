use crate::data_fetcher::models::HighlightEntry;

/// Orders entries priority-first, keeping discovery order inside each group,
/// then applies the optional cap (`0` keeps everything).
pub fn rank_entries(entries: Vec<HighlightEntry>, max_entries: usize) -> Vec<HighlightEntry> {
    let (mut ranked, standard): (Vec<_>, Vec<_>) =
        entries.into_iter().partition(|entry| entry.is_priority);
    ranked.extend(standard);

    if max_entries > 0 {
        ranked.truncate(max_entries);
    }
    ranked
}

/// Number of priority entries in a list
pub fn count_priority(entries: &[HighlightEntry]) -> usize {
    entries.iter().filter(|entry| entry.is_priority).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, is_priority: bool) -> HighlightEntry {
        HighlightEntry {
            id: id.to_string(),
            team1: format!("{id} home"),
            team2: format!("{id} away"),
            category: "League".to_string(),
            date: "2024-10-18".to_string(),
            link: format!("https://www.youtube.com/watch?v={id}"),
            is_priority,
        }
    }

    fn ids(entries: &[HighlightEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_priority_first_stable_within_groups() {
        let entries = vec![
            entry("s1", false),
            entry("p1", true),
            entry("s2", false),
            entry("p2", true),
            entry("s3", false),
        ];

        let ranked = rank_entries(entries, 0);
        assert_eq!(ids(&ranked), vec!["p1", "p2", "s1", "s2", "s3"]);
        assert_eq!(count_priority(&ranked), 2);
    }

    #[test]
    fn test_no_secondary_sort_by_date() {
        let mut older = entry("old", true);
        older.date = "2024-10-17".to_string();
        let newer = entry("new", true);

        let ranked = rank_entries(vec![older, newer], 0);
        assert_eq!(ids(&ranked), vec!["old", "new"]);
    }

    #[test]
    fn test_cap_applies_after_ranking() {
        let entries = vec![
            entry("s1", false),
            entry("s2", false),
            entry("p1", true),
        ];

        let ranked = rank_entries(entries, 2);
        assert_eq!(ids(&ranked), vec!["p1", "s1"]);
    }

    #[test]
    fn test_cap_larger_than_list() {
        let ranked = rank_entries(vec![entry("a", false)], 200);
        assert_eq!(ranked.len(), 1);
        assert!(rank_entries(Vec::new(), 5).is_empty());
    }
}
