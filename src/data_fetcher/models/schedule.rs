use crate::constants::{DEFAULT_CATEGORY, FINISHED_STATUSES};
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct EventStatus {
    #[serde(rename = "type", default)]
    pub status_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct EventTeam {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct EventTournament {
    #[serde(default)]
    pub name: Option<String>,
}

/// One entry of the `events` array. Every field is optional so one odd event
/// never fails the parse of a whole day; `Match::try_from` enforces what the
/// feed needs.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct ScheduleEvent {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub status: Option<EventStatus>,
    #[serde(rename = "homeTeam", default)]
    pub home_team: Option<EventTeam>,
    #[serde(rename = "awayTeam", default)]
    pub away_team: Option<EventTeam>,
    #[serde(default)]
    pub tournament: Option<EventTournament>,
    #[serde(rename = "startTimestamp", default)]
    pub start_timestamp: Option<i64>,
}

impl ScheduleEvent {
    /// Raw `status.type` value, if present
    pub fn status_type(&self) -> Option<&str> {
        self.status.as_ref()?.status_type.as_deref()
    }

    /// True when the status is "finished" or "ended", ignoring case
    pub fn is_finished(&self) -> bool {
        self.status_type().is_some_and(|status| {
            let status = status.to_lowercase();
            FINISHED_STATUSES.contains(&status.as_str())
        })
    }

    fn home_team_name(&self) -> Option<&str> {
        self.home_team.as_ref()?.name.as_deref()
    }

    fn away_team_name(&self) -> Option<&str> {
        self.away_team.as_ref()?.name.as_deref()
    }

    fn tournament_name(&self) -> Option<&str> {
        self.tournament.as_ref()?.name.as_deref()
    }
}

/// Schedule endpoint response. A missing `events` key means an empty day.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub events: Vec<ScheduleEvent>,
}

/// A finished match with every field the feed needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: i64,
    pub home_team: String,
    pub away_team: String,
    pub tournament: String,
    pub kickoff: DateTime<Utc>,
}

impl Match {
    /// Kickoff date in UTC as `YYYY-MM-DD`
    pub fn kickoff_date(&self) -> String {
        self.kickoff.format("%Y-%m-%d").to_string()
    }
}

impl TryFrom<ScheduleEvent> for Match {
    type Error = AppError;

    fn try_from(event: ScheduleEvent) -> Result<Self, Self::Error> {
        let id = event
            .id
            .ok_or_else(|| AppError::malformed_event("<unknown>", "missing id"))?;
        let label = id.to_string();

        let home_team = event
            .home_team_name()
            .ok_or_else(|| AppError::malformed_event(&label, "missing homeTeam.name"))?
            .to_string();
        let away_team = event
            .away_team_name()
            .ok_or_else(|| AppError::malformed_event(&label, "missing awayTeam.name"))?
            .to_string();
        let timestamp = event
            .start_timestamp
            .ok_or_else(|| AppError::malformed_event(&label, "missing startTimestamp"))?;
        let kickoff = DateTime::from_timestamp(timestamp, 0).ok_or_else(|| {
            AppError::malformed_event(&label, format!("startTimestamp {timestamp} out of range"))
        })?;

        Ok(Match {
            id,
            home_team,
            away_team,
            tournament: event
                .tournament_name()
                .unwrap_or(DEFAULT_CATEGORY)
                .to_string(),
            kickoff,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_json() -> &'static str {
        r#"{
            "id": 11352451,
            "status": {"code": 100, "description": "Ended", "type": "finished"},
            "homeTeam": {"name": "Real Madrid", "slug": "real-madrid"},
            "awayTeam": {"name": "Villarreal"},
            "tournament": {"name": "LaLiga"},
            "startTimestamp": 1729278000,
            "homeScore": {"current": 2}
        }"#
    }

    #[test]
    fn test_event_deserializes_and_ignores_unknown_fields() {
        let event: ScheduleEvent = serde_json::from_str(event_json()).unwrap();
        assert_eq!(event.id, Some(11352451));
        assert_eq!(event.status_type(), Some("finished"));
        assert!(event.is_finished());
    }

    #[test]
    fn test_is_finished_case_insensitive() {
        for status in ["finished", "FINISHED", "Ended", "ended"] {
            let event = ScheduleEvent {
                status: Some(EventStatus {
                    status_type: Some(status.to_string()),
                }),
                ..Default::default()
            };
            assert!(event.is_finished(), "{status} should count as finished");
        }

        for status in ["inprogress", "notstarted", "postponed", "finished "] {
            let event = ScheduleEvent {
                status: Some(EventStatus {
                    status_type: Some(status.to_string()),
                }),
                ..Default::default()
            };
            assert!(!event.is_finished(), "{status} should not count as finished");
        }

        assert!(!ScheduleEvent::default().is_finished());
    }

    #[test]
    fn test_response_without_events_key_is_empty() {
        let response: ScheduleResponse = serde_json::from_str("{}").unwrap();
        assert!(response.events.is_empty());
    }

    #[test]
    fn test_match_from_event() {
        let event: ScheduleEvent = serde_json::from_str(event_json()).unwrap();
        let m = Match::try_from(event).unwrap();
        assert_eq!(m.id, 11352451);
        assert_eq!(m.home_team, "Real Madrid");
        assert_eq!(m.away_team, "Villarreal");
        assert_eq!(m.tournament, "LaLiga");
        assert_eq!(m.kickoff_date(), "2024-10-18");
    }

    #[test]
    fn test_match_kickoff_date_is_utc() {
        // 2024-10-18T23:30:00Z is already the 19th in most of Europe
        let event = ScheduleEvent {
            id: Some(1),
            home_team: Some(EventTeam {
                name: Some("A".to_string()),
            }),
            away_team: Some(EventTeam {
                name: Some("B".to_string()),
            }),
            start_timestamp: Some(1729294200),
            ..Default::default()
        };
        let m = Match::try_from(event).unwrap();
        assert_eq!(m.kickoff_date(), "2024-10-18");
        assert_eq!(m.tournament, "Football");
    }

    #[test]
    fn test_match_missing_team_name_is_malformed() {
        let mut event: ScheduleEvent = serde_json::from_str(event_json()).unwrap();
        event.away_team = Some(EventTeam { name: None });

        let err = Match::try_from(event).unwrap_err();
        assert!(matches!(err, AppError::MalformedEvent { .. }));
        assert!(err.to_string().contains("awayTeam.name"));
    }

    #[test]
    fn test_match_missing_timestamp_is_malformed() {
        let mut event: ScheduleEvent = serde_json::from_str(event_json()).unwrap();
        event.start_timestamp = None;
        assert!(Match::try_from(event).is_err());

        let mut event: ScheduleEvent = serde_json::from_str(event_json()).unwrap();
        event.start_timestamp = Some(i64::MAX);
        assert!(Match::try_from(event).is_err());
    }
}
