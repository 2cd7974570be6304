use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::user::UserRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EventCategory {
    #[default]
    Cultural,
    Technical,
    Sports,
    Workshop,
    Seminar,
}

impl EventCategory {
    pub const ALL: [EventCategory; 5] = [
        EventCategory::Cultural,
        EventCategory::Technical,
        EventCategory::Sports,
        EventCategory::Workshop,
        EventCategory::Seminar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Cultural => "Cultural",
            EventCategory::Technical => "Technical",
            EventCategory::Sports => "Sports",
            EventCategory::Workshop => "Workshop",
            EventCategory::Seminar => "Seminar",
        }
    }

    /// Select-input value back to the enum; unknown strings fall back to
    /// [`EventCategory::Cultural`].
    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub organizer: String,
    #[serde(default)]
    pub category: EventCategory,
    #[serde(default)]
    pub created_by: Option<UserRef>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Event {
    /// Listings grey out events whose date has passed. Dateless records
    /// count as past.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.date.map(|date| date >= now).unwrap_or(false)
    }
}

/// What the event forms send on create and update.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD` from the date input.
    pub date: String,
    pub time: String,
    pub venue: String,
    pub organizer: String,
    pub category: EventCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_defaults_to_cultural() {
        let event: Event = serde_json::from_str(
            r#"{"_id":"e1","title":"Open mic","description":"Evening show"}"#,
        )
        .unwrap();
        assert_eq!(event.category, EventCategory::Cultural);
        assert!(event.date.is_none());
    }

    #[test]
    fn test_event_full_record() {
        let event: Event = serde_json::from_str(
            r#"{"_id":"e2","title":"Robotics workshop","description":"...",
                "date":"2026-04-18T00:00:00.000Z","time":"10:00","venue":"Lab 3",
                "organizer":"Tech club","category":"Workshop"}"#,
        )
        .unwrap();
        assert_eq!(event.category, EventCategory::Workshop);
        assert_eq!(event.venue, "Lab 3");
        assert!(event.date.is_some());
    }

    #[test]
    fn test_upcoming_compares_against_now() {
        let event: Event = serde_json::from_str(
            r#"{"_id":"e3","title":"T","description":"D","date":"2026-04-18T00:00:00.000Z"}"#,
        )
        .unwrap();
        let before = "2026-04-17T12:00:00Z".parse().unwrap();
        let after = "2026-04-19T12:00:00Z".parse().unwrap();
        assert!(event.is_upcoming(before));
        assert!(!event.is_upcoming(after));

        let dateless = Event { date: None, ..event };
        assert!(!dateless.is_upcoming(before));
    }
}
