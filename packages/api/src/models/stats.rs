use serde::Deserialize;

use crate::models::event::Event;
use crate::models::feedback::Feedback;
use crate::models::lostfound::LostFoundPost;
use crate::models::notice::Notice;

/// Counters behind the dashboard stat cards, from `/stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Stats {
    pub total_notices: u64,
    pub total_events: u64,
    pub pending_lost_found: u64,
    pub pending_feedback: u64,
    pub total_students: u64,
    pub upcoming_events: u64,
}

/// Recent items per collection, from `/stats/activity`.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityFeed {
    pub notices: Vec<Notice>,
    pub events: Vec<Event>,
    pub lost_found: Vec<LostFoundPost>,
    pub feedback: Vec<Feedback>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_missing_keys_default_to_zero() {
        let stats: Stats =
            serde_json::from_str(r#"{"totalNotices":12,"pendingFeedback":3}"#).unwrap();
        assert_eq!(stats.total_notices, 12);
        assert_eq!(stats.pending_feedback, 3);
        assert_eq!(stats.total_students, 0);
    }

    #[test]
    fn test_activity_feed_sections_default_empty() {
        let feed: ActivityFeed = serde_json::from_str(
            r#"{"notices":[{"_id":"n1","title":"T","description":"D"}]}"#,
        )
        .unwrap();
        assert_eq!(feed.notices.len(), 1);
        assert!(feed.events.is_empty());
        assert!(feed.lost_found.is_empty());
        assert!(feed.feedback.is_empty());
    }
}
