//! Display helpers: dates, relative times, badge colors.

use api::models::{FeedbackStatus, LostFoundStatus};
use chrono::{DateTime, Utc};

pub fn format_date(value: Option<&DateTime<Utc>>) -> String {
    match value {
        Some(ts) => ts.format("%b %-d, %Y").to_string(),
        None => "N/A".to_string(),
    }
}

/// Coarse relative time for activity feeds. Falls back to the full date
/// after a week.
pub fn time_ago(value: &DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(*value);
    let seconds = delta.num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }
    let minutes = delta.num_minutes();
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = delta.num_hours();
    if hours < 24 {
        return format!("{hours}h ago");
    }
    let days = delta.num_days();
    if days < 7 {
        return format!("{days}d ago");
    }
    format_date(Some(value))
}

pub fn lostfound_badge_class(status: LostFoundStatus) -> &'static str {
    match status {
        LostFoundStatus::Pending => "badge badge-yellow",
        LostFoundStatus::Approved => "badge badge-green",
        LostFoundStatus::Rejected => "badge badge-red",
        LostFoundStatus::Claimed => "badge badge-blue",
    }
}

pub fn feedback_badge_class(status: FeedbackStatus) -> &'static str {
    match status {
        FeedbackStatus::Pending => "badge badge-yellow",
        FeedbackStatus::Resolved => "badge badge-green",
    }
}

pub fn category_badge_class(category: &str) -> &'static str {
    match category {
        "Urgent" => "badge badge-red",
        "Academic" => "badge badge-blue",
        "Exam" => "badge badge-orange",
        "Events" | "Cultural" => "badge badge-purple",
        "Technical" => "badge badge-blue",
        "Sports" => "badge badge-green",
        "Workshop" | "Seminar" => "badge badge-orange",
        _ => "badge badge-gray",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_format_date_unpadded_day() {
        let ts = at(2025, 3, 5, 10, 0, 0);
        assert_eq!(format_date(Some(&ts)), "Mar 5, 2025");
        assert_eq!(format_date(None), "N/A");
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = at(2025, 3, 10, 12, 0, 0);
        assert_eq!(time_ago(&at(2025, 3, 10, 11, 59, 30), now), "just now");
        assert_eq!(time_ago(&at(2025, 3, 10, 11, 45, 0), now), "15m ago");
        assert_eq!(time_ago(&at(2025, 3, 10, 7, 0, 0), now), "5h ago");
        assert_eq!(time_ago(&at(2025, 3, 8, 12, 0, 0), now), "2d ago");
        assert_eq!(time_ago(&at(2025, 2, 1, 12, 0, 0), now), "Feb 1, 2025");
    }

    #[test]
    fn test_status_badges_follow_moderation_colors() {
        assert_eq!(
            lostfound_badge_class(LostFoundStatus::Pending),
            "badge badge-yellow"
        );
        assert_eq!(
            lostfound_badge_class(LostFoundStatus::Approved),
            "badge badge-green"
        );
        assert_eq!(
            lostfound_badge_class(LostFoundStatus::Rejected),
            "badge badge-red"
        );
        assert_eq!(
            lostfound_badge_class(LostFoundStatus::Claimed),
            "badge badge-blue"
        );
        assert_eq!(
            feedback_badge_class(FeedbackStatus::Resolved),
            "badge badge-green"
        );
    }

    #[test]
    fn test_unknown_category_falls_back_to_gray() {
        assert_eq!(category_badge_class("Urgent"), "badge badge-red");
        assert_eq!(category_badge_class("Unheard Of"), "badge badge-gray");
    }
}
