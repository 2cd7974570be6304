use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::user::UserRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NoticeCategory {
    Academic,
    Events,
    #[default]
    General,
    Urgent,
    Exam,
}

impl NoticeCategory {
    pub const ALL: [NoticeCategory; 5] = [
        NoticeCategory::Academic,
        NoticeCategory::Events,
        NoticeCategory::General,
        NoticeCategory::Urgent,
        NoticeCategory::Exam,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeCategory::Academic => "Academic",
            NoticeCategory::Events => "Events",
            NoticeCategory::General => "General",
            NoticeCategory::Urgent => "Urgent",
            NoticeCategory::Exam => "Exam",
        }
    }

    /// Select-input value back to the enum; unknown strings fall back to
    /// [`NoticeCategory::General`].
    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: NoticeCategory,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub expiry_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<UserRef>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Notice {
    /// Byline for the detail view. Records missing the author reference
    /// show a generic label.
    pub fn author_name(&self) -> &str {
        self.created_by
            .as_ref()
            .map(|by| by.name.as_str())
            .unwrap_or("Admin")
    }
}

fn default_active() -> bool {
    true
}

/// What the notice forms send on create and update.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticePayload {
    pub title: String,
    pub description: String,
    pub category: NoticeCategory,
    pub is_active: bool,
    /// `YYYY-MM-DD` from the date input; omitted when left blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_defaults() {
        let notice: Notice = serde_json::from_str(
            r#"{"_id":"n1","title":"Library hours","description":"Extended during exams"}"#,
        )
        .unwrap();
        assert_eq!(notice.category, NoticeCategory::General);
        assert!(notice.is_active);
        assert!(notice.expiry_date.is_none());
    }

    #[test]
    fn test_notice_full_record() {
        let notice: Notice = serde_json::from_str(
            r#"{"_id":"n2","title":"Exam schedule","description":"...",
                "category":"Exam","isActive":false,
                "expiryDate":"2026-03-01T00:00:00.000Z",
                "createdBy":{"_id":"u1","name":"Admin"},
                "createdAt":"2026-02-01T09:30:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(notice.category, NoticeCategory::Exam);
        assert!(!notice.is_active);
        assert!(notice.expiry_date.is_some());
        assert_eq!(notice.created_by.unwrap().name, "Admin");
    }

    #[test]
    fn test_author_falls_back_when_reference_missing() {
        let notice: Notice =
            serde_json::from_str(r#"{"_id":"n3","title":"T","description":"D"}"#).unwrap();
        assert_eq!(notice.author_name(), "Admin");
    }

    #[test]
    fn test_payload_omits_blank_expiry() {
        let payload = NoticePayload {
            title: "T".into(),
            description: "D".into(),
            category: NoticeCategory::Urgent,
            is_active: true,
            expiry_date: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["category"], "Urgent");
        assert_eq!(json["isActive"], true);
        assert!(json.get("expiryDate").is_none());
    }
}
