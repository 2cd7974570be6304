use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::user::UserRef;

pub const SUBJECT_MAX_LEN: usize = 200;
pub const MESSAGE_MAX_LEN: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FeedbackCategory {
    Facilities,
    Services,
    Academic,
    Infrastructure,
    #[default]
    Other,
}

impl FeedbackCategory {
    pub const ALL: [FeedbackCategory; 5] = [
        FeedbackCategory::Facilities,
        FeedbackCategory::Services,
        FeedbackCategory::Academic,
        FeedbackCategory::Infrastructure,
        FeedbackCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackCategory::Facilities => "Facilities",
            FeedbackCategory::Services => "Services",
            FeedbackCategory::Academic => "Academic",
            FeedbackCategory::Infrastructure => "Infrastructure",
            FeedbackCategory::Other => "Other",
        }
    }

    /// Select-input value back to the enum; unknown strings fall back to
    /// [`FeedbackCategory::Other`].
    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .unwrap_or_default()
    }
}

/// `pending → resolved`, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
    #[default]
    Pending,
    Resolved,
}

impl FeedbackStatus {
    pub const ALL: [FeedbackStatus; 2] = [FeedbackStatus::Pending, FeedbackStatus::Resolved];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackStatus::Pending => "pending",
            FeedbackStatus::Resolved => "resolved",
        }
    }

    pub fn can_become(&self, next: FeedbackStatus) -> bool {
        matches!((self, next), (FeedbackStatus::Pending, FeedbackStatus::Resolved))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub category: FeedbackCategory,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub status: FeedbackStatus,
    /// `None` both for anonymous submissions and for deleted accounts.
    #[serde(default)]
    pub submitted_by: Option<UserRef>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Feedback {
    /// Display name respecting anonymity.
    pub fn author_label(&self) -> &str {
        if self.is_anonymous {
            return "Anonymous";
        }
        self.submitted_by
            .as_ref()
            .map(|by| by.name.as_str())
            .unwrap_or("Unknown")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackPayload {
    pub subject: String,
    pub message: String,
    pub category: FeedbackCategory,
    pub is_anonymous: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_the_only_transition() {
        assert!(FeedbackStatus::Pending.can_become(FeedbackStatus::Resolved));
        assert!(!FeedbackStatus::Resolved.can_become(FeedbackStatus::Pending));
        assert!(!FeedbackStatus::Pending.can_become(FeedbackStatus::Pending));
        assert!(!FeedbackStatus::Resolved.can_become(FeedbackStatus::Resolved));
    }

    #[test]
    fn test_anonymous_feedback_has_no_author() {
        let feedback: Feedback = serde_json::from_str(
            r#"{"_id":"f1","subject":"Broken AC","message":"Room 204 has had no cooling for a week",
                "category":"Facilities","isAnonymous":true,"status":"pending"}"#,
        )
        .unwrap();
        assert!(feedback.is_anonymous);
        assert!(feedback.submitted_by.is_none());
        assert_eq!(feedback.status, FeedbackStatus::Pending);
        assert_eq!(feedback.author_label(), "Anonymous");
    }

    #[test]
    fn test_named_feedback_shows_submitter() {
        let feedback: Feedback = serde_json::from_str(
            r#"{"_id":"f2","subject":"Wifi","message":"...","category":"Infrastructure",
                "isAnonymous":false,"status":"resolved",
                "submittedBy":{"_id":"u4","name":"Kiran","email":"k@campus.edu"}}"#,
        )
        .unwrap();
        assert_eq!(feedback.author_label(), "Kiran");
        assert_eq!(feedback.status, FeedbackStatus::Resolved);
    }

    #[test]
    fn test_payload_wire_names() {
        let payload = FeedbackPayload {
            subject: "Broken AC".into(),
            message: "Second floor".into(),
            category: FeedbackCategory::Facilities,
            is_anonymous: true,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["isAnonymous"], true);
        assert_eq!(json["category"], "Facilities");
    }
}
