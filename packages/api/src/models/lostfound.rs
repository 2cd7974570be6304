//! Lost & found posts and their moderation state machine.
//!
//! Posts start out `pending` and only ever move forward:
//!
//! ```text
//! pending ──► approved ──► claimed
//!    └──────► rejected
//! ```
//!
//! `rejected` and `claimed` are terminal. The allowed-transition check lives
//! on [`LostFoundStatus`] so views and tests share one source of truth
//! instead of each comparing status strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::user::UserRef;

/// Whether the poster lost the item or found somebody else's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Lost,
    Found,
}

impl ItemKind {
    pub const ALL: [ItemKind; 2] = [ItemKind::Lost, ItemKind::Found];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Lost => "lost",
            ItemKind::Found => "found",
        }
    }

    /// Capitalized form for badges and selects.
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Lost => "Lost",
            ItemKind::Found => "Found",
        }
    }

    pub fn parse(value: &str) -> Self {
        if value == "found" {
            ItemKind::Found
        } else {
            ItemKind::Lost
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LostFoundCategory {
    Electronics,
    Documents,
    Accessories,
    Books,
    #[default]
    Other,
}

impl LostFoundCategory {
    pub const ALL: [LostFoundCategory; 5] = [
        LostFoundCategory::Electronics,
        LostFoundCategory::Documents,
        LostFoundCategory::Accessories,
        LostFoundCategory::Books,
        LostFoundCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LostFoundCategory::Electronics => "Electronics",
            LostFoundCategory::Documents => "Documents",
            LostFoundCategory::Accessories => "Accessories",
            LostFoundCategory::Books => "Books",
            LostFoundCategory::Other => "Other",
        }
    }

    /// Select-input value back to the enum; unknown strings fall back to
    /// [`LostFoundCategory::Other`].
    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LostFoundStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Claimed,
}

impl LostFoundStatus {
    pub const ALL: [LostFoundStatus; 4] = [
        LostFoundStatus::Pending,
        LostFoundStatus::Approved,
        LostFoundStatus::Rejected,
        LostFoundStatus::Claimed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LostFoundStatus::Pending => "pending",
            LostFoundStatus::Approved => "approved",
            LostFoundStatus::Rejected => "rejected",
            LostFoundStatus::Claimed => "claimed",
        }
    }

    /// The forward-only transition set.
    pub fn can_become(&self, next: LostFoundStatus) -> bool {
        matches!(
            (self, next),
            (LostFoundStatus::Pending, LostFoundStatus::Approved)
                | (LostFoundStatus::Pending, LostFoundStatus::Rejected)
                | (LostFoundStatus::Approved, LostFoundStatus::Claimed)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, LostFoundStatus::Rejected | LostFoundStatus::Claimed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LostFoundPost {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub item_name: String,
    pub description: String,
    #[serde(default)]
    pub category: LostFoundCategory,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub contact_info: String,
    #[serde(default)]
    pub status: LostFoundStatus,
    #[serde(default)]
    pub posted_by: Option<UserRef>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl LostFoundPost {
    /// Owners may mark a post claimed only once a moderator has approved it.
    pub fn can_mark_claimed(&self) -> bool {
        self.status.can_become(LostFoundStatus::Claimed)
    }

    /// Editing is closed once the item has been handed back.
    pub fn can_edit(&self) -> bool {
        self.status != LostFoundStatus::Claimed
    }
}

/// What the report/edit form sends.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LostFoundPayload {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub item_name: String,
    pub description: String,
    pub category: LostFoundCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// `YYYY-MM-DD`; omitted when the poster left it blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub contact_info: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_transitions() {
        assert!(LostFoundStatus::Pending.can_become(LostFoundStatus::Approved));
        assert!(LostFoundStatus::Pending.can_become(LostFoundStatus::Rejected));
        assert!(LostFoundStatus::Approved.can_become(LostFoundStatus::Claimed));
    }

    #[test]
    fn test_pending_cannot_jump_to_claimed() {
        assert!(!LostFoundStatus::Pending.can_become(LostFoundStatus::Claimed));
    }

    #[test]
    fn test_no_way_out_of_terminal_states() {
        for next in LostFoundStatus::ALL {
            assert!(!LostFoundStatus::Rejected.can_become(next));
            assert!(!LostFoundStatus::Claimed.can_become(next));
        }
        assert!(LostFoundStatus::Rejected.is_terminal());
        assert!(LostFoundStatus::Claimed.is_terminal());
        assert!(!LostFoundStatus::Pending.is_terminal());
    }

    #[test]
    fn test_no_backward_transitions() {
        assert!(!LostFoundStatus::Approved.can_become(LostFoundStatus::Pending));
        assert!(!LostFoundStatus::Claimed.can_become(LostFoundStatus::Approved));
        assert!(!LostFoundStatus::Rejected.can_become(LostFoundStatus::Pending));
    }

    #[test]
    fn test_post_wire_format() {
        let post: LostFoundPost = serde_json::from_str(
            r#"{"_id":"p1","type":"found","itemName":"USB drive",
                "description":"Black 32GB","category":"Electronics",
                "location":"Reading hall","contactInfo":"x@campus.edu",
                "status":"approved","postedBy":{"_id":"u9","name":"Ravi","email":"r@campus.edu"}}"#,
        )
        .unwrap();
        assert_eq!(post.kind, ItemKind::Found);
        assert_eq!(post.status, LostFoundStatus::Approved);
        assert!(post.can_mark_claimed());
        assert!(post.can_edit());
    }

    #[test]
    fn test_claimed_post_is_locked() {
        let post: LostFoundPost = serde_json::from_str(
            r#"{"_id":"p2","type":"lost","itemName":"Calculator",
                "description":"...","status":"claimed"}"#,
        )
        .unwrap();
        assert!(!post.can_mark_claimed());
        assert!(!post.can_edit());
    }

    #[test]
    fn test_status_defaults_to_pending() {
        let post: LostFoundPost = serde_json::from_str(
            r#"{"_id":"p3","type":"lost","itemName":"Scarf","description":"Blue wool"}"#,
        )
        .unwrap();
        assert_eq!(post.status, LostFoundStatus::Pending);
        assert!(!post.can_mark_claimed());
    }

    #[test]
    fn test_payload_sends_wire_names() {
        let payload = LostFoundPayload {
            kind: ItemKind::Lost,
            item_name: "ID card".into(),
            description: "Hostel block B".into(),
            category: LostFoundCategory::Documents,
            location: None,
            date: Some("2026-02-10".into()),
            contact_info: "b@campus.edu".into(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "lost");
        assert_eq!(json["itemName"], "ID card");
        assert_eq!(json["contactInfo"], "b@campus.edu");
        assert!(json.get("location").is_none());
    }
}
