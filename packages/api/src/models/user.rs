//! # User identity
//!
//! [`User`] is the identity object the backend returns from `/auth/login`,
//! `/auth/register`, and `/auth/me`, and the one we keep in durable storage
//! between visits. The backend's document id travels as `_id`; everything
//! else is camelCase on the wire.
//!
//! [`Role`] is the closed set of account kinds. Routing and guard decisions
//! branch on this enum, never on raw strings, so a typo'd role cannot slip
//! through a string comparison somewhere.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Admin => "admin",
        }
    }

    /// Landing page for this role after login or a role-mismatch redirect.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Student => "/student/dashboard",
            Role::Admin => "/admin/dashboard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Up to two initials for the avatar fallback, `"U"` when the name is
    /// somehow blank.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase();
        if initials.is_empty() {
            "U".to_string()
        } else {
            initials
        }
    }

    /// Round-trip helpers for the durable session record, which stores the
    /// user as raw JSON so the storage crate stays model-free.
    pub fn to_stored(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    pub fn from_stored(value: &serde_json::Value) -> Result<Self, ApiError> {
        serde_json::from_value(value.clone())
            .map_err(|_| ApiError::Server("Stored session is unreadable.".to_string()))
    }
}

/// Reduced identity embedded in resources (`postedBy`, `submittedBy`,
/// `createdBy`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    #[serde(default, rename = "_id", alias = "id")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format_is_lowercase() {
        let user: User = serde_json::from_str(
            r#"{"_id":"u1","name":"Priya Nair","email":"priya@campus.edu","role":"admin"}"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::Admin);
        assert!(user.is_admin());

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["role"], "admin");
        assert_eq!(back["_id"], "u1");
    }

    #[test]
    fn test_stored_roundtrip_preserves_identity() {
        let user: User = serde_json::from_str(
            r#"{"_id":"u2","name":"Dev Patel","email":"dev@campus.edu","role":"student"}"#,
        )
        .unwrap();

        let stored = user.to_stored();
        let restored = User::from_stored(&stored).unwrap();
        assert_eq!(restored, user);
        assert_eq!(restored.role, Role::Student);
    }

    #[test]
    fn test_unreadable_stored_user_is_an_error() {
        let junk = serde_json::json!({"name": 7});
        assert!(User::from_stored(&junk).is_err());
    }

    #[test]
    fn test_initials() {
        let mut user: User = serde_json::from_str(
            r#"{"_id":"u3","name":"Asha Rao","email":"a@campus.edu","role":"student"}"#,
        )
        .unwrap();
        assert_eq!(user.initials(), "AR");

        user.name = "meera".into();
        assert_eq!(user.initials(), "M");

        user.name = "  ".into();
        assert_eq!(user.initials(), "U");
    }

    #[test]
    fn test_dashboard_paths() {
        assert_eq!(Role::Student.dashboard_path(), "/student/dashboard");
        assert_eq!(Role::Admin.dashboard_path(), "/admin/dashboard");
    }
}
