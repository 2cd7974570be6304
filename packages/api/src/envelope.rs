//! The response envelope the backend wraps everything in.
//!
//! List endpoints answer `{ success, data: { <items-key>: [...], pagination:
//! { current, total } } }` where the items key differs per collection
//! (`notices`, `events`, `posts`, `feedback`). Item endpoints put the object
//! directly under `data`; a few list endpoints (`/events/upcoming`,
//! `/lostfound/my-posts`, `/auth/admins`) put a bare array there. The items
//! key is controller configuration, which is why extraction goes through
//! [`serde_json::Value`] instead of a fixed struct per endpoint.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;

pub(crate) const MALFORMED: &str = "Unexpected response from server.";

#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default)]
    pub message: Option<String>,
}

/// Server-reported page position. Absent pagination means a single page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    pub current: u32,
    pub total: u32,
    #[serde(default)]
    pub count: Option<u64>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current: 1,
            total: 1,
            count: None,
        }
    }
}

impl Pagination {
    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    /// Whether the pager is worth rendering at all.
    pub fn is_multi_page(&self) -> bool {
        self.total > 1
    }
}

/// One fetched page of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: Pagination::default(),
        }
    }
}

impl Envelope {
    /// Items under `data.<items_key>` plus `data.pagination`.
    pub fn into_page<T: DeserializeOwned>(self, items_key: &str) -> Result<Page<T>, ApiError> {
        let data = self.data;
        let items = data
            .get(items_key)
            .cloned()
            .ok_or_else(|| ApiError::Server(MALFORMED.to_string()))?;
        let items: Vec<T> =
            serde_json::from_value(items).map_err(|_| ApiError::Server(MALFORMED.to_string()))?;
        let pagination = data
            .get("pagination")
            .and_then(|p| serde_json::from_value(p.clone()).ok())
            .unwrap_or_default();
        Ok(Page { items, pagination })
    }

    /// The object directly under `data`.
    pub fn into_item<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        serde_json::from_value(self.data).map_err(|_| ApiError::Server(MALFORMED.to_string()))
    }

    /// A bare array directly under `data`; `null` reads as empty.
    pub fn into_items<T: DeserializeOwned>(self) -> Result<Vec<T>, ApiError> {
        if self.data.is_null() {
            return Ok(Vec::new());
        }
        serde_json::from_value(self.data).map_err(|_| ApiError::Server(MALFORMED.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Thing {
        name: String,
    }

    fn envelope(json: &str) -> Envelope {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_list_with_pagination() {
        let env = envelope(
            r#"{"success":true,"data":{"notices":[{"name":"a"},{"name":"b"}],
                "pagination":{"current":2,"total":5}}}"#,
        );
        let page: Page<Thing> = env.into_page("notices").unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.pagination.current, 2);
        assert_eq!(page.pagination.total, 5);
        assert!(page.pagination.has_prev());
        assert!(page.pagination.has_next());
    }

    #[test]
    fn test_missing_pagination_defaults_to_single_page() {
        let env = envelope(r#"{"success":true,"data":{"posts":[]}}"#);
        let page: Page<Thing> = env.into_page("posts").unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.pagination, Pagination::default());
        assert!(!page.pagination.has_prev());
        assert!(!page.pagination.has_next());
        assert!(!page.pagination.is_multi_page());
    }

    #[test]
    fn test_wrong_items_key_is_an_error_not_an_empty_list() {
        let env = envelope(r#"{"success":true,"data":{"events":[{"name":"x"}]}}"#);
        let result: Result<Page<Thing>, _> = env.into_page("notices");
        assert!(result.is_err());
    }

    #[test]
    fn test_item_under_data() {
        let env = envelope(r#"{"success":true,"data":{"name":"solo"}}"#);
        let thing: Thing = env.into_item().unwrap();
        assert_eq!(thing.name, "solo");
    }

    #[test]
    fn test_bare_array_under_data() {
        let env = envelope(r#"{"success":true,"data":[{"name":"a"}]}"#);
        let things: Vec<Thing> = env.into_items().unwrap();
        assert_eq!(things, vec![Thing { name: "a".into() }]);

        let empty = envelope(r#"{"success":true,"data":null}"#);
        assert!(empty.into_items::<Thing>().unwrap().is_empty());
    }

    #[test]
    fn test_error_envelope_carries_message() {
        let env = envelope(r#"{"success":false,"message":"Title is required"}"#);
        assert!(!env.success);
        assert_eq!(env.message.as_deref(), Some("Title is required"));
    }

    #[test]
    fn test_pagination_count_is_optional() {
        let env = envelope(
            r#"{"success":true,"data":{"feedback":[],
                "pagination":{"current":1,"total":1,"count":37}}}"#,
        );
        let page: Page<Thing> = env.into_page("feedback").unwrap();
        assert_eq!(page.pagination.count, Some(37));
    }
}
