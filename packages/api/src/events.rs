use crate::client::ApiClient;
use crate::envelope::Page;
use crate::error::ApiError;
use crate::models::{Event, EventPayload};
use crate::query::ListQuery;

impl ApiClient {
    pub async fn list_events(&self, query: &ListQuery) -> Result<Page<Event>, ApiError> {
        self.get("/events", &query.params())
            .await?
            .into_page("events")
    }

    /// Events that have not happened yet, soonest first.
    pub async fn upcoming_events(&self, limit: u32) -> Result<Vec<Event>, ApiError> {
        self.get("/events/upcoming", &[("limit", limit.to_string())])
            .await?
            .into_items()
    }

    pub async fn create_event(&self, payload: &EventPayload) -> Result<(), ApiError> {
        self.post("/events", payload).await.map(|_| ())
    }

    pub async fn update_event(&self, id: &str, payload: &EventPayload) -> Result<(), ApiError> {
        self.put(&format!("/events/{id}"), payload).await.map(|_| ())
    }

    pub async fn delete_event(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/events/{id}")).await.map(|_| ())
    }
}
