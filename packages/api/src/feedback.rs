use crate::client::ApiClient;
use crate::envelope::Page;
use crate::error::ApiError;
use crate::models::{Feedback, FeedbackPayload};
use crate::query::ListQuery;

impl ApiClient {
    pub async fn submit_feedback(&self, payload: &FeedbackPayload) -> Result<(), ApiError> {
        self.post("/feedback", payload).await.map(|_| ())
    }

    /// Admin listing across all feedback entries.
    pub async fn list_feedback(&self, query: &ListQuery) -> Result<Page<Feedback>, ApiError> {
        self.get("/feedback", &query.params())
            .await?
            .into_page("feedback")
    }

    pub async fn resolve_feedback(&self, id: &str) -> Result<(), ApiError> {
        tracing::info!("resolving feedback {id}");
        self.patch(&format!("/feedback/{id}/resolve")).await.map(|_| ())
    }
}
