use crate::client::ApiClient;
use crate::envelope::Page;
use crate::error::ApiError;
use crate::models::{Notice, NoticePayload};
use crate::query::ListQuery;

impl ApiClient {
    pub async fn list_notices(&self, query: &ListQuery) -> Result<Page<Notice>, ApiError> {
        self.get("/notices", &query.params())
            .await?
            .into_page("notices")
    }

    /// The handful of latest notices for the student dashboard.
    pub async fn recent_notices(&self, limit: u32) -> Result<Vec<Notice>, ApiError> {
        let page = self
            .get("/notices", &[("limit", limit.to_string())])
            .await?
            .into_page("notices")?;
        Ok(page.items)
    }

    pub async fn create_notice(&self, payload: &NoticePayload) -> Result<(), ApiError> {
        self.post("/notices", payload).await.map(|_| ())
    }

    pub async fn update_notice(&self, id: &str, payload: &NoticePayload) -> Result<(), ApiError> {
        self.put(&format!("/notices/{id}"), payload).await.map(|_| ())
    }

    pub async fn delete_notice(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/notices/{id}")).await.map(|_| ())
    }
}
