use crate::client::ApiClient;
use crate::envelope::Page;
use crate::error::ApiError;
use crate::models::{LostFoundPayload, LostFoundPost};
use crate::query::ListQuery;

impl ApiClient {
    /// Approved posts only. This is the feed every student can browse.
    pub async fn browse_lostfound(
        &self,
        query: &ListQuery,
    ) -> Result<Page<LostFoundPost>, ApiError> {
        self.get("/lostfound", &query.params())
            .await?
            .into_page("posts")
    }

    /// The caller's own posts in every status, newest first.
    pub async fn my_lostfound_posts(&self) -> Result<Vec<LostFoundPost>, ApiError> {
        self.get("/lostfound/my-posts", &[]).await?.into_items()
    }

    /// Admin view across all statuses.
    pub async fn moderate_lostfound(
        &self,
        query: &ListQuery,
    ) -> Result<Page<LostFoundPost>, ApiError> {
        self.get("/lostfound/all", &query.params())
            .await?
            .into_page("posts")
    }

    pub async fn create_lostfound(&self, payload: &LostFoundPayload) -> Result<(), ApiError> {
        self.post("/lostfound", payload).await.map(|_| ())
    }

    pub async fn update_lostfound(
        &self,
        id: &str,
        payload: &LostFoundPayload,
    ) -> Result<(), ApiError> {
        self.put(&format!("/lostfound/{id}"), payload)
            .await
            .map(|_| ())
    }

    pub async fn delete_lostfound(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/lostfound/{id}")).await.map(|_| ())
    }

    pub async fn approve_lostfound(&self, id: &str) -> Result<(), ApiError> {
        tracing::info!("approving lost-found post {id}");
        self.patch(&format!("/lostfound/{id}/approve")).await.map(|_| ())
    }

    pub async fn reject_lostfound(&self, id: &str) -> Result<(), ApiError> {
        tracing::info!("rejecting lost-found post {id}");
        self.patch(&format!("/lostfound/{id}/reject")).await.map(|_| ())
    }

    /// Owner marks an approved post as claimed.
    pub async fn claim_lostfound(&self, id: &str) -> Result<(), ApiError> {
        tracing::info!("claiming lost-found post {id}");
        self.patch(&format!("/lostfound/{id}/claim")).await.map(|_| ())
    }
}
