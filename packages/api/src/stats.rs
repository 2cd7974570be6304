use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{ActivityFeed, Stats};

impl ApiClient {
    pub async fn fetch_stats(&self) -> Result<Stats, ApiError> {
        self.get("/stats", &[]).await?.into_item()
    }

    /// Recent records per collection for the admin dashboard tables.
    pub async fn fetch_activity(&self) -> Result<ActivityFeed, ApiError> {
        self.get("/stats/activity", &[]).await?.into_item()
    }
}
