use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::User;

/// Body for provisioning another admin account.
#[derive(Debug, Clone, Serialize)]
pub struct CreateAdminRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl ApiClient {
    pub async fn list_admins(&self) -> Result<Vec<User>, ApiError> {
        self.get("/auth/admins", &[]).await?.into_items()
    }

    pub async fn create_admin(&self, request: &CreateAdminRequest) -> Result<(), ApiError> {
        self.post("/auth/create-admin", request).await.map(|_| ())
    }

    pub async fn delete_admin(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/auth/admins/{id}")).await.map(|_| ())
    }
}
