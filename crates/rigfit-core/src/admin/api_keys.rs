use serde::de::IgnoredAny;

use super::{admin_path, AdminApi};
use crate::api::{ApiError, Query};
use crate::models::{ApiKey, ApiKeyCreateRequest};

impl AdminApi {
    pub async fn list_api_keys(&self) -> Result<Vec<ApiKey>, ApiError> {
        self.list(&admin_path("/api-keys"), &Query::new()).await
    }

    /// Create a key. The plaintext secret is only present in this response.
    pub async fn create_api_key(&self, request: &ApiKeyCreateRequest) -> Result<ApiKey, ApiError> {
        self.client.post(&admin_path("/api-keys"), request).await
    }

    pub async fn revoke_api_key(&self, id: &str) -> Result<(), ApiError> {
        self.client
            .post_empty::<IgnoredAny>(&admin_path(&format!("/api-keys/{}/revoke", id)))
            .await
            .map(|_| ())
    }
}
