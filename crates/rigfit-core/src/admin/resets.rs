use serde::Serialize;

use super::{admin_path, AdminApi};
use crate::api::ApiError;
use crate::models::{PresetReset, ResetListParams, Stats};

impl AdminApi {
    pub async fn list_resets(&self, params: &ResetListParams) -> Result<Vec<PresetReset>, ApiError> {
        self.list(&admin_path("/resets"), &params.to_query()).await
    }

    pub async fn get_reset(&self, id: &str) -> Result<PresetReset, ApiError> {
        self.client.get(&admin_path(&format!("/resets/{}", id))).await
    }

    pub async fn reset_analytics(&self) -> Result<Stats, ApiError> {
        self.client.get(&admin_path("/resets/analytics")).await
    }

    pub async fn reset_category_summary(&self) -> Result<Stats, ApiError> {
        self.client.get(&admin_path("/resets/category-summary")).await
    }

    pub async fn create_reset<B: Serialize + ?Sized>(&self, body: &B) -> Result<PresetReset, ApiError> {
        self.client.post(&admin_path("/resets"), body).await
    }

    pub async fn update_reset<B: Serialize + ?Sized>(&self, id: &str, body: &B) -> Result<PresetReset, ApiError> {
        self.client.put(&admin_path(&format!("/resets/{}", id)), body).await
    }

    pub async fn delete_reset(&self, id: &str) -> Result<(), ApiError> {
        self.remove(&admin_path(&format!("/resets/{}", id))).await
    }

    pub async fn activate_reset(&self, id: &str) -> Result<PresetReset, ApiError> {
        self.client
            .post_empty(&admin_path(&format!("/resets/{}/activate", id)))
            .await
    }

    pub async fn deactivate_reset(&self, id: &str) -> Result<PresetReset, ApiError> {
        self.client
            .post_empty(&admin_path(&format!("/resets/{}/deactivate", id)))
            .await
    }

    /// Toggle the featured flag
    pub async fn feature_reset(&self, id: &str) -> Result<PresetReset, ApiError> {
        self.client
            .post_empty(&admin_path(&format!("/resets/{}/feature", id)))
            .await
    }
}
