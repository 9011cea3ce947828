use serde::Serialize;

use super::{admin_path, AdminApi};
use crate::api::ApiError;
use crate::models::{Blueprint, BlueprintCoverage, BlueprintListParams, MessageResponse, Paginated};

impl AdminApi {
    pub async fn list_blueprints(&self, params: &BlueprintListParams) -> Result<Paginated<Blueprint>, ApiError> {
        let path = params.to_query().append_to(&admin_path("/blueprints"));
        self.client.get(&path).await
    }

    pub async fn get_blueprint(&self, id: &str) -> Result<Blueprint, ApiError> {
        self.client.get(&admin_path(&format!("/blueprints/{}", id))).await
    }

    /// Active blueprint counts per workout type
    pub async fn blueprint_coverage(&self) -> Result<BlueprintCoverage, ApiError> {
        self.client.get(&admin_path("/blueprints/coverage")).await
    }

    pub async fn create_blueprint<B: Serialize + ?Sized>(&self, body: &B) -> Result<Blueprint, ApiError> {
        self.client.post(&admin_path("/blueprints"), body).await
    }

    pub async fn update_blueprint<B: Serialize + ?Sized>(&self, id: &str, body: &B) -> Result<Blueprint, ApiError> {
        self.client
            .put(&admin_path(&format!("/blueprints/{}", id)), body)
            .await
    }

    pub async fn delete_blueprint(&self, id: &str) -> Result<(), ApiError> {
        self.remove(&admin_path(&format!("/blueprints/{}", id))).await
    }

    pub async fn activate_blueprint(&self, id: &str) -> Result<Blueprint, ApiError> {
        self.client
            .post_empty(&admin_path(&format!("/blueprints/{}/activate", id)))
            .await
    }

    pub async fn deactivate_blueprint(&self, id: &str) -> Result<Blueprint, ApiError> {
        self.client
            .post_empty(&admin_path(&format!("/blueprints/{}/deactivate", id)))
            .await
    }

    /// Load the built-in blueprint set on the backend
    pub async fn seed_blueprints(&self) -> Result<MessageResponse, ApiError> {
        self.client.post_empty(&admin_path("/blueprints/seed")).await
    }
}
