use serde::Serialize;

use super::{admin_path, AdminApi};
use crate::api::{ApiError, Query};
use crate::models::{
    ListResponse, Stats, Tip, TipGenerateRequest, TipListParams, TipMediaRequest, TipTemplate, TipValidation,
};

impl AdminApi {
    pub async fn list_tips(&self, params: &TipListParams) -> Result<Vec<Tip>, ApiError> {
        self.list(&admin_path("/tips"), &params.to_query()).await
    }

    pub async fn get_tip(&self, id: &str) -> Result<Tip, ApiError> {
        self.client.get(&admin_path(&format!("/tips/{}", id))).await
    }

    pub async fn tip_analytics(&self) -> Result<Stats, ApiError> {
        self.client.get(&admin_path("/tips/analytics")).await
    }

    pub async fn create_tip<B: Serialize + ?Sized>(&self, body: &B) -> Result<Tip, ApiError> {
        self.client.post(&admin_path("/tips"), body).await
    }

    pub async fn update_tip<B: Serialize + ?Sized>(&self, id: &str, body: &B) -> Result<Tip, ApiError> {
        self.client.put(&admin_path(&format!("/tips/{}", id)), body).await
    }

    pub async fn delete_tip(&self, id: &str) -> Result<(), ApiError> {
        self.remove(&admin_path(&format!("/tips/{}", id))).await
    }

    /// Generate tips for the given dates and categories
    pub async fn generate_tips(&self, request: &TipGenerateRequest) -> Result<Vec<Tip>, ApiError> {
        let tips: ListResponse<Tip> = self.client.post(&admin_path("/tips/generate"), request).await?;
        Ok(tips.into_inner())
    }

    pub async fn bulk_generate_tips(&self, request: &TipGenerateRequest) -> Result<Vec<Tip>, ApiError> {
        let tips: ListResponse<Tip> = self
            .client
            .post(&admin_path("/tips/bulk-generate"), request)
            .await?;
        Ok(tips.into_inner())
    }

    pub async fn regenerate_tip_audio(&self, id: &str) -> Result<Tip, ApiError> {
        self.client
            .post_empty(&admin_path(&format!("/tips/{}/regenerate-audio", id)))
            .await
    }

    pub async fn attach_tip_media(&self, id: &str, request: &TipMediaRequest) -> Result<Tip, ApiError> {
        self.client
            .post(&admin_path(&format!("/tips/{}/media", id)), request)
            .await
    }

    pub async fn validate_tip(&self, id: &str) -> Result<TipValidation, ApiError> {
        self.client
            .post_empty(&admin_path(&format!("/tips/{}/validate", id)))
            .await
    }

    // Templates

    pub async fn list_tip_templates(&self) -> Result<Vec<TipTemplate>, ApiError> {
        self.list(&admin_path("/tips/templates"), &Query::new()).await
    }

    pub async fn create_tip_template<B: Serialize + ?Sized>(&self, body: &B) -> Result<TipTemplate, ApiError> {
        self.client.post(&admin_path("/tips/templates"), body).await
    }

    pub async fn update_tip_template<B: Serialize + ?Sized>(
        &self,
        id: &str,
        body: &B,
    ) -> Result<TipTemplate, ApiError> {
        self.client
            .put(&admin_path(&format!("/tips/templates/{}", id)), body)
            .await
    }

    pub async fn delete_tip_template(&self, id: &str) -> Result<(), ApiError> {
        self.remove(&admin_path(&format!("/tips/templates/{}", id)))
            .await
    }
}
