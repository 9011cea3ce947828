use serde::Serialize;

use super::{admin_path, AdminApi};
use crate::api::{ApiError, Query};
use crate::models::{PlanTier, PricingConfig, PromotionRequest};

impl AdminApi {
    pub async fn list_pricing(&self) -> Result<Vec<PricingConfig>, ApiError> {
        self.list(&admin_path("/pricing"), &Query::new()).await
    }

    pub async fn get_pricing(&self, plan: PlanTier) -> Result<PricingConfig, ApiError> {
        self.client.get(&admin_path(&format!("/pricing/{}", plan))).await
    }

    pub async fn update_pricing<B: Serialize + ?Sized>(&self, plan: PlanTier, body: &B) -> Result<PricingConfig, ApiError> {
        self.client.put(&admin_path(&format!("/pricing/{}", plan)), body).await
    }

    pub async fn set_promotion(&self, plan: PlanTier, request: &PromotionRequest) -> Result<PricingConfig, ApiError> {
        self.client
            .post(&admin_path(&format!("/pricing/{}/promotion", plan)), request)
            .await
    }

    pub async fn clear_promotion(&self, plan: PlanTier) -> Result<PricingConfig, ApiError> {
        self.client
            .delete(&admin_path(&format!("/pricing/{}/promotion", plan)))
            .await
    }
}
