use serde::Serialize;

use super::{admin_path, AdminApi};
use crate::api::{ApiError, Query};
use crate::models::{
    AlternativeRequest, ExerciseAlternative, GenerateImmediateRequest, ListResponse, MessageResponse, Stats,
};

impl AdminApi {
    /// Queue the daily generation run for every user
    pub async fn generate_daily_workouts(&self) -> Result<MessageResponse, ApiError> {
        self.client.post_empty(&admin_path("/workouts/generate-daily")).await
    }

    pub async fn generate_immediate_workout(&self, request: &GenerateImmediateRequest) -> Result<Stats, ApiError> {
        self.client
            .post(&admin_path("/workouts/generate-immediate"), request)
            .await
    }

    pub async fn regenerate_workout(&self, id: &str) -> Result<Stats, ApiError> {
        self.client
            .post_empty(&admin_path(&format!("/workouts/{}/regenerate", id)))
            .await
    }

    /// Delete stale generated workouts
    pub async fn cleanup_workouts(&self) -> Result<MessageResponse, ApiError> {
        self.client.post_empty(&admin_path("/workouts/cleanup")).await
    }

    // Exercise alternatives

    pub async fn list_alternatives(&self) -> Result<Vec<ExerciseAlternative>, ApiError> {
        self.list(&admin_path("/workouts/alternatives"), &Query::new()).await
    }

    pub async fn alternative_stats(&self) -> Result<Stats, ApiError> {
        self.client.get(&admin_path("/workouts/alternatives/stats")).await
    }

    pub async fn create_alternative(&self, request: &AlternativeRequest) -> Result<ExerciseAlternative, ApiError> {
        self.client
            .post(&admin_path("/workouts/alternatives"), request)
            .await
    }

    pub async fn update_alternative<B: Serialize + ?Sized>(
        &self,
        id: &str,
        body: &B,
    ) -> Result<ExerciseAlternative, ApiError> {
        self.client
            .put(&admin_path(&format!("/workouts/alternatives/{}", id)), body)
            .await
    }

    pub async fn delete_alternative(&self, id: &str) -> Result<(), ApiError> {
        self.remove(&admin_path(&format!("/workouts/alternatives/{}", id)))
            .await
    }

    pub async fn bulk_create_alternatives(
        &self,
        requests: &[AlternativeRequest],
    ) -> Result<Vec<ExerciseAlternative>, ApiError> {
        let created: ListResponse<ExerciseAlternative> = self
            .client
            .post(&admin_path("/workouts/alternatives/bulk"), requests)
            .await?;
        Ok(created.into_inner())
    }
}
