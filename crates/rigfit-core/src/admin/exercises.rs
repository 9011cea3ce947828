use super::{admin_path, AdminApi};
use crate::api::{ApiError, Query};
use crate::models::{Exercise, ExerciseListParams, Stats};

impl AdminApi {
    pub async fn list_exercises(&self, params: &ExerciseListParams) -> Result<Vec<Exercise>, ApiError> {
        self.list(&admin_path("/exercises"), &params.to_query()).await
    }

    pub async fn get_exercise(&self, id: &str) -> Result<Exercise, ApiError> {
        self.client.get(&admin_path(&format!("/exercises/{}", id))).await
    }

    pub async fn exercise_stats(&self) -> Result<Stats, ApiError> {
        self.client.get(&admin_path("/exercises/stats")).await
    }

    pub async fn exercise_categories(&self) -> Result<Vec<String>, ApiError> {
        self.list(&admin_path("/exercises/categories"), &Query::new()).await
    }

    pub async fn muscle_groups(&self) -> Result<Vec<String>, ApiError> {
        self.list(&admin_path("/exercises/muscle-groups"), &Query::new()).await
    }

    pub async fn equipment(&self) -> Result<Vec<String>, ApiError> {
        self.list(&admin_path("/exercises/equipment"), &Query::new()).await
    }
}
