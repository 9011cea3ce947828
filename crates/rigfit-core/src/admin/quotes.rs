use serde::Serialize;

use super::{admin_path, AdminApi};
use crate::api::{ApiError, Query};
use crate::models::Quote;

impl AdminApi {
    pub async fn list_quotes(&self) -> Result<Vec<Quote>, ApiError> {
        self.list(&admin_path("/quotes"), &Query::new()).await
    }

    pub async fn quote_categories(&self) -> Result<Vec<String>, ApiError> {
        self.list(&admin_path("/quotes/categories"), &Query::new()).await
    }

    pub async fn create_quote<B: Serialize + ?Sized>(&self, body: &B) -> Result<Quote, ApiError> {
        self.client.post(&admin_path("/quotes"), body).await
    }

    /// Partial update; only the fields present in `body` change
    pub async fn update_quote<B: Serialize + ?Sized>(&self, id: &str, body: &B) -> Result<Quote, ApiError> {
        self.client.patch(&admin_path(&format!("/quotes/{}", id)), body).await
    }

    pub async fn delete_quote(&self, id: &str) -> Result<(), ApiError> {
        self.remove(&admin_path(&format!("/quotes/{}", id))).await
    }
}
