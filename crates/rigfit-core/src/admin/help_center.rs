use serde::Serialize;

use super::{admin_path, AdminApi};
use crate::api::{ApiError, Query};
use crate::models::{HelpArticle, HelpCategory};

impl AdminApi {
    pub async fn list_help_categories(&self) -> Result<Vec<HelpCategory>, ApiError> {
        self.list(&admin_path("/help-center/categories"), &Query::new()).await
    }

    pub async fn create_help_category<B: Serialize + ?Sized>(&self, body: &B) -> Result<HelpCategory, ApiError> {
        self.client.post(&admin_path("/help-center/categories"), body).await
    }

    pub async fn update_help_category<B: Serialize + ?Sized>(&self, id: &str, body: &B) -> Result<HelpCategory, ApiError> {
        self.client
            .put(&admin_path(&format!("/help-center/categories/{}", id)), body)
            .await
    }

    pub async fn delete_help_category(&self, id: &str) -> Result<(), ApiError> {
        self.remove(&admin_path(&format!("/help-center/categories/{}", id)))
            .await
    }

    pub async fn list_help_articles(&self) -> Result<Vec<HelpArticle>, ApiError> {
        self.list(&admin_path("/help-center/articles"), &Query::new()).await
    }

    pub async fn create_help_article<B: Serialize + ?Sized>(&self, body: &B) -> Result<HelpArticle, ApiError> {
        self.client.post(&admin_path("/help-center/articles"), body).await
    }

    pub async fn update_help_article<B: Serialize + ?Sized>(&self, id: &str, body: &B) -> Result<HelpArticle, ApiError> {
        self.client
            .put(&admin_path(&format!("/help-center/articles/{}", id)), body)
            .await
    }

    pub async fn delete_help_article(&self, id: &str) -> Result<(), ApiError> {
        self.remove(&admin_path(&format!("/help-center/articles/{}", id)))
            .await
    }
}
