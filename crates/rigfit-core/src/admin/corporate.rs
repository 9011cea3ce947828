use serde::Serialize;

use super::{admin_path, AdminApi};
use crate::api::{ApiError, Query};
use crate::models::{AddCorporateUsersRequest, CorporateAccount, Stats};

impl AdminApi {
    pub async fn list_corporate_accounts(&self) -> Result<Vec<CorporateAccount>, ApiError> {
        self.list(&admin_path("/corporate/accounts"), &Query::new()).await
    }

    pub async fn get_corporate_account(&self, id: &str) -> Result<CorporateAccount, ApiError> {
        self.client
            .get(&admin_path(&format!("/corporate/accounts/{}", id)))
            .await
    }

    pub async fn corporate_analytics(&self, id: &str) -> Result<Stats, ApiError> {
        self.client
            .get(&admin_path(&format!("/corporate/accounts/{}/analytics", id)))
            .await
    }

    pub async fn create_corporate_account<B: Serialize + ?Sized>(&self, body: &B) -> Result<CorporateAccount, ApiError> {
        self.client.post(&admin_path("/corporate/accounts"), body).await
    }

    pub async fn update_corporate_account<B: Serialize + ?Sized>(
        &self,
        id: &str,
        body: &B,
    ) -> Result<CorporateAccount, ApiError> {
        self.client
            .put(&admin_path(&format!("/corporate/accounts/{}", id)), body)
            .await
    }

    pub async fn add_corporate_users(&self, id: &str, emails: Vec<String>) -> Result<CorporateAccount, ApiError> {
        self.client
            .post(
                &admin_path(&format!("/corporate/accounts/{}/users", id)),
                &AddCorporateUsersRequest { emails },
            )
            .await
    }

    pub async fn remove_corporate_user(&self, id: &str, user_id: &str) -> Result<(), ApiError> {
        self.remove(&admin_path(&format!("/corporate/accounts/{}/users/{}", id, user_id)))
            .await
    }

    pub async fn activate_corporate_account(&self, id: &str) -> Result<CorporateAccount, ApiError> {
        self.client
            .post_empty(&admin_path(&format!("/corporate/accounts/{}/activate", id)))
            .await
    }

    pub async fn deactivate_corporate_account(&self, id: &str) -> Result<CorporateAccount, ApiError> {
        self.client
            .post_empty(&admin_path(&format!("/corporate/accounts/{}/deactivate", id)))
            .await
    }
}
