use super::{admin_path, AdminApi};
use crate::api::{ApiError, Query};
use crate::models::{
    AdminUser, MessageResponse, PromoteDemoteResponse, SearchUser, SearchUsersParams, SoftDeletedUser,
    TransferSuperAdminResponse,
};

impl AdminApi {
    pub async fn search_users(&self, params: &SearchUsersParams) -> Result<Vec<SearchUser>, ApiError> {
        self.list(&admin_path("/users/search"), &params.to_query()).await
    }

    pub async fn list_admins(&self) -> Result<Vec<AdminUser>, ApiError> {
        self.list(&admin_path("/users/admins"), &Query::new()).await
    }

    pub async fn list_soft_deleted_users(&self) -> Result<Vec<SoftDeletedUser>, ApiError> {
        self.list(&admin_path("/users/soft-deleted"), &Query::new()).await
    }

    pub async fn promote_user(&self, user_id: &str) -> Result<PromoteDemoteResponse, ApiError> {
        self.client
            .post_empty(&admin_path(&format!("/users/{}/promote", user_id)))
            .await
    }

    pub async fn demote_user(&self, user_id: &str) -> Result<PromoteDemoteResponse, ApiError> {
        self.client
            .post_empty(&admin_path(&format!("/users/{}/demote", user_id)))
            .await
    }

    /// Hand the super-admin role to `user_id`. The caller becomes a plain admin.
    pub async fn transfer_super_admin(&self, user_id: &str) -> Result<TransferSuperAdminResponse, ApiError> {
        self.client
            .post_empty(&admin_path(&format!("/users/transfer-super-admin/{}", user_id)))
            .await
    }

    /// Permanently delete a soft-deleted user
    pub async fn hard_delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        let path = Query::new()
            .push("confirm", true)
            .append_to(&admin_path(&format!("/users/hard-delete/{}", user_id)));
        self.remove(&path).await
    }

    pub async fn restore_user(&self, user_id: &str) -> Result<MessageResponse, ApiError> {
        self.client
            .post_empty(&admin_path(&format!("/users/restore/{}", user_id)))
            .await
    }
}
