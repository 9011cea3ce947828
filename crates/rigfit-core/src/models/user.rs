use serde::{Deserialize, Serialize};

use super::auth::Role;
use super::tags::Tier;
use crate::api::Query;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct AdminUser {
    pub user_id: String,
    pub email: String,
    pub role: Role,
}

/// Row returned by `/admin/users/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct SearchUser {
    #[serde(alias = "user_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub tier: Option<Tier>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchUsersParams {
    pub email: Option<String>,
    pub tier: Option<Tier>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl SearchUsersParams {
    pub fn to_query(&self) -> Query {
        Query::new()
            .push_opt("email", self.email.as_deref())
            .push_opt("tier", self.tier)
            .push_opt("limit", self.limit)
            .push_opt("offset", self.offset)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct PromoteDemoteResponse {
    pub message: String,
    pub user_id: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct TransferSuperAdminResponse {
    pub message: String,
    pub new_super_admin: AdminUser,
    pub previous_super_admin: AdminUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct SoftDeletedUser {
    pub id: String,
    pub email: String,
    pub deleted_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_transfer_response() {
        let json = r#"{
            "message": "Super admin transferred",
            "new_super_admin": {"user_id": "u-2", "email": "new@rigfit.io", "role": "super_admin"},
            "previous_super_admin": {"user_id": "u-1", "email": "old@rigfit.io", "role": "admin"}
        }"#;
        let resp: TransferSuperAdminResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.new_super_admin.role, Role::SuperAdmin);
        assert_eq!(resp.previous_super_admin.role, Role::Admin);
    }

    #[test]
    fn test_search_user_accepts_user_id_alias() {
        let user: SearchUser =
            serde_json::from_str(r#"{"user_id": "u-5", "email": "d@rigfit.io", "tier": "free"}"#)
                .unwrap();
        assert_eq!(user.id, "u-5");
        assert_eq!(user.tier, Some(Tier::Free));
    }
}
