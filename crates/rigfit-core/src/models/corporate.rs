use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct CorporateUser {
    pub user_id: String,
    pub email: String,
    pub joined_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct CorporateAccount {
    pub id: String,
    pub name: String,
    pub contact_email: String,
    pub max_users: u32,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub users: Option<Vec<CorporateUser>>,
}

impl CorporateAccount {
    /// Seats left before `max_users`, if the member list was included
    pub fn seats_remaining(&self) -> Option<u32> {
        self.users
            .as_ref()
            .map(|u| self.max_users.saturating_sub(u.len() as u32))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct CorporateAccountRequest {
    pub name: String,
    pub contact_email: String,
    pub max_users: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct AddCorporateUsersRequest {
    pub emails: Vec<String>,
}
