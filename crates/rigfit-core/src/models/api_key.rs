use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

wire_enum! {
    pub enum ApiKeyScope {
        ExercisesRead => "exercises:read",
        BlueprintsRead => "blueprints:read",
        BlueprintsWrite => "blueprints:write",
        WorkoutsRead => "workouts:read",
        WorkoutsWrite => "workouts:write",
        UsersRead => "users:read",
        All => "*",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct ApiKey {
    pub id: String,
    /// Full key, only returned on creation
    #[serde(default)]
    pub key: Option<String>,
    pub key_prefix: String,
    pub name: String,
    #[serde(default)]
    pub scopes: Vec<ApiKeyScope>,
    pub is_active: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ApiKey {
    pub fn is_expired(&self) -> bool {
        self.expires_at.map(|at| at <= Utc::now()).unwrap_or(false)
    }

    pub fn is_usable(&self) -> bool {
        self.is_active && !self.is_expired()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct ApiKeyCreateRequest {
    pub name: String,
    pub scopes: Vec<ApiKeyScope>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl ApiKeyCreateRequest {
    pub fn new(name: impl Into<String>, scopes: Vec<ApiKeyScope>) -> Self {
        Self {
            name: name.into(),
            scopes,
            expires_at: None,
        }
    }

    pub fn expiring_in_days(mut self, days: i64) -> Self {
        self.expires_at = Some(Utc::now() + Duration::days(days));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_api_key() {
        let json = r#"{
            "id": "k-1", "key_prefix": "rf_live_ab", "name": "fleet sync",
            "scopes": ["workouts:read", "*"], "is_active": true,
            "expires_at": null, "created_at": "2025-01-10T08:30:00Z"
        }"#;
        let key: ApiKey = serde_json::from_str(json).unwrap();
        assert_eq!(key.scopes, vec![ApiKeyScope::WorkoutsRead, ApiKeyScope::All]);
        assert!(key.key.is_none());
        assert!(key.is_usable());
    }

    #[test]
    fn test_expired_key_is_not_usable() {
        let json = r#"{
            "id": "k-2", "key_prefix": "rf_live_cd", "name": "old",
            "scopes": [], "is_active": true,
            "expires_at": "2020-01-01T00:00:00Z", "created_at": "2019-01-01T00:00:00Z"
        }"#;
        let key: ApiKey = serde_json::from_str(json).unwrap();
        assert!(key.is_expired());
        assert!(!key.is_usable());
    }

    #[test]
    fn test_create_request_expiry() {
        let req = ApiKeyCreateRequest::new("ci", vec![ApiKeyScope::ExercisesRead]);
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["expires_at"], serde_json::Value::Null);
        assert_eq!(body["scopes"], serde_json::json!(["exercises:read"]));

        let req = req.expiring_in_days(30);
        let expires = req.expires_at.unwrap();
        assert!(expires > Utc::now() + Duration::days(29));
    }
}
