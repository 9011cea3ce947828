use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;
use tracing::{debug, info, warn};

use super::Subscription;
use crate::api::{ApiClient, ApiError};
use crate::models::{AuthResponse, LoginRequest, OAuthLoginRequest, User};

const LOGIN_PATH: &str = "/auth/login";
const OAUTH_LOGIN_PATH: &str = "/auth/oauth/login";
const LOGOUT_PATH: &str = "/auth/logout";
const ME_PATH: &str = "/auth/me";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Access denied. Admin privileges required.")]
    NotAdmin,

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Default)]
struct SessionState {
    user: Option<User>,
    initialized: bool,
}

/// Signed-in admin session on top of a shared [`ApiClient`].
///
/// Tracks the current user and drops it when the client reports that the
/// session expired.
pub struct AuthSession {
    client: ApiClient,
    state: Arc<RwLock<SessionState>>,
    expiry: Subscription,
}

impl AuthSession {
    pub fn new(client: ApiClient) -> Self {
        let state = Arc::new(RwLock::new(SessionState::default()));
        let weak = Arc::downgrade(&state);
        let expiry = client.on_session_expired(move || {
            if let Some(state) = weak.upgrade() {
                state.write().unwrap_or_else(|e| e.into_inner()).user = None;
            }
        });
        Self {
            client,
            state,
            expiry,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Password login. Only `admin` and `super_admin` accounts are accepted.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, SessionError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let auth: AuthResponse = self
            .client
            .post(LOGIN_PATH, &request)
            .await
            .map_err(|e| match e {
                ApiError::SessionExpired | ApiError::Request { status: 401, .. } => {
                    SessionError::InvalidCredentials
                }
                other => SessionError::Api(other),
            })?;

        self.client
            .set_tokens(auth.session.access_token, auth.session.refresh_token);

        let me: User = self.client.get(ME_PATH).await?;
        if !me.is_admin() {
            warn!(role = ?me.role, "Rejected login for non-admin account");
            self.client.clear_tokens();
            return Err(SessionError::NotAdmin);
        }

        info!("Signed in");
        self.set_user(me.clone());
        Ok(me)
    }

    /// Google sign-in with an ID token from the Google identity flow.
    pub async fn google_login(&self, id_token: &str) -> Result<User, SessionError> {
        let auth: AuthResponse = self
            .client
            .post(OAUTH_LOGIN_PATH, &OAuthLoginRequest::google(id_token))
            .await?;

        self.client
            .set_tokens(auth.session.access_token, auth.session.refresh_token);

        let me: User = self.client.get(ME_PATH).await?;
        info!("Signed in with Google");
        self.set_user(me.clone());
        Ok(me)
    }

    /// Revoke the session server-side (best effort) and forget it locally.
    pub async fn logout(&self) {
        if let Err(e) = self.client.post_empty::<serde_json::Value>(LOGOUT_PATH).await {
            debug!(error = %e, "Ignoring logout failure");
        }
        self.client.clear_tokens();
        self.write_state().user = None;
        info!("Signed out");
    }

    /// Restore a session from the persisted refresh token.
    ///
    /// Runs once; later calls return the cached outcome. Returns whether a
    /// user is signed in.
    pub async fn initialize(&self) -> bool {
        if self.is_initialized() {
            return self.is_authenticated();
        }

        if !self.client.has_refresh_token() {
            self.write_state().initialized = true;
            return false;
        }

        match self.client.get::<User>(ME_PATH).await {
            Ok(me) => {
                debug!("Restored session from refresh token");
                self.write_state().user = Some(me);
            }
            Err(e) => {
                debug!(error = %e, "Could not restore session");
                self.client.clear_tokens();
            }
        }

        let mut state = self.write_state();
        state.initialized = true;
        state.user.is_some()
    }

    pub fn user(&self) -> Option<User> {
        self.read_state().user.clone()
    }

    pub fn set_user(&self, user: User) {
        self.write_state().user = Some(user);
    }

    pub fn is_authenticated(&self) -> bool {
        self.read_state().user.is_some()
    }

    pub fn is_initialized(&self) -> bool {
        self.read_state().initialized
    }

    fn read_state(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Drop for AuthSession {
    fn drop(&mut self) {
        self.expiry.unsubscribe();
    }
}
