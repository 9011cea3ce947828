use anyhow::{bail, Result};
use tracing::warn;

use rigfit_core::auth::Subscription;
use rigfit_core::{AdminApi, ApiClient, AuthSession, Config};

/// Hint printed when the backend ends the session mid-command
const SESSION_EXPIRED_HINT: &str = "Session expired. Run `rigfit-admin login` to sign in again.";

/// Everything a command needs: configuration, the signed-in session and
/// the admin endpoints, all sharing one `ApiClient`.
pub struct Context {
    pub config: Config,
    pub session: AuthSession,
    pub admin: AdminApi,
    expiry_hint: Subscription,
}

impl Context {
    pub fn new(config: Config) -> Result<Self> {
        let client = ApiClient::from_config(&config)?;
        if client.base_url().is_empty() {
            warn!("No API URL configured; set RIGFIT_API_URL or pass --api-url");
        }

        let expiry_hint = client.on_session_expired(|| eprintln!("{}", SESSION_EXPIRED_HINT));

        Ok(Self {
            config,
            session: AuthSession::new(client.clone()),
            admin: AdminApi::new(client),
            expiry_hint,
        })
    }

    pub fn client(&self) -> &ApiClient {
        self.admin.client()
    }

    /// Fail early when there is no stored session to refresh from
    pub fn require_login(&self) -> Result<()> {
        if !self.client().has_refresh_token() {
            bail!("Not signed in. Run `rigfit-admin login` first.");
        }
        Ok(())
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        self.expiry_hint.unsubscribe();
    }
}
