//! API client for communicating with the RigFit backend.
//!
//! `ApiClient` owns the session credentials and is the only path to the
//! network. Every request goes through [`ApiClient::fetch`], which attaches
//! the bearer token, refreshes once on 401/403 and retries the request once.
//!
//! Concurrent callers that hit an expired token share a single refresh call:
//! the first caller stores a shared future in `pending_refresh`, later callers
//! await a clone of it, and the slot is cleared as soon as it settles.

use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt, Shared};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::{ApiError, RequestOptions};
use crate::auth::{RefreshTokenStore, SessionListeners, Subscription};
use crate::config::Config;
use crate::models::{RefreshRequest, TokenPair};

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds.
/// 30s allows for slow generation endpoints while still failing eventually.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Endpoint that exchanges a refresh token for a new token pair
pub const REFRESH_PATH: &str = "/auth/refresh";

type PendingRefresh = Shared<BoxFuture<'static, bool>>;

#[derive(Default)]
struct Credentials {
    access: Option<String>,
    refresh: Option<String>,
}

struct ClientInner {
    http: Client,
    base_url: String,
    credentials: RwLock<Credentials>,
    store: Arc<dyn RefreshTokenStore>,
    pending_refresh: Mutex<Option<PendingRefresh>>,
    listeners: SessionListeners,
}

/// Authenticated client for the RigFit REST API.
/// Clone is cheap - all clones share credentials, the refresh slot and the
/// reqwest connection pool.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

impl ApiClient {
    /// Create a client against `base_url`, restoring any refresh token
    /// already held by `store`.
    ///
    /// An empty base URL means paths are used as given.
    pub fn new(base_url: impl Into<String>, store: Arc<dyn RefreshTokenStore>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        let refresh = match store.load() {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Failed to load stored refresh token");
                None
            }
        };
        if refresh.is_some() {
            debug!("Restored refresh token from storage");
        }

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url: base_url.into().trim_end_matches('/').to_string(),
                credentials: RwLock::new(Credentials {
                    access: None,
                    refresh,
                }),
                store,
                pending_refresh: Mutex::new(None),
                listeners: SessionListeners::new(),
            }),
        })
    }

    /// Create a client from the resolved configuration and its token store
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let store = config.token_store()?;
        Ok(Self::new(config.api_url(), store)?)
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    // ------------------------------------------------------------------------
    // Credential state
    // ------------------------------------------------------------------------

    /// Store a new token pair and persist the refresh token immediately
    pub fn set_tokens(&self, access: impl Into<String>, refresh: impl Into<String>) {
        let refresh = refresh.into();
        {
            let mut creds = self.write_credentials();
            creds.access = Some(access.into());
            creds.refresh = Some(refresh.clone());
        }
        if let Err(e) = self.inner.store.save(&refresh) {
            warn!(error = %e, "Failed to persist refresh token");
        }
    }

    /// Forget both tokens and delete the persisted refresh token
    pub fn clear_tokens(&self) {
        self.take_credentials();
    }

    /// Clear both tokens, returning whether any were held
    fn take_credentials(&self) -> bool {
        let held = {
            let mut creds = self.write_credentials();
            let held = creds.access.is_some() || creds.refresh.is_some();
            creds.access = None;
            creds.refresh = None;
            held
        };
        if let Err(e) = self.inner.store.remove() {
            warn!(error = %e, "Failed to remove persisted refresh token");
        }
        held
    }

    pub fn access_token(&self) -> Option<String> {
        self.read_credentials().access.clone()
    }

    pub fn has_refresh_token(&self) -> bool {
        self.read_credentials().refresh.is_some()
    }

    fn refresh_token(&self) -> Option<String> {
        self.read_credentials().refresh.clone()
    }

    /// Register a callback for when the session can no longer be refreshed.
    ///
    /// Listeners run after both tokens have been cleared and before the
    /// failing call returns [`ApiError::SessionExpired`].
    pub fn on_session_expired<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.inner.listeners.subscribe(listener)
    }

    #[cfg(test)]
    pub(crate) fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }

    fn read_credentials(&self) -> RwLockReadGuard<'_, Credentials> {
        self.inner.credentials.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_credentials(&self) -> RwLockWriteGuard<'_, Credentials> {
        self.inner.credentials.write().unwrap_or_else(|e| e.into_inner())
    }

    fn pending_refresh(&self) -> MutexGuard<'_, Option<PendingRefresh>> {
        self.inner.pending_refresh.lock().unwrap_or_else(|e| e.into_inner())
    }

    // ------------------------------------------------------------------------
    // Requests
    // ------------------------------------------------------------------------

    /// Issue an authenticated request and decode the JSON response.
    ///
    /// A 204 response decodes `T` from JSON `null`, so callers expecting no
    /// content should ask for `()` or `Option<_>`.
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<T, ApiError> {
        // Cold start: only the persisted refresh token survived
        if self.access_token().is_none() && self.has_refresh_token() {
            debug!(path, "No access token held, refreshing before request");
            self.try_refresh().await;
        }

        let sent_with = self.access_token();
        let response = self.send(path, &options, sent_with.as_deref()).await?;
        let status = response.status();

        if is_auth_failure(status) {
            if !self.has_refresh_token() {
                self.expire_session();
                return Err(ApiError::SessionExpired);
            }

            // A concurrent refresh may have finished while this request was out
            let renewed = self
                .access_token()
                .is_some_and(|current| sent_with.as_deref() != Some(current.as_str()));
            if renewed {
                debug!(path, "Access token changed in flight, retrying without refresh");
            }

            if renewed || self.try_refresh().await {
                debug!(path, "Retrying request with refreshed token");
                let token = self.access_token();
                let retry = self.send(path, &options, token.as_deref()).await?;
                if !retry.status().is_success() {
                    return Err(Self::error_from(retry).await);
                }
                return Self::decode(retry).await;
            }

            // Only the caller that clears the credentials broadcasts
            if self.take_credentials() {
                warn!("Token refresh failed, session expired");
                self.inner.listeners.notify();
            }
            return Err(ApiError::SessionExpired);
        }

        if !status.is_success() {
            return Err(Self::error_from(response).await);
        }

        Self::decode(response).await
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.fetch(path, RequestOptions::get()).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.fetch(path, RequestOptions::post().json(body)?).await
    }

    /// POST without a request body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.fetch(path, RequestOptions::post()).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.fetch(path, RequestOptions::put().json(body)?).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.fetch(path, RequestOptions::patch().json(body)?).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.fetch(path, RequestOptions::delete()).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url, path)
    }

    /// Default headers, then caller headers, then the bearer token.
    fn request_headers(&self, extra: &HeaderMap, token: Option<&str>) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(extra.clone());

        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                ApiError::InvalidRequest("access token is not a valid header value".to_string())
            })?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }
        Ok(headers)
    }

    async fn send(&self, path: &str, options: &RequestOptions, token: Option<&str>) -> Result<Response, ApiError> {
        let mut request = self
            .inner
            .http
            .request(options.method.clone(), self.url(path))
            .headers(self.request_headers(&options.headers, token)?);
        if let Some(ref body) = options.body {
            request = request.body(body.clone());
        }

        debug!(method = %options.method, path, "Sending request");
        let response = request.send().await?;
        debug!(method = %options.method, path, status = response.status().as_u16(), "Received response");
        Ok(response)
    }

    /// Turn a non-success response into a `Request` error
    async fn error_from(response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        ApiError::from_status(status, &body)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if response.status() == StatusCode::NO_CONTENT {
            return serde_json::from_value(serde_json::Value::Null).map_err(|e| {
                ApiError::InvalidResponse(format!("expected a body but got 204 No Content: {}", e))
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return serde_json::from_value(serde_json::Value::Null)
                .map_err(|e| ApiError::invalid_body(&e, &body));
        }
        serde_json::from_str(&body).map_err(|e| ApiError::invalid_body(&e, &body))
    }

    fn expire_session(&self) {
        warn!("Session expired, clearing credentials");
        self.take_credentials();
        self.inner.listeners.notify();
    }

    // ------------------------------------------------------------------------
    // Refresh
    // ------------------------------------------------------------------------

    /// Refresh immediately, bypassing the shared in-flight refresh.
    /// Returns `false` when no refresh token is held.
    pub async fn force_refresh(&self) -> bool {
        if !self.has_refresh_token() {
            return false;
        }
        self.refresh_session().await
    }

    /// Join the in-flight refresh, or start one if none is pending.
    async fn try_refresh(&self) -> bool {
        let pending = {
            let mut slot = self.pending_refresh();
            match slot.as_ref() {
                Some(pending) => {
                    debug!("Joining in-flight token refresh");
                    pending.clone()
                }
                None => {
                    let client = self.clone();
                    let fut: BoxFuture<'static, bool> =
                        async move { client.refresh_session().await }.boxed();
                    let shared = fut.shared();
                    *slot = Some(shared.clone());
                    shared
                }
            }
        };

        let refreshed = pending.clone().await;

        let mut slot = self.pending_refresh();
        if slot.as_ref().is_some_and(|current| current.ptr_eq(&pending)) {
            *slot = None;
        }
        refreshed
    }

    /// Exchange the held refresh token for a new pair. Never errors; any
    /// failure is reported as `false`.
    async fn refresh_session(&self) -> bool {
        let Some(refresh_token) = self.refresh_token() else {
            return false;
        };

        debug!("Refreshing access token");
        let response = match self
            .inner
            .http
            .post(self.url(REFRESH_PATH))
            .json(&RefreshRequest {
                refresh_token: &refresh_token,
            })
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Token refresh request failed");
                return false;
            }
        };

        if !response.status().is_success() {
            warn!(status = response.status().as_u16(), "Token refresh rejected");
            return false;
        }

        match response.json::<TokenPair>().await {
            Ok(pair) => {
                self.set_tokens(pair.access_token, pair.refresh_token);
                info!("Access token refreshed");
                true
            }
            Err(e) => {
                warn!(error = %e, "Failed to parse token refresh response");
                false
            }
        }
    }
}

fn is_auth_failure(status: StatusCode) -> bool {
    status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
}
