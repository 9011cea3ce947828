//! Typed wrappers for the `/admin` endpoints.
//!
//! Each resource lives in its own file as an `impl AdminApi` block. All
//! calls go through [`ApiClient`], so they share its refresh and
//! session-expiry handling.
//!
//! List endpoints decode through `ListResponse`, which accepts both bare
//! arrays and `{data: [...]}`-style envelopes.

mod api_keys;
mod blueprints;
mod corporate;
mod exercises;
mod help_center;
mod pricing;
mod quotes;
mod resets;
mod tips;
mod users;
mod workouts;

use serde::de::{DeserializeOwned, IgnoredAny};

use crate::api::{ApiClient, ApiError, Query};
use crate::models::ListResponse;

/// Common prefix of every admin route
const ADMIN_PREFIX: &str = "/admin";

/// Admin console operations on top of a shared [`ApiClient`].
#[derive(Clone)]
pub struct AdminApi {
    client: ApiClient,
}

impl AdminApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// GET a list endpoint and normalize the body to a `Vec`.
    async fn list<T: DeserializeOwned>(&self, path: &str, query: &Query) -> Result<Vec<T>, ApiError> {
        let list: ListResponse<T> = self.client.get(&query.append_to(path)).await?;
        Ok(list.into_inner())
    }

    /// DELETE and discard whatever body comes back (usually 204).
    async fn remove(&self, path: &str) -> Result<(), ApiError> {
        self.client.delete::<IgnoredAny>(path).await.map(|_| ())
    }
}

fn admin_path(rest: &str) -> String {
    format!("{}{}", ADMIN_PREFIX, rest)
}
