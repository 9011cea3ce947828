//! REST API client module for the RigFit backend.
//!
//! This module provides the `ApiClient` for communicating with the
//! RigFit API. Requests carry a short-lived bearer access token; a
//! longer-lived refresh token (persisted via `auth::RefreshTokenStore`)
//! is exchanged at `/auth/refresh` when the access token is rejected.

pub mod client;
pub mod error;
pub mod query;
pub mod request;

pub use client::ApiClient;
pub use reqwest::Method;
pub use error::ApiError;
pub use query::Query;
pub use request::RequestOptions;
