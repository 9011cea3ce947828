//! Core library for the RigFit admin console.
//!
//! - [`api`]: authenticated HTTP client with token refresh
//! - [`auth`]: admin session, session-expired listeners, refresh-token storage
//! - [`admin`]: typed wrappers for the `/admin` endpoints
//! - [`models`]: wire types
//! - [`config`]: persisted console configuration

pub mod admin;
pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod utils;

pub use admin::AdminApi;
pub use api::{ApiClient, ApiError, RequestOptions};
pub use auth::{AuthSession, SessionError};
pub use config::Config;
