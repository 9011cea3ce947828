//! Authentication module for managing admin sessions and credentials.
//!
//! This module provides:
//! - `AuthSession`: login, logout and session bootstrap on top of `ApiClient`
//! - `RefreshTokenStore`: durable storage for the refresh token (file,
//!   OS keychain via keyring, or memory)
//! - `SessionListeners`: callbacks fired when a session cannot be refreshed
//!
//! Access tokens are never persisted; only the refresh token survives a
//! restart.

pub mod listeners;
pub mod session;
pub mod store;

pub use listeners::{SessionListeners, Subscription};
pub use session::{AuthSession, SessionError};
pub use store::{FileTokenStore, KeyringTokenStore, MemoryTokenStore, RefreshTokenStore, TokenStoreKind};
