//! Utility functions for string formatting and manipulation.

pub mod format;

pub use format::{mask_secret, truncate};
