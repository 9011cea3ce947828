pub mod api_keys;
pub mod auth;
pub mod blueprints;
pub mod corporate;
pub mod exercises;
pub mod help_center;
pub mod pricing;
pub mod quotes;
pub mod request;
pub mod resets;
pub mod tips;
pub mod users;
pub mod workouts;

use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use clap::Args;
use serde_json::Value;

/// JSON request body given inline or read from a file
#[derive(Args, Debug, Clone)]
pub struct BodyArgs {
    #[arg(long, conflicts_with = "file", help = "Request body as inline JSON")]
    pub data: Option<String>,

    #[arg(long, help = "Read the request body from a JSON file")]
    pub file: Option<PathBuf>,
}

impl BodyArgs {
    pub fn read(&self) -> Result<Value> {
        let raw = match (&self.data, &self.file) {
            (Some(data), _) => data.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            (None, None) => bail!("A request body is required (--data or --file)"),
        };
        serde_json::from_str(&raw).context("Request body is not valid JSON")
    }
}
