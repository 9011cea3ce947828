use anyhow::{Context as _, Result};
use clap::Args;
use serde_json::Value;

use rigfit_core::api::{Method, RequestOptions};

use crate::context::Context;
use crate::output::{print_done, print_json};

#[derive(Args, Debug)]
pub struct RequestArgs {
    #[arg(help = "HTTP method, e.g. GET or POST")]
    pub method: String,

    #[arg(help = "Path relative to the API base, e.g. /admin/quotes")]
    pub path: String,

    #[arg(long, help = "JSON request body")]
    pub data: Option<String>,
}

pub async fn handle(ctx: &Context, args: RequestArgs) -> Result<()> {
    let method = Method::from_bytes(args.method.to_ascii_uppercase().as_bytes())
        .with_context(|| format!("Invalid HTTP method '{}'", args.method))?;

    let mut options = RequestOptions::new(method);
    if let Some(data) = args.data {
        let body: Value = serde_json::from_str(&data).context("Request body is not valid JSON")?;
        options = options.json(&body)?;
    }

    let response: Option<Value> = ctx.client().fetch(&args.path, options).await?;
    match response {
        Some(value) => print_json(&value),
        None => {
            print_done("No content");
            Ok(())
        }
    }
}
