use anyhow::Result;
use clap::Subcommand;

use rigfit_core::models::{ApiKeyCreateRequest, ApiKeyScope};
use rigfit_core::utils::mask_secret;

use crate::context::Context;
use crate::output::{print_done, print_json};

#[derive(Subcommand, Debug)]
pub enum ApiKeyCommands {
    #[command(about = "List API keys")]
    List,

    #[command(about = "Create an API key; the secret is shown once")]
    Create {
        name: String,
        #[arg(long = "scope", required = true, num_args = 1.., help = "e.g. workouts:read, repeatable")]
        scopes: Vec<ApiKeyScope>,
        #[arg(long, help = "Expire after this many days")]
        expires_in_days: Option<i64>,
    },

    #[command(about = "Revoke an API key")]
    Revoke { id: String },
}

pub async fn handle(ctx: &Context, cmd: ApiKeyCommands) -> Result<()> {
    ctx.require_login()?;
    let admin = &ctx.admin;

    match cmd {
        ApiKeyCommands::List => {
            let mut keys = admin.list_api_keys().await?;
            for key in &mut keys {
                key.key = key.key.as_deref().map(mask_secret);
            }
            print_json(&keys)
        }
        ApiKeyCommands::Create {
            name,
            scopes,
            expires_in_days,
        } => {
            let mut request = ApiKeyCreateRequest::new(name, scopes);
            if let Some(days) = expires_in_days {
                request = request.expiring_in_days(days);
            }
            let key = admin.create_api_key(&request).await?;
            eprintln!("Store this key now; it will not be shown again.");
            print_json(&key)
        }
        ApiKeyCommands::Revoke { id } => {
            admin.revoke_api_key(&id).await?;
            print_done("API key revoked");
            Ok(())
        }
    }
}
