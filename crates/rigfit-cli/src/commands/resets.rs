use anyhow::Result;
use clap::Subcommand;

use rigfit_core::models::{ResetCategory, ResetDifficulty, ResetListParams};

use super::BodyArgs;
use crate::context::Context;
use crate::output::{print_done, print_json};

#[derive(Subcommand, Debug)]
pub enum ResetCommands {
    #[command(about = "List preset resets")]
    List {
        #[arg(long)]
        category: Option<ResetCategory>,
        #[arg(long)]
        difficulty: Option<ResetDifficulty>,
        #[arg(long)]
        active: Option<bool>,
    },

    #[command(about = "Show one preset reset")]
    Get { id: String },

    #[command(about = "Reset usage analytics")]
    Analytics,

    #[command(about = "Counts per reset category")]
    CategorySummary,

    #[command(about = "Create a preset reset")]
    Create {
        #[command(flatten)]
        body: BodyArgs,
    },

    #[command(about = "Update a preset reset")]
    Update {
        id: String,
        #[command(flatten)]
        body: BodyArgs,
    },

    #[command(about = "Delete a preset reset")]
    Delete { id: String },

    #[command(about = "Activate a preset reset")]
    Activate { id: String },

    #[command(about = "Deactivate a preset reset")]
    Deactivate { id: String },

    #[command(about = "Toggle the featured flag")]
    Feature { id: String },
}

pub async fn handle(ctx: &Context, cmd: ResetCommands) -> Result<()> {
    ctx.require_login()?;
    let admin = &ctx.admin;

    match cmd {
        ResetCommands::List {
            category,
            difficulty,
            active,
        } => {
            let params = ResetListParams {
                category,
                difficulty,
                is_active: active,
            };
            print_json(&admin.list_resets(&params).await?)
        }
        ResetCommands::Get { id } => print_json(&admin.get_reset(&id).await?),
        ResetCommands::Analytics => print_json(&admin.reset_analytics().await?),
        ResetCommands::CategorySummary => print_json(&admin.reset_category_summary().await?),
        ResetCommands::Create { body } => print_json(&admin.create_reset(&body.read()?).await?),
        ResetCommands::Update { id, body } => print_json(&admin.update_reset(&id, &body.read()?).await?),
        ResetCommands::Delete { id } => {
            admin.delete_reset(&id).await?;
            print_done("Reset deleted");
            Ok(())
        }
        ResetCommands::Activate { id } => print_json(&admin.activate_reset(&id).await?),
        ResetCommands::Deactivate { id } => print_json(&admin.deactivate_reset(&id).await?),
        ResetCommands::Feature { id } => print_json(&admin.feature_reset(&id).await?),
    }
}
