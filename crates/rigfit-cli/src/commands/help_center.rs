use anyhow::Result;
use clap::Subcommand;

use super::BodyArgs;
use crate::context::Context;
use crate::output::{print_done, print_json};

#[derive(Subcommand, Debug)]
pub enum HelpCenterCommands {
    #[command(about = "List help categories")]
    Categories,

    #[command(about = "Create a help category")]
    CreateCategory {
        #[command(flatten)]
        body: BodyArgs,
    },

    #[command(about = "Update a help category")]
    UpdateCategory {
        id: String,
        #[command(flatten)]
        body: BodyArgs,
    },

    #[command(about = "Delete a help category")]
    DeleteCategory { id: String },

    #[command(about = "List help articles")]
    Articles,

    #[command(about = "Create a help article")]
    CreateArticle {
        #[command(flatten)]
        body: BodyArgs,
    },

    #[command(about = "Update a help article")]
    UpdateArticle {
        id: String,
        #[command(flatten)]
        body: BodyArgs,
    },

    #[command(about = "Delete a help article")]
    DeleteArticle { id: String },
}

pub async fn handle(ctx: &Context, cmd: HelpCenterCommands) -> Result<()> {
    ctx.require_login()?;
    let admin = &ctx.admin;

    match cmd {
        HelpCenterCommands::Categories => print_json(&admin.list_help_categories().await?),
        HelpCenterCommands::CreateCategory { body } => {
            print_json(&admin.create_help_category(&body.read()?).await?)
        }
        HelpCenterCommands::UpdateCategory { id, body } => {
            print_json(&admin.update_help_category(&id, &body.read()?).await?)
        }
        HelpCenterCommands::DeleteCategory { id } => {
            admin.delete_help_category(&id).await?;
            print_done("Category deleted");
            Ok(())
        }
        HelpCenterCommands::Articles => print_json(&admin.list_help_articles().await?),
        HelpCenterCommands::CreateArticle { body } => {
            print_json(&admin.create_help_article(&body.read()?).await?)
        }
        HelpCenterCommands::UpdateArticle { id, body } => {
            print_json(&admin.update_help_article(&id, &body.read()?).await?)
        }
        HelpCenterCommands::DeleteArticle { id } => {
            admin.delete_help_article(&id).await?;
            print_done("Article deleted");
            Ok(())
        }
    }
}
