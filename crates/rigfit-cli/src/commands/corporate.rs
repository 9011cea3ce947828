use anyhow::Result;
use clap::Subcommand;

use super::BodyArgs;
use crate::context::Context;
use crate::output::{print_done, print_json};

#[derive(Subcommand, Debug)]
pub enum CorporateCommands {
    #[command(about = "List corporate accounts")]
    List,

    #[command(about = "Show one corporate account")]
    Get { id: String },

    #[command(about = "Usage analytics for an account")]
    Analytics { id: String },

    #[command(about = "Create a corporate account")]
    Create {
        #[command(flatten)]
        body: BodyArgs,
    },

    #[command(about = "Update a corporate account")]
    Update {
        id: String,
        #[command(flatten)]
        body: BodyArgs,
    },

    #[command(about = "Add members by email")]
    AddUsers {
        id: String,
        #[arg(required = true, num_args = 1..)]
        emails: Vec<String>,
    },

    #[command(about = "Remove a member")]
    RemoveUser { id: String, user_id: String },

    #[command(about = "Activate an account")]
    Activate { id: String },

    #[command(about = "Deactivate an account")]
    Deactivate { id: String },
}

pub async fn handle(ctx: &Context, cmd: CorporateCommands) -> Result<()> {
    ctx.require_login()?;
    let admin = &ctx.admin;

    match cmd {
        CorporateCommands::List => print_json(&admin.list_corporate_accounts().await?),
        CorporateCommands::Get { id } => {
            let account = admin.get_corporate_account(&id).await?;
            if let Some(seats) = account.seats_remaining() {
                eprintln!("{} seats remaining", seats);
            }
            print_json(&account)
        }
        CorporateCommands::Analytics { id } => print_json(&admin.corporate_analytics(&id).await?),
        CorporateCommands::Create { body } => {
            print_json(&admin.create_corporate_account(&body.read()?).await?)
        }
        CorporateCommands::Update { id, body } => {
            print_json(&admin.update_corporate_account(&id, &body.read()?).await?)
        }
        CorporateCommands::AddUsers { id, emails } => {
            print_json(&admin.add_corporate_users(&id, emails).await?)
        }
        CorporateCommands::RemoveUser { id, user_id } => {
            admin.remove_corporate_user(&id, &user_id).await?;
            print_done("Member removed");
            Ok(())
        }
        CorporateCommands::Activate { id } => print_json(&admin.activate_corporate_account(&id).await?),
        CorporateCommands::Deactivate { id } => {
            print_json(&admin.deactivate_corporate_account(&id).await?)
        }
    }
}
