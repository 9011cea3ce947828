use anyhow::{bail, Result};
use clap::Subcommand;

use rigfit_core::models::{SearchUsersParams, Tier};

use crate::context::Context;
use crate::output::{print_done, print_json};

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    #[command(about = "Search users")]
    Search {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        tier: Option<Tier>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        offset: Option<u32>,
    },

    #[command(about = "List admins")]
    Admins,

    #[command(about = "List soft-deleted users")]
    Deleted,

    #[command(about = "Grant the admin role")]
    Promote { user_id: String },

    #[command(about = "Revoke the admin role")]
    Demote { user_id: String },

    #[command(about = "Hand the super-admin role to another admin")]
    TransferSuperAdmin { user_id: String },

    #[command(about = "Permanently delete a soft-deleted user")]
    HardDelete {
        user_id: String,
        #[arg(long, help = "Required; the deletion cannot be undone")]
        yes: bool,
    },

    #[command(about = "Restore a soft-deleted user")]
    Restore { user_id: String },
}

pub async fn handle(ctx: &Context, cmd: UserCommands) -> Result<()> {
    ctx.require_login()?;
    let admin = &ctx.admin;

    match cmd {
        UserCommands::Search {
            email,
            tier,
            limit,
            offset,
        } => {
            let params = SearchUsersParams {
                email,
                tier,
                limit,
                offset,
            };
            print_json(&admin.search_users(&params).await?)
        }
        UserCommands::Admins => print_json(&admin.list_admins().await?),
        UserCommands::Deleted => print_json(&admin.list_soft_deleted_users().await?),
        UserCommands::Promote { user_id } => print_json(&admin.promote_user(&user_id).await?),
        UserCommands::Demote { user_id } => print_json(&admin.demote_user(&user_id).await?),
        UserCommands::TransferSuperAdmin { user_id } => {
            print_json(&admin.transfer_super_admin(&user_id).await?)
        }
        UserCommands::HardDelete { user_id, yes } => {
            if !yes {
                bail!("Refusing to hard-delete {} without --yes", user_id);
            }
            admin.hard_delete_user(&user_id).await?;
            print_done("User permanently deleted");
            Ok(())
        }
        UserCommands::Restore { user_id } => print_json(&admin.restore_user(&user_id).await?),
    }
}
