use anyhow::Result;
use clap::Subcommand;

use super::BodyArgs;
use crate::context::Context;
use crate::output::{print_done, print_json};

#[derive(Subcommand, Debug)]
pub enum QuoteCommands {
    #[command(about = "List quotes")]
    List {
        #[arg(long, help = "Only quotes suitable for this energy level (1-10)")]
        energy: Option<u8>,
    },

    #[command(about = "Known quote categories")]
    Categories,

    #[command(about = "Create a quote")]
    Create {
        #[command(flatten)]
        body: BodyArgs,
    },

    #[command(about = "Change fields of a quote")]
    Update {
        id: String,
        #[command(flatten)]
        body: BodyArgs,
    },

    #[command(about = "Delete a quote")]
    Delete { id: String },
}

pub async fn handle(ctx: &Context, cmd: QuoteCommands) -> Result<()> {
    ctx.require_login()?;
    let admin = &ctx.admin;

    match cmd {
        QuoteCommands::List { energy } => {
            let mut quotes = admin.list_quotes().await?;
            if let Some(level) = energy {
                quotes.retain(|q| q.matches_energy(level));
            }
            print_json(&quotes)
        }
        QuoteCommands::Categories => print_json(&admin.quote_categories().await?),
        QuoteCommands::Create { body } => print_json(&admin.create_quote(&body.read()?).await?),
        QuoteCommands::Update { id, body } => print_json(&admin.update_quote(&id, &body.read()?).await?),
        QuoteCommands::Delete { id } => {
            admin.delete_quote(&id).await?;
            print_done("Quote deleted");
            Ok(())
        }
    }
}
