use anyhow::Result;
use chrono::NaiveDate;
use clap::Subcommand;

use rigfit_core::models::{TipCategory, TipGenerateRequest, TipListParams, TipMediaRequest};

use super::BodyArgs;
use crate::context::Context;
use crate::output::{print_done, print_json};

#[derive(Subcommand, Debug)]
pub enum TipCommands {
    #[command(about = "List tips")]
    List {
        #[arg(long)]
        category: Option<TipCategory>,
        #[arg(long, help = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
        #[arg(long)]
        ai_generated: Option<bool>,
        #[arg(long)]
        active: Option<bool>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        skip: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },

    #[command(about = "Show one tip")]
    Get { id: String },

    #[command(about = "Tip engagement analytics")]
    Analytics,

    #[command(about = "Create a tip")]
    Create {
        #[command(flatten)]
        body: BodyArgs,
    },

    #[command(about = "Update a tip")]
    Update {
        id: String,
        #[command(flatten)]
        body: BodyArgs,
    },

    #[command(about = "Delete a tip")]
    Delete { id: String },

    #[command(about = "Generate tips for specific dates")]
    Generate {
        #[arg(long = "date", required = true, num_args = 1.., help = "YYYY-MM-DD, repeatable")]
        dates: Vec<NaiveDate>,
        #[arg(long = "category", num_args = 1..)]
        categories: Vec<TipCategory>,
        #[arg(long, help = "Use the bulk generator")]
        bulk: bool,
    },

    #[command(about = "Regenerate a tip's audio")]
    RegenerateAudio { id: String },

    #[command(about = "Attach media to a tip")]
    Media {
        id: String,
        #[arg(long)]
        media_type: String,
        #[arg(long)]
        media_url: String,
    },

    #[command(about = "Validate a tip")]
    Validate { id: String },

    #[command(about = "List tip templates")]
    Templates,

    #[command(about = "Create a tip template")]
    CreateTemplate {
        #[command(flatten)]
        body: BodyArgs,
    },

    #[command(about = "Update a tip template")]
    UpdateTemplate {
        id: String,
        #[command(flatten)]
        body: BodyArgs,
    },

    #[command(about = "Delete a tip template")]
    DeleteTemplate { id: String },
}

pub async fn handle(ctx: &Context, cmd: TipCommands) -> Result<()> {
    ctx.require_login()?;
    let admin = &ctx.admin;

    match cmd {
        TipCommands::List {
            category,
            date,
            ai_generated,
            active,
            search,
            skip,
            limit,
        } => {
            let params = TipListParams {
                skip,
                limit,
                category,
                scheduled_date: date,
                is_ai_generated: ai_generated,
                is_active: active,
                search,
            };
            print_json(&admin.list_tips(&params).await?)
        }
        TipCommands::Get { id } => print_json(&admin.get_tip(&id).await?),
        TipCommands::Analytics => print_json(&admin.tip_analytics().await?),
        TipCommands::Create { body } => print_json(&admin.create_tip(&body.read()?).await?),
        TipCommands::Update { id, body } => print_json(&admin.update_tip(&id, &body.read()?).await?),
        TipCommands::Delete { id } => {
            admin.delete_tip(&id).await?;
            print_done("Tip deleted");
            Ok(())
        }
        TipCommands::Generate {
            dates,
            categories,
            bulk,
        } => {
            let request = TipGenerateRequest { dates, categories };
            let tips = if bulk {
                admin.bulk_generate_tips(&request).await?
            } else {
                admin.generate_tips(&request).await?
            };
            print_json(&tips)
        }
        TipCommands::RegenerateAudio { id } => print_json(&admin.regenerate_tip_audio(&id).await?),
        TipCommands::Media {
            id,
            media_type,
            media_url,
        } => {
            let request = TipMediaRequest {
                media_type,
                media_url,
            };
            print_json(&admin.attach_tip_media(&id, &request).await?)
        }
        TipCommands::Validate { id } => {
            let validation = admin.validate_tip(&id).await?;
            for error in &validation.errors {
                eprintln!("error: {}", error);
            }
            print_json(&validation)
        }
        TipCommands::Templates => print_json(&admin.list_tip_templates().await?),
        TipCommands::CreateTemplate { body } => {
            print_json(&admin.create_tip_template(&body.read()?).await?)
        }
        TipCommands::UpdateTemplate { id, body } => {
            print_json(&admin.update_tip_template(&id, &body.read()?).await?)
        }
        TipCommands::DeleteTemplate { id } => {
            admin.delete_tip_template(&id).await?;
            print_done("Template deleted");
            Ok(())
        }
    }
}
