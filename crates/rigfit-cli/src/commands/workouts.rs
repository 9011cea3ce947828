use anyhow::{Context as _, Result};
use clap::Subcommand;

use rigfit_core::models::{AlternativeRequest, GenerateImmediateRequest, WorkoutType};

use super::BodyArgs;
use crate::context::Context;
use crate::output::{print_done, print_json};

#[derive(Subcommand, Debug)]
pub enum WorkoutCommands {
    #[command(about = "Queue the daily generation run")]
    GenerateDaily,

    #[command(about = "Generate workouts now")]
    Generate {
        #[arg(long, help = "Only this user")]
        user: Option<String>,
        #[arg(long = "type")]
        workout_type: Option<WorkoutType>,
    },

    #[command(about = "Regenerate one workout")]
    Regenerate { id: String },

    #[command(about = "Delete stale generated workouts")]
    Cleanup,

    #[command(about = "List exercise alternatives")]
    Alternatives,

    #[command(about = "Exercise alternative statistics")]
    AlternativeStats,

    #[command(about = "Add an exercise alternative")]
    AddAlternative {
        #[arg(long)]
        primary: String,
        #[arg(long)]
        alternate: String,
        #[arg(long, default_value_t = 1)]
        order: u32,
        #[arg(long)]
        reason: String,
    },

    #[command(about = "Update an exercise alternative")]
    UpdateAlternative {
        id: String,
        #[command(flatten)]
        body: BodyArgs,
    },

    #[command(about = "Delete an exercise alternative")]
    DeleteAlternative { id: String },

    #[command(about = "Add alternatives from a JSON array")]
    BulkAlternatives {
        #[command(flatten)]
        body: BodyArgs,
    },
}

pub async fn handle(ctx: &Context, cmd: WorkoutCommands) -> Result<()> {
    ctx.require_login()?;
    let admin = &ctx.admin;

    match cmd {
        WorkoutCommands::GenerateDaily => print_json(&admin.generate_daily_workouts().await?),
        WorkoutCommands::Generate { user, workout_type } => {
            let request = GenerateImmediateRequest {
                user_id: user,
                workout_type,
            };
            print_json(&admin.generate_immediate_workout(&request).await?)
        }
        WorkoutCommands::Regenerate { id } => print_json(&admin.regenerate_workout(&id).await?),
        WorkoutCommands::Cleanup => print_json(&admin.cleanup_workouts().await?),
        WorkoutCommands::Alternatives => print_json(&admin.list_alternatives().await?),
        WorkoutCommands::AlternativeStats => print_json(&admin.alternative_stats().await?),
        WorkoutCommands::AddAlternative {
            primary,
            alternate,
            order,
            reason,
        } => {
            let request = AlternativeRequest {
                primary_exercise_id: primary,
                alternate_exercise_id: alternate,
                alternate_order: order,
                reason,
            };
            print_json(&admin.create_alternative(&request).await?)
        }
        WorkoutCommands::UpdateAlternative { id, body } => {
            print_json(&admin.update_alternative(&id, &body.read()?).await?)
        }
        WorkoutCommands::DeleteAlternative { id } => {
            admin.delete_alternative(&id).await?;
            print_done("Alternative deleted");
            Ok(())
        }
        WorkoutCommands::BulkAlternatives { body } => {
            let requests: Vec<AlternativeRequest> =
                serde_json::from_value(body.read()?).context("Expected an array of alternatives")?;
            print_json(&admin.bulk_create_alternatives(&requests).await?)
        }
    }
}
