use anyhow::Result;
use clap::Subcommand;

use rigfit_core::models::{DifficultyLevel, ExerciseListParams};

use crate::context::Context;
use crate::output::print_json;

#[derive(Subcommand, Debug)]
pub enum ExerciseCommands {
    #[command(about = "List exercises")]
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        difficulty: Option<DifficultyLevel>,
        #[arg(long)]
        bodyweight: Option<bool>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        offset: Option<u32>,
    },

    #[command(about = "Show one exercise")]
    Get { id: String },

    #[command(about = "Library statistics")]
    Stats,

    #[command(about = "Known exercise categories")]
    Categories,

    #[command(about = "Known muscle groups")]
    MuscleGroups,

    #[command(about = "Known equipment")]
    Equipment,
}

pub async fn handle(ctx: &Context, cmd: ExerciseCommands) -> Result<()> {
    ctx.require_login()?;
    let admin = &ctx.admin;

    match cmd {
        ExerciseCommands::List {
            search,
            category,
            difficulty,
            bodyweight,
            limit,
            offset,
        } => {
            let params = ExerciseListParams {
                search,
                category,
                difficulty,
                is_bodyweight: bodyweight,
                limit,
                offset,
            };
            print_json(&admin.list_exercises(&params).await?)
        }
        ExerciseCommands::Get { id } => print_json(&admin.get_exercise(&id).await?),
        ExerciseCommands::Stats => print_json(&admin.exercise_stats().await?),
        ExerciseCommands::Categories => print_json(&admin.exercise_categories().await?),
        ExerciseCommands::MuscleGroups => print_json(&admin.muscle_groups().await?),
        ExerciseCommands::Equipment => print_json(&admin.equipment().await?),
    }
}
