use anyhow::Result;
use clap::Subcommand;

use rigfit_core::models::{
    BlueprintCategory, BlueprintListParams, DifficultyLevel, FocusType, LocationTag, PositionTag,
    WorkoutType,
};

use super::BodyArgs;
use crate::context::Context;
use crate::output::{print_done, print_json};

#[derive(Subcommand, Debug)]
pub enum BlueprintCommands {
    #[command(about = "List blueprints")]
    List {
        #[arg(long = "type", help = "ignite, reset or unwind")]
        workout_type: Option<WorkoutType>,
        #[arg(long)]
        category: Option<BlueprintCategory>,
        #[arg(long)]
        focus: Option<FocusType>,
        #[arg(long)]
        difficulty: Option<DifficultyLevel>,
        #[arg(long)]
        position: Option<PositionTag>,
        #[arg(long)]
        location: Option<LocationTag>,
        #[arg(long)]
        active: Option<bool>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        page_size: Option<u32>,
    },

    #[command(about = "Show one blueprint")]
    Get { id: String },

    #[command(about = "Active blueprint counts per workout type")]
    Coverage,

    #[command(about = "Create a blueprint")]
    Create {
        #[command(flatten)]
        body: BodyArgs,
    },

    #[command(about = "Update a blueprint")]
    Update {
        id: String,
        #[command(flatten)]
        body: BodyArgs,
    },

    #[command(about = "Delete a blueprint")]
    Delete { id: String },

    #[command(about = "Activate a blueprint")]
    Activate { id: String },

    #[command(about = "Deactivate a blueprint")]
    Deactivate { id: String },

    #[command(about = "Load the built-in blueprint set")]
    Seed,
}

pub async fn handle(ctx: &Context, cmd: BlueprintCommands) -> Result<()> {
    ctx.require_login()?;
    let admin = &ctx.admin;

    match cmd {
        BlueprintCommands::List {
            workout_type,
            category,
            focus,
            difficulty,
            position,
            location,
            active,
            search,
            page,
            page_size,
        } => {
            let params = BlueprintListParams {
                workout_type,
                category,
                focus,
                difficulty,
                position_tag: position,
                location_tag: location,
                is_active: active,
                search,
                page,
                page_size,
                ..Default::default()
            };
            print_json(&admin.list_blueprints(&params).await?)
        }
        BlueprintCommands::Get { id } => {
            let blueprint = admin.get_blueprint(&id).await?;
            eprintln!(
                "{} rounds, about {}s",
                blueprint.default_rounds,
                blueprint.default_duration_seconds()
            );
            print_json(&blueprint)
        }
        BlueprintCommands::Coverage => {
            let coverage = admin.blueprint_coverage().await?;
            for item in coverage.missing() {
                eprintln!("warning: {} is below its coverage threshold", item.workout_type);
            }
            print_json(&coverage)
        }
        BlueprintCommands::Create { body } => print_json(&admin.create_blueprint(&body.read()?).await?),
        BlueprintCommands::Update { id, body } => {
            print_json(&admin.update_blueprint(&id, &body.read()?).await?)
        }
        BlueprintCommands::Delete { id } => {
            admin.delete_blueprint(&id).await?;
            print_done("Blueprint deleted");
            Ok(())
        }
        BlueprintCommands::Activate { id } => print_json(&admin.activate_blueprint(&id).await?),
        BlueprintCommands::Deactivate { id } => print_json(&admin.deactivate_blueprint(&id).await?),
        BlueprintCommands::Seed => print_json(&admin.seed_blueprints().await?),
    }
}
