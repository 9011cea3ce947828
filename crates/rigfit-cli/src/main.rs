//! RigFit admin console - command-line front end for the RigFit admin API.
//!
//! Signs in with an admin account, keeps the refresh token between runs and
//! exposes the `/admin` resources as subcommands that print JSON.

mod commands;
mod context;
mod output;

use std::io;
use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    api_keys::ApiKeyCommands, auth::AuthArgs, blueprints::BlueprintCommands,
    corporate::CorporateCommands, exercises::ExerciseCommands, help_center::HelpCenterCommands,
    pricing::PricingCommands, quotes::QuoteCommands, request::RequestArgs, resets::ResetCommands,
    tips::TipCommands, users::UserCommands, workouts::WorkoutCommands,
};
use context::Context;
use rigfit_core::Config;

// ============================================================================
// Constants
// ============================================================================

/// Log file written inside the cache directory when `--log-file` is set
const LOG_FILE_NAME: &str = "rigfit-admin.log";

#[derive(Parser)]
#[command(name = "rigfit-admin")]
#[command(about = "RigFit admin console")]
#[command(version)]
struct Cli {
    #[arg(long, global = true, env = "RIGFIT_API_URL", help = "Backend base URL")]
    api_url: Option<String>,

    #[arg(long, global = true, help = "Also write logs to the cache directory")]
    log_file: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Sign in with an admin account")]
    Login(AuthArgs),

    #[command(about = "Sign out and forget the stored session")]
    Logout,

    #[command(about = "Show the signed-in user")]
    Whoami,

    #[command(about = "Send an authenticated request to any path")]
    Request(RequestArgs),

    #[command(about = "Workout blueprints")]
    Blueprints {
        #[command(subcommand)]
        cmd: BlueprintCommands,
    },

    #[command(about = "Exercise library (read-only)")]
    Exercises {
        #[command(subcommand)]
        cmd: ExerciseCommands,
    },

    #[command(about = "Workout generation and exercise alternatives")]
    Workouts {
        #[command(subcommand)]
        cmd: WorkoutCommands,
    },

    #[command(about = "Daily tips and tip templates")]
    Tips {
        #[command(subcommand)]
        cmd: TipCommands,
    },

    #[command(about = "Preset resets")]
    Resets {
        #[command(subcommand)]
        cmd: ResetCommands,
    },

    #[command(about = "User administration")]
    Users {
        #[command(subcommand)]
        cmd: UserCommands,
    },

    #[command(about = "Corporate accounts")]
    Corporate {
        #[command(subcommand)]
        cmd: CorporateCommands,
    },

    #[command(about = "Motivational quotes")]
    Quotes {
        #[command(subcommand)]
        cmd: QuoteCommands,
    },

    #[command(about = "Plan pricing and promotions")]
    Pricing {
        #[command(subcommand)]
        cmd: PricingCommands,
    },

    #[command(name = "api-keys", about = "API keys for partner integrations")]
    ApiKeys {
        #[command(subcommand)]
        cmd: ApiKeyCommands,
    },

    #[command(name = "help-center", about = "Help-center categories and articles")]
    HelpCenter {
        #[command(subcommand)]
        cmd: HelpCenterCommands,
    },
}

/// Initialize the tracing subscriber for logging
fn init_tracing(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, LOG_FILE_NAME));
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(file_layer)
        .with(filter)
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = Config::load()?
        .apply_env()
        .with_api_url_override(cli.api_url.clone());

    let log_dir = if cli.log_file {
        let dir = config.cache_dir()?;
        std::fs::create_dir_all(&dir)?;
        Some(dir)
    } else {
        None
    };
    let _guard = init_tracing(log_dir.as_deref());
    info!(api_url = %config.api_url(), "rigfit-admin starting");

    let ctx = Context::new(config)?;
    run(cli.command, ctx).await
}

async fn run(command: Commands, mut ctx: Context) -> Result<()> {
    match command {
        Commands::Login(args) => commands::auth::login(&mut ctx, args).await,
        Commands::Logout => commands::auth::logout(&ctx).await,
        Commands::Whoami => commands::auth::whoami(&ctx).await,
        Commands::Request(args) => commands::request::handle(&ctx, args).await,
        Commands::Blueprints { cmd } => commands::blueprints::handle(&ctx, cmd).await,
        Commands::Exercises { cmd } => commands::exercises::handle(&ctx, cmd).await,
        Commands::Workouts { cmd } => commands::workouts::handle(&ctx, cmd).await,
        Commands::Tips { cmd } => commands::tips::handle(&ctx, cmd).await,
        Commands::Resets { cmd } => commands::resets::handle(&ctx, cmd).await,
        Commands::Users { cmd } => commands::users::handle(&ctx, cmd).await,
        Commands::Corporate { cmd } => commands::corporate::handle(&ctx, cmd).await,
        Commands::Quotes { cmd } => commands::quotes::handle(&ctx, cmd).await,
        Commands::Pricing { cmd } => commands::pricing::handle(&ctx, cmd).await,
        Commands::ApiKeys { cmd } => commands::api_keys::handle(&ctx, cmd).await,
        Commands::HelpCenter { cmd } => commands::help_center::handle(&ctx, cmd).await,
    }
}
