use anyhow::Result;
use clap::Subcommand;

use rigfit_core::models::{PlanTier, PromotionRequest};

use super::BodyArgs;
use crate::context::Context;
use crate::output::print_json;

#[derive(Subcommand, Debug)]
pub enum PricingCommands {
    #[command(about = "List pricing for every plan")]
    List,

    #[command(about = "Show pricing for one plan")]
    Get { plan: PlanTier },

    #[command(about = "Update a plan's pricing")]
    Update {
        plan: PlanTier,
        #[command(flatten)]
        body: BodyArgs,
    },

    #[command(about = "Start a promotion on a plan")]
    Promote {
        plan: PlanTier,
        #[arg(long)]
        text: Option<String>,
        #[arg(long, help = "Discount in percent")]
        discount: Option<f64>,
    },

    #[command(about = "End the promotion on a plan")]
    EndPromotion { plan: PlanTier },
}

pub async fn handle(ctx: &Context, cmd: PricingCommands) -> Result<()> {
    ctx.require_login()?;
    let admin = &ctx.admin;

    match cmd {
        PricingCommands::List => print_json(&admin.list_pricing().await?),
        PricingCommands::Get { plan } => {
            let pricing = admin.get_pricing(plan).await?;
            if let Some(monthly) = pricing.effective_monthly() {
                eprintln!("effective monthly price: {:.2}", monthly);
            }
            print_json(&pricing)
        }
        PricingCommands::Update { plan, body } => {
            print_json(&admin.update_pricing(plan, &body.read()?).await?)
        }
        PricingCommands::Promote {
            plan,
            text,
            discount,
        } => {
            let request = PromotionRequest {
                promotion_text: text,
                promotion_discount: discount,
            };
            print_json(&admin.set_promotion(plan, &request).await?)
        }
        PricingCommands::EndPromotion { plan } => print_json(&admin.clear_promotion(plan).await?),
    }
}
