use std::io::{self, Write};

use anyhow::{bail, Result};
use clap::Args;
use tracing::warn;

use crate::context::Context;
use crate::output::{print_done, print_json};

#[derive(Args, Debug)]
pub struct AuthArgs {
    #[arg(help = "Admin email (defaults to the last one used)")]
    pub email: Option<String>,

    #[arg(long, conflicts_with = "email", help = "Sign in with a Google ID token instead")]
    pub google_token: Option<String>,
}

pub async fn login(ctx: &mut Context, args: AuthArgs) -> Result<()> {
    let user = match args.google_token {
        Some(token) => ctx.session.google_login(&token).await?,
        None => {
            let email = match args.email.or_else(|| ctx.config.last_email.clone()) {
                Some(email) => email,
                None => prompt_email()?,
            };
            if email.is_empty() {
                bail!("Email is required");
            }
            let password = rpassword::prompt_password("Password: ")?;
            let user = ctx.session.login(&email, &password).await?;

            ctx.config.last_email = Some(email);
            if let Err(e) = ctx.config.save() {
                warn!(error = %e, "Failed to save config");
            }
            user
        }
    };

    println!("Signed in as {}", user.email);
    Ok(())
}

pub async fn logout(ctx: &Context) -> Result<()> {
    ctx.session.logout().await;
    print_done("Signed out");
    Ok(())
}

pub async fn whoami(ctx: &Context) -> Result<()> {
    if !ctx.session.initialize().await {
        bail!("Not signed in. Run `rigfit-admin login` first.");
    }
    match ctx.session.user() {
        Some(user) => print_json(&user),
        None => bail!("Not signed in"),
    }
}

fn prompt_email() -> Result<String> {
    print!("Email: ");
    io::stdout().flush()?;

    let mut email = String::new();
    io::stdin().read_line(&mut email)?;
    Ok(email.trim().to_string())
}
