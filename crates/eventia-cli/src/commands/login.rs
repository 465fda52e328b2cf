//! Login command implementation.

use anyhow::{Context, Result};
use chrono::SecondsFormat;
use clap::Args;

use eventia_core::Credentials;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account e-mail
    #[arg(long)]
    pub identifier: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(args: LoginArgs, api_url: &str) -> Result<()> {
    let session = session::open(api_url)?;
    let credentials = Credentials::new(&args.identifier, &args.password);

    output::note("Logging in...");

    let credential = session
        .login(&credentials)
        .await
        .context("Failed to login")?;

    output::success("Logged in successfully");
    println!();
    output::field("User", &args.identifier);
    output::field("API", session.api_url().as_str());
    if let Some(expires_at) = credential.expires_at() {
        output::field(
            "Expires",
            &expires_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        );
    }

    Ok(())
}
