//! Logout command implementation.

use anyhow::Result;
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs, api_url: &str) -> Result<()> {
    let session = session::open(api_url)?;
    session.logout().await;

    output::success("Logged out");
    Ok(())
}
