//! Refresh token command implementation.

use anyhow::{Result, bail};
use chrono::SecondsFormat;
use clap::Args;

use eventia_core::Error;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct RefreshTokenArgs {}

pub async fn run(_args: RefreshTokenArgs, api_url: &str) -> Result<()> {
    let session = session::open_authenticated(api_url).await?;

    if session.credential().await.refresh_token.is_none() {
        bail!("No refresh token held. Run 'eventia login' first.");
    }

    output::note("Refreshing session...");

    if !session.refresh().await {
        return Err(Error::RefreshFailed {
            message: "the server did not accept the refresh token".to_string(),
        }
        .into());
    }

    output::success("Session refreshed successfully");
    if let Some(expires_at) = session.credential().await.expires_at() {
        output::field(
            "Expires",
            &expires_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        );
    }

    Ok(())
}
