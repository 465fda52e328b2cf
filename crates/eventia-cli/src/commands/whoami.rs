//! Whoami command implementation.

use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use clap::Args;

use eventia_core::credential::DEFAULT_REFRESH_MARGIN;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs, api_url: &str) -> Result<()> {
    let session = session::open_authenticated(api_url).await?;

    match session.user().await {
        Some(user) => {
            output::field("User", &user.email);
            output::field("Role", &user.role);
        }
        None => output::field("User", "(unknown)"),
    }
    output::field("API", session.api_url().as_str());

    let credential = session.credential().await;
    let status = match credential.access {
        Some(ref grant) => {
            output::field(
                "Expires",
                &grant.expires_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            );
            if grant.is_expiring(Utc::now(), DEFAULT_REFRESH_MARGIN) {
                "due for refresh"
            } else {
                "valid"
            }
        }
        None => "refresh only",
    };
    output::field("Access token", status);

    Ok(())
}
