//! Create event command implementation.

use anyhow::{Context, Result};
use clap::Args;

use eventia_core::{EventApi, NewEvent};

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct CreateEventArgs {
    /// Event title
    #[arg(long)]
    pub title: String,

    /// Event date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// Free-form description
    #[arg(long, default_value = "")]
    pub description: String,
}

pub async fn run(args: CreateEventArgs, api_url: &str) -> Result<()> {
    let event = NewEvent::new(args.title, args.description, args.date);
    event.validate().context("Invalid event")?;

    let session = session::open(api_url)?;
    let created = session
        .create_event(&event)
        .await
        .context("Failed to create event")?;

    output::success(&format!("Created event: {}", event.title));
    if !created.is_null() {
        output::json_pretty(&created)?;
    }

    Ok(())
}
