//! Events listing.

use anyhow::{Context, Result};
use clap::Args;

use eventia_core::EventApi;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct EventsArgs {
    /// Print the events as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: EventsArgs, api_url: &str) -> Result<()> {
    let session = session::open(api_url)?;
    let events = session
        .list_events()
        .await
        .context("Failed to list events")?;

    if args.json {
        return output::json(&events);
    }

    if events.is_empty() {
        output::note("No events found.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = events
        .iter()
        .map(|e| {
            vec![
                e.id.clone(),
                e.date.clone(),
                e.title.clone(),
                e.description.clone().unwrap_or_default(),
            ]
        })
        .collect();
    output::table(&["ID", "DATE", "TITLE", "DESCRIPTION"], &rows);

    Ok(())
}
