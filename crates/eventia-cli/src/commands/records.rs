//! Supplier, organizer and attendee listings.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use serde_json::json;

use eventia_core::records::{DEFAULT_PER_PAGE, Listed, filter, paginate};
use eventia_core::{Attendee, EventApi, Organizer, Supplier};

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show records whose name or e-mail contains this text
    #[arg(long)]
    pub search: Option<String>,

    /// Page to show, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Records per page
    #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: usize,

    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,
}

/// Table layout for a record type.
trait Row {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

impl Row for Supplier {
    const HEADERS: &'static [&'static str] =
        &["ID", "NAME", "EMAIL", "PHONE", "SERVICE", "STATUS"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.service.clone(),
            self.status.as_str().to_string(),
        ]
    }
}

impl Row for Organizer {
    const HEADERS: &'static [&'static str] =
        &["ID", "NAME", "EMAIL", "PHONE", "ORGANIZATION", "EVENTS"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.organization.clone(),
            self.events_count.to_string(),
        ]
    }
}

impl Row for Attendee {
    const HEADERS: &'static [&'static str] =
        &["ID", "NAME", "EMAIL", "PHONE", "REGISTERED", "ATTENDED"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.registration_date.clone(),
            self.attended_events.to_string(),
        ]
    }
}

pub async fn suppliers(args: ListArgs, api_url: &str) -> Result<()> {
    let session = session::open(api_url)?;
    let records = session
        .list_suppliers()
        .await
        .context("Failed to list suppliers")?;
    show(&records, &args)
}

pub async fn organizers(args: ListArgs, api_url: &str) -> Result<()> {
    let session = session::open(api_url)?;
    let records = session
        .list_organizers()
        .await
        .context("Failed to list organizers")?;
    show(&records, &args)
}

pub async fn attendees(args: ListArgs, api_url: &str) -> Result<()> {
    let session = session::open(api_url)?;
    let records = session
        .list_attendees()
        .await
        .context("Failed to list attendees")?;
    show(&records, &args)
}

fn show<T>(records: &[T], args: &ListArgs) -> Result<()>
where
    T: Listed + Row + Serialize,
{
    let matches = filter(records, args.search.as_deref().unwrap_or_default());
    let page = paginate(matches, args.page, args.per_page);

    if args.json {
        return output::json(&json!({
            "items": page.items,
            "page": page.page,
            "per_page": page.per_page,
            "total_items": page.total_items,
            "total_pages": page.total_pages,
        }));
    }

    if page.items.is_empty() {
        output::note("No records found.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = page.items.iter().map(|r| r.cells()).collect();
    output::table(T::HEADERS, &rows);

    eprintln!();
    output::note(&format!(
        "Page {} of {} ({} records)",
        page.page, page.total_pages, page.total_items
    ));

    Ok(())
}
