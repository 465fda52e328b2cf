//! Eventia resource API trait.

use async_trait::async_trait;

use crate::Result;
use crate::records::{Attendee, Event, NewEvent, Organizer, Supplier};

/// The resource operations the dashboard performs against the API.
#[async_trait]
pub trait EventApi: Send + Sync {
    /// List all suppliers.
    async fn list_suppliers(&self) -> Result<Vec<Supplier>>;

    /// List all organizers.
    async fn list_organizers(&self) -> Result<Vec<Organizer>>;

    /// List all attendees.
    async fn list_attendees(&self) -> Result<Vec<Attendee>>;

    /// List all events.
    async fn list_events(&self) -> Result<Vec<Event>>;

    /// Create an event. The input is validated before any request is sent.
    async fn create_event(&self, event: &NewEvent) -> Result<serde_json::Value>;
}
