//! Resource operations on top of the session client.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use eventia_core::error::ValidationError;
use eventia_core::records::ListResponse;
use eventia_core::traits::EventApi;
use eventia_core::{Attendee, Event, NewEvent, Organizer, Result, Supplier};

use crate::client::RequestOptions;
use crate::endpoints::{ATTENDEES, EVENTS, ORGANIZERS, SUPPLIERS};
use crate::session::SessionClient;

impl SessionClient {
    async fn list<T>(&self, path: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let response: ListResponse<T> = self.authorized_json(path, RequestOptions::get()).await?;
        debug!(path, count = response.data.len(), "Listed records");
        Ok(response.data)
    }
}

#[async_trait]
impl EventApi for SessionClient {
    #[instrument(skip(self))]
    async fn list_suppliers(&self) -> Result<Vec<Supplier>> {
        self.list(SUPPLIERS).await
    }

    #[instrument(skip(self))]
    async fn list_organizers(&self) -> Result<Vec<Organizer>> {
        self.list(ORGANIZERS).await
    }

    #[instrument(skip(self))]
    async fn list_attendees(&self) -> Result<Vec<Attendee>> {
        self.list(ATTENDEES).await
    }

    #[instrument(skip(self))]
    async fn list_events(&self) -> Result<Vec<Event>> {
        self.list(EVENTS).await
    }

    #[instrument(skip(self, event), fields(title = %event.title, date = %event.date))]
    async fn create_event(&self, event: &NewEvent) -> Result<serde_json::Value> {
        event.validate()?;

        let body = serde_json::to_value(event).map_err(|e| ValidationError::Invalid {
            field: "event",
            reason: e.to_string(),
        })?;
        self.authorized_request(EVENTS, RequestOptions::post(body))
            .await
    }
}
