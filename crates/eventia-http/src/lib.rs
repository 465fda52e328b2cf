//! eventia-http - HTTP session client for the Eventia API.
//!
//! All API traffic flows through a [`SessionClient`]. It logs in, keeps the
//! credential persisted in a [`KeyValueStore`](eventia_core::KeyValueStore),
//! renews the access token shortly before it expires, and tears the session
//! down on the first 401.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use eventia_core::{ApiUrl, Credentials, EventApi, MemoryStore};
//! use eventia_http::{SessionClient, SessionConfig};
//!
//! # async fn example() -> eventia_core::Result<()> {
//! let config = SessionConfig::new(ApiUrl::new("http://localhost:8000")?);
//! let session = SessionClient::new(config, Arc::new(MemoryStore::new()))?;
//!
//! session.login(&Credentials::new("a@b.com", "pw123456")).await?;
//! for supplier in session.list_suppliers().await? {
//!     println!("{} <{}>", supplier.name, supplier.email);
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
mod config;
mod endpoints;
mod session;

pub use client::RequestOptions;
pub use config::{DEFAULT_API_URL, SessionConfig};
pub use endpoints::{ATTENDEES, EVENTS, LOGIN, ORGANIZERS, REFRESH, SUPPLIERS};
pub use session::SessionClient;
