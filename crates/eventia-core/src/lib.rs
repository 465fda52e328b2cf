//! eventia-core - Core types and traits for the Eventia session client.

pub mod credential;
pub mod credentials;
pub mod error;
pub mod profile;
pub mod records;
pub mod store;
pub mod tokens;
pub mod traits;
pub mod types;

pub use credential::{AccessGrant, Credential};
pub use credentials::Credentials;
pub use error::Error;
pub use profile::UserProfile;
pub use records::{Attendee, Event, NewEvent, Organizer, Page, Supplier, SupplierStatus};
pub use store::MemoryStore;
pub use tokens::{AccessToken, RefreshToken};
pub use traits::{EventApi, KeyValueStore};
pub use types::ApiUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
