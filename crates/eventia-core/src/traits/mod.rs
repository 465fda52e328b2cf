//! Core traits for the API surface and credential persistence.

mod api;
mod store;

pub use api::EventApi;
pub use store::KeyValueStore;
