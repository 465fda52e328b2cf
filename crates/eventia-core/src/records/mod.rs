//! Domain records returned by the API, and the listing helpers the
//! dashboard tables are built on.
//!
//! Records are schema-light: the API owns the data, so every field the
//! server omits falls back to an empty value instead of failing the decode.

mod listing;
mod types;

pub use listing::{DEFAULT_PER_PAGE, Listed, Page, filter, paginate};
pub use types::{Attendee, Event, ListResponse, NewEvent, Organizer, Supplier, SupplierStatus};
