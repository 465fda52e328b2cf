//! eventia-file - Filesystem-backed key-value store.

mod store;

pub use store::FileStore;
