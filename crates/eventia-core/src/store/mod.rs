//! Persisted session keys and the in-memory store.

mod memory;

pub use memory::MemoryStore;

/// Access token string.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Refresh token string.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Access token expiry, decimal epoch milliseconds.
pub const TOKEN_EXPIRATION_KEY: &str = "token_expiration";

/// JSON-encoded [`UserProfile`](crate::UserProfile).
pub const USER_KEY: &str = "user";

/// Every key the session client writes.
pub const SESSION_KEYS: [&str; 4] = [
    ACCESS_TOKEN_KEY,
    REFRESH_TOKEN_KEY,
    TOKEN_EXPIRATION_KEY,
    USER_KEY,
];
