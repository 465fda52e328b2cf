//! Display record for the logged-in user.

use serde::{Deserialize, Serialize};

/// Role recorded for every dashboard login.
pub const DEFAULT_ROLE: &str = "usuario";

/// The denormalized user record persisted alongside the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub role: String,
}

impl UserProfile {
    /// Profile for a freshly logged-in identifier.
    pub fn for_login(identifier: &str) -> Self {
        Self {
            email: identifier.to_string(),
            role: DEFAULT_ROLE.to_string(),
        }
    }
}
