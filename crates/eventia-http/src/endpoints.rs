//! Endpoint paths and request/response bodies.

use serde::{Deserialize, Serialize};

// ============================================================================
// Endpoint Paths
// ============================================================================

/// Exchange identifier and secret for a credential.
pub const LOGIN: &str = "/auth/login";

/// Exchange a refresh token for a new access token.
pub const REFRESH: &str = "/auth/refresh";

/// List and create events.
pub const EVENTS: &str = "/events";

/// List suppliers.
pub const SUPPLIERS: &str = "/proveedor/listar";

/// List organizers.
pub const ORGANIZERS: &str = "/organizador/listar";

/// List attendees.
pub const ATTENDEES: &str = "/asistente/listar";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for login.
///
/// The identifier goes out under both `email` and `username` since the
/// login service behind the gateway reads one or the other.
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub username: &'a str,
    pub password: &'a str,
}

/// Response from login.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
}

/// Request body for refresh.
#[derive(Debug, Serialize)]
pub(crate) struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

/// Response from refresh.
#[derive(Debug, Deserialize)]
pub(crate) struct RefreshResponse {
    pub access_token: String,
    pub expires_in: i64,
}
