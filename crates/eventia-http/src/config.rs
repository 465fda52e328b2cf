//! Session client configuration.

use chrono::Duration;

use eventia_core::ApiUrl;
use eventia_core::credential::DEFAULT_REFRESH_MARGIN;

/// API base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Settings for a [`SessionClient`](crate::SessionClient).
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Base URL every endpoint path is joined onto.
    pub api_url: ApiUrl,
    /// Access tokens this close to expiry are renewed before use.
    pub refresh_margin: Duration,
    /// `User-Agent` sent with every request.
    pub user_agent: String,
}

impl SessionConfig {
    pub fn new(api_url: ApiUrl) -> Self {
        Self {
            api_url,
            refresh_margin: DEFAULT_REFRESH_MARGIN,
            user_agent: concat!("eventia/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    pub fn with_refresh_margin(mut self, margin: Duration) -> Self {
        self.refresh_margin = margin;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
