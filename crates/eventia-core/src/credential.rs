//! The session credential: an access grant plus a refresh token.

use chrono::{DateTime, Duration, Utc};

use crate::tokens::{AccessToken, RefreshToken};

/// Access tokens expiring within this margin are treated as already expired.
pub const DEFAULT_REFRESH_MARGIN: Duration = Duration::seconds(60);

/// An access token together with its absolute expiry.
///
/// Keeping both in one value means a token can never exist without an
/// expiry, or an expiry without a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGrant {
    pub token: AccessToken,
    pub expires_at: DateTime<Utc>,
}

impl AccessGrant {
    /// Build a grant from a server-declared lifetime in seconds.
    ///
    /// Returns `None` when the lifetime does not yield a representable
    /// timestamp.
    pub fn from_lifetime(
        token: AccessToken,
        expires_in: i64,
        now: DateTime<Utc>,
    ) -> Option<Self> {
        let expires_at = Duration::try_seconds(expires_in)
            .and_then(|lifetime| now.checked_add_signed(lifetime))?;
        Some(Self { token, expires_at })
    }

    /// True when `now` is inside the renewal margin or past the deadline.
    ///
    /// An expiry so early that the margin cannot be subtracted counts as
    /// expiring.
    pub fn is_expiring(&self, now: DateTime<Utc>, margin: Duration) -> bool {
        self.expires_at
            .checked_sub_signed(margin)
            .is_none_or(|renew_at| now > renew_at)
    }

    /// Expiry as epoch milliseconds, the persisted representation.
    pub fn expires_at_millis(&self) -> i64 {
        self.expires_at.timestamp_millis()
    }
}

/// The credential backing one session.
///
/// An empty credential is the unauthenticated state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credential {
    pub access: Option<AccessGrant>,
    pub refresh_token: Option<RefreshToken>,
}

impl Credential {
    /// A fully populated credential as returned by a successful login.
    pub fn new(access: AccessGrant, refresh_token: RefreshToken) -> Self {
        Self {
            access: Some(access),
            refresh_token: Some(refresh_token),
        }
    }

    /// True when neither token is held.
    pub fn is_empty(&self) -> bool {
        self.access.is_none() && self.refresh_token.is_none()
    }

    /// The access token, if one is held and outside the renewal margin.
    pub fn valid_access_token(&self, now: DateTime<Utc>, margin: Duration) -> Option<&AccessToken> {
        self.access
            .as_ref()
            .filter(|grant| !grant.is_expiring(now, margin))
            .map(|grant| &grant.token)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.access.as_ref().map(|grant| grant.expires_at)
    }
}
