//! The session client.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use eventia_core::error::RequestError;
use eventia_core::store::{
    ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, SESSION_KEYS, TOKEN_EXPIRATION_KEY, USER_KEY,
};
use eventia_core::traits::KeyValueStore;
use eventia_core::{
    AccessGrant, AccessToken, ApiUrl, Credential, Credentials, Error, RefreshToken, Result,
    UserProfile,
};

use crate::client::{ApiClient, RequestOptions, decode_body, error_message};
use crate::config::SessionConfig;
use crate::endpoints::{
    LOGIN, LoginRequest, LoginResponse, REFRESH, RefreshRequest, RefreshResponse,
};

/// The single gateway for API calls.
///
/// Construct one at startup and share it; clones are cheap handles onto the
/// same credential. Callers never touch tokens: [`authorized_request`]
/// renews the access token when it is within the refresh margin and attaches
/// it, and a 401 from any call ends the session.
///
/// Concurrent calls are not coordinated. Two calls that both find the token
/// expiring will both refresh; the last result written wins.
///
/// [`authorized_request`]: SessionClient::authorized_request
#[derive(Clone)]
pub struct SessionClient {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    client: ApiClient,
    store: Arc<dyn KeyValueStore>,
    refresh_margin: Duration,
    state: RwLock<SessionState>,
}

#[derive(Debug, Default)]
struct SessionState {
    credential: Credential,
    user: Option<UserProfile>,
}

impl SessionClient {
    /// Create a client, restoring whatever session `store` holds.
    ///
    /// Unreadable or inconsistent stored values are dropped with a warning;
    /// they never make construction fail.
    pub fn new(config: SessionConfig, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let client = ApiClient::new(config.api_url, &config.user_agent)?;
        let state = hydrate(store.as_ref());

        debug!(
            authenticated = !state.credential.is_empty(),
            "Session client ready"
        );

        Ok(Self {
            inner: Arc::new(SessionInner {
                client,
                store,
                refresh_margin: config.refresh_margin,
                state: RwLock::new(state),
            }),
        })
    }

    /// Returns the API base URL.
    pub fn api_url(&self) -> &ApiUrl {
        self.inner.client.api_url()
    }

    /// Authenticate and start a new session.
    ///
    /// The credentials are validated first; invalid input never reaches the
    /// network. Any failure after that is reported as
    /// [`Error::AuthenticationFailed`] and leaves no new credential behind.
    #[instrument(skip(self, credentials), fields(api = %self.api_url(), identifier = %credentials.identifier()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<Credential> {
        credentials.validate()?;
        info!("Logging in");

        let request = LoginRequest {
            email: credentials.identifier(),
            username: credentials.identifier(),
            password: credentials.secret(),
        };

        let response = self
            .inner
            .client
            .post_json(LOGIN, &request)
            .await
            .map_err(|e| authentication_failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = error_message(response)
                .await
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            warn!(status = status.as_u16(), "Login rejected");
            return Err(authentication_failed(message));
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| authentication_failed(format!("unreadable login response: {}", e)))?;

        let credential = credential_from_login(body, Utc::now())?;
        let user = UserProfile::for_login(credentials.identifier());

        {
            let mut state = self.inner.state.write().await;
            if let Err(e) = self.persist_login(&credential, &user) {
                warn!(error = %e, "Failed to persist login; ending session");
                self.clear(&mut state);
                return Err(e);
            }
            state.credential = credential.clone();
            state.user = Some(user);
        }

        info!("Logged in");
        Ok(credential)
    }

    /// Issue an API call with the current credential.
    ///
    /// Steps, in order: renew the access token if it is missing or expiring
    /// and a refresh token is held; attach it if one was obtained, otherwise
    /// go anonymous; send. A 401 tears the session down and yields
    /// [`Error::Unauthorized`]. Any other non-2xx yields
    /// [`Error::RequestFailed`]. A success returns the JSON body.
    #[instrument(skip(self, options), fields(api = %self.api_url(), method = %options.method))]
    pub async fn authorized_request(&self, path: &str, options: RequestOptions) -> Result<Value> {
        let token = self.usable_token().await;

        let response = self
            .inner
            .client
            .send(path, &options, token.as_ref())
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            warn!("Request unauthorized; ending session");
            self.teardown().await;
            return Err(Error::Unauthorized);
        }

        if !status.is_success() {
            let message = error_message(response).await;
            debug!(status = status.as_u16(), ?message, "Request failed");
            return Err(Error::RequestFailed(RequestError::new(
                status.as_u16(),
                message,
            )));
        }

        decode_body(response).await
    }

    /// [`authorized_request`](Self::authorized_request) decoded into `T`.
    pub async fn authorized_json<T>(&self, path: &str, options: RequestOptions) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = self.authorized_request(path, options).await?;
        serde_json::from_value(body).map_err(|e| Error::invalid_response(e.to_string()))
    }

    /// Exchange the refresh token for a new access token.
    ///
    /// Returns `true` on success. On any failure the whole credential is
    /// cleared and `false` is returned; errors do not escape. Without a
    /// refresh token this returns `false` and changes nothing.
    ///
    /// If the session changed while the refresh was in flight (logout or a
    /// new login), the outcome is dropped and the newer session is kept.
    #[instrument(skip(self), fields(api = %self.api_url()))]
    pub async fn refresh(&self) -> bool {
        let refresh_token = {
            let state = self.inner.state.read().await;
            state.credential.refresh_token.clone()
        };

        let Some(refresh_token) = refresh_token else {
            debug!("No refresh token held");
            return false;
        };

        info!("Refreshing access token");

        let outcome = self.request_refresh(&refresh_token).await;

        let mut state = self.inner.state.write().await;
        if state.credential.refresh_token.as_ref() != Some(&refresh_token) {
            debug!("Session changed while refreshing; discarding outcome");
            return false;
        }

        let grant = match outcome {
            Ok(grant) => grant,
            Err(e) => {
                warn!(error = %e, "Token refresh failed; ending session");
                self.clear(&mut state);
                return false;
            }
        };

        if let Err(e) = self.persist_grant(&grant) {
            warn!(error = %e, "Failed to persist refreshed token");
        }
        state.credential.access = Some(grant);

        debug!("Access token refreshed");
        true
    }

    /// End the session, in memory and in storage. Always succeeds.
    #[instrument(skip(self), fields(api = %self.api_url()))]
    pub async fn logout(&self) {
        info!("Logging out");
        self.teardown().await;
    }

    /// True while any token is held.
    pub async fn is_authenticated(&self) -> bool {
        !self.inner.state.read().await.credential.is_empty()
    }

    /// Snapshot of the current credential.
    pub async fn credential(&self) -> Credential {
        self.inner.state.read().await.credential.clone()
    }

    /// The logged-in user's display record, if any.
    pub async fn user(&self) -> Option<UserProfile> {
        self.inner.state.read().await.user.clone()
    }

    /// The access token to send, renewing it first if needed.
    async fn usable_token(&self) -> Option<AccessToken> {
        let (valid, has_refresh) = {
            let state = self.inner.state.read().await;
            (
                state
                    .credential
                    .valid_access_token(Utc::now(), self.inner.refresh_margin)
                    .cloned(),
                state.credential.refresh_token.is_some(),
            )
        };

        if valid.is_some() {
            return valid;
        }

        if !has_refresh {
            debug!("No usable credential; sending anonymously");
            return None;
        }

        if !self.refresh().await {
            debug!("Refresh unavailable; sending anonymously");
            return None;
        }

        let state = self.inner.state.read().await;
        state.credential.access.as_ref().map(|grant| grant.token.clone())
    }

    async fn request_refresh(&self, refresh_token: &RefreshToken) -> Result<AccessGrant> {
        let request = RefreshRequest {
            refresh_token: refresh_token.as_str(),
        };

        let response = self
            .inner
            .client
            .post_json(REFRESH, &request)
            .await
            .map_err(|e| refresh_failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = error_message(response)
                .await
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            return Err(refresh_failed(message));
        }

        let body: RefreshResponse = response
            .json()
            .await
            .map_err(|e| refresh_failed(format!("unreadable refresh response: {}", e)))?;

        AccessGrant::from_lifetime(
            AccessToken::new(body.access_token),
            body.expires_in,
            Utc::now(),
        )
        .ok_or_else(|| refresh_failed(format!("unusable expires_in {}", body.expires_in)))
    }

    async fn teardown(&self) {
        let mut state = self.inner.state.write().await;
        self.clear(&mut state);
    }

    /// Clear memory first, then storage. Storage failures are logged only.
    ///
    /// Takes the held write guard so no login can land between the two.
    fn clear(&self, state: &mut SessionState) {
        *state = SessionState::default();

        for key in SESSION_KEYS {
            if let Err(e) = self.inner.store.delete(key) {
                warn!(key, error = %e, "Failed to remove persisted session key");
            }
        }
    }

    fn persist_login(&self, credential: &Credential, user: &UserProfile) -> Result<()> {
        let store = &self.inner.store;

        if let Some(ref grant) = credential.access {
            self.persist_grant(grant)?;
        }
        if let Some(ref refresh_token) = credential.refresh_token {
            store.set(REFRESH_TOKEN_KEY, refresh_token.as_str())?;
        }

        let user = serde_json::to_string(user).map_err(|e| Error::storage(e.to_string()))?;
        store.set(USER_KEY, &user)
    }

    fn persist_grant(&self, grant: &AccessGrant) -> Result<()> {
        let store = &self.inner.store;
        store.set(ACCESS_TOKEN_KEY, grant.token.as_str())?;
        store.set(TOKEN_EXPIRATION_KEY, &grant.expires_at_millis().to_string())
    }
}

fn authentication_failed(message: impl Into<String>) -> Error {
    Error::AuthenticationFailed {
        message: message.into(),
    }
}

fn refresh_failed(message: impl Into<String>) -> Error {
    Error::RefreshFailed {
        message: message.into(),
    }
}

/// Turn a 2xx login body into a credential, or explain why it is not one.
fn credential_from_login(body: LoginResponse, now: DateTime<Utc>) -> Result<Credential> {
    if body.success != Some(true) {
        return Err(authentication_failed(
            body.message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "login was not successful".to_string()),
        ));
    }

    let (Some(access_token), Some(refresh_token), Some(expires_in)) =
        (body.access_token, body.refresh_token, body.expires_in)
    else {
        return Err(authentication_failed("login response carried no credential"));
    };

    if access_token.is_empty() || refresh_token.is_empty() {
        return Err(authentication_failed("login response carried an empty token"));
    }

    let access = AccessGrant::from_lifetime(AccessToken::new(access_token), expires_in, now)
        .ok_or_else(|| authentication_failed(format!("unusable expires_in {}", expires_in)))?;

    Ok(Credential::new(access, RefreshToken::new(refresh_token)))
}

/// Rebuild session state from storage, dropping anything that does not
/// hold together.
fn hydrate(store: &dyn KeyValueStore) -> SessionState {
    let read = |key: &str| match store.get(key) {
        Ok(value) => value.filter(|v| !v.is_empty()),
        Err(e) => {
            warn!(key, error = %e, "Failed to read persisted session key");
            None
        }
    };

    let access = match (read(ACCESS_TOKEN_KEY), read(TOKEN_EXPIRATION_KEY)) {
        (Some(token), Some(expiration)) => {
            match expiration
                .trim()
                .parse::<i64>()
                .ok()
                .and_then(DateTime::<Utc>::from_timestamp_millis)
            {
                Some(expires_at) => Some(AccessGrant {
                    token: AccessToken::new(token),
                    expires_at,
                }),
                None => {
                    warn!("Discarding persisted access token with unreadable expiry");
                    None
                }
            }
        }
        (None, None) => None,
        _ => {
            warn!("Discarding half-persisted access token");
            None
        }
    };

    let refresh_token = read(REFRESH_TOKEN_KEY).map(RefreshToken::new);

    let user = read(USER_KEY).and_then(|json| match serde_json::from_str(&json) {
        Ok(user) => Some(user),
        Err(e) => {
            warn!(error = %e, "Discarding unreadable persisted user");
            None
        }
    });

    SessionState {
        credential: Credential {
            access,
            refresh_token,
        },
        user,
    }
}

impl std::fmt::Debug for SessionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionClient")
            .field("api", self.api_url())
            .field("refresh_margin", &self.inner.refresh_margin)
            .field("tokens", &"[REDACTED]")
            .finish()
    }
}
