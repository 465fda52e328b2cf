//! Opening the on-disk session.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use eventia_core::ApiUrl;
use eventia_file::FileStore;
use eventia_http::{SessionClient, SessionConfig};

/// Directory holding one file per session key.
fn session_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "eventia").context("Could not determine data directory")?;
    Ok(dirs.data_dir().join("session"))
}

/// Build a session client for `api_url`, restoring any stored session.
pub fn open(api_url: &str) -> Result<SessionClient> {
    let api = ApiUrl::new(api_url).context("Invalid API URL")?;
    let dir = session_dir()?;
    tracing::debug!(dir = %dir.display(), "Opening session store");

    let store = FileStore::new(dir);
    SessionClient::new(SessionConfig::new(api), Arc::new(store))
        .context("Failed to create session client")
}

/// Like [`open`], but fail when no session is held.
pub async fn open_authenticated(api_url: &str) -> Result<SessionClient> {
    let session = open(api_url)?;
    if !session.is_authenticated().await {
        anyhow::bail!("No active session. Run 'eventia login' first.");
    }
    Ok(session)
}
