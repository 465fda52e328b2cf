//! One-file-per-key storage.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, trace};
use uuid::Uuid;

use eventia_core::traits::KeyValueStore;
use eventia_core::{Error, Result};

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

fn map_io(context: &str, err: std::io::Error) -> Error {
    Error::storage(format!("{}: {}", context, err))
}

/// A directory where each key lives in its own file.
///
/// Writes go to a temporary file that is renamed over the target, so a
/// reader sees either the old value or the new one. Files are created
/// owner-only on Unix since they hold bearer tokens.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`. The directory is created lazily.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(Error::storage(format!("invalid key '{}'", key)));
        }
        Ok(self.root.join(key))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.root.join(format!(".{}.{}.tmp", key, Uuid::new_v4().simple()))
    }
}

impl KeyValueStore for FileStore {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => {
                trace!("read key");
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(map_io("failed to read key", e)),
        }
    }

    #[instrument(skip(self, value), fields(root = %self.root.display()))]
    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        fs::create_dir_all(&self.root).map_err(|e| map_io("failed to create store directory", e))?;

        let temp = self.temp_path(key);
        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        options.mode(0o600);

        let write = || -> std::io::Result<()> {
            let mut file = options.open(&temp)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
            fs::rename(&temp, &path)
        };

        if let Err(e) = write() {
            let _ = fs::remove_file(&temp);
            return Err(map_io("failed to write key", e));
        }

        debug!("wrote key");
        Ok(())
    }

    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn delete(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("deleted key");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(map_io("failed to delete key", e)),
        }
    }
}
