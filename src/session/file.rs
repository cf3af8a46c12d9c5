//! Session persisted as a small JSON file, the native stand-in for browser
//! local storage. The file holds the bearer token, so it is written with
//! owner-only permissions on Unix.

use super::{Session, SessionStore, TOKEN_KEY, USER_ID_KEY};
use crate::api::AppError;
use secrecy::ExposeSecret;
use serde_json::{Map, Value};
use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};
use tracing::debug;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Result<Option<Session>, AppError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(AppError::Storage(format!(
                    "Failed to read {}: {err}",
                    self.path.display()
                )));
            }
        };

        let values: Map<String, Value> = serde_json::from_str(&raw).map_err(|err| {
            AppError::Storage(format!("Corrupt session file {}: {err}", self.path.display()))
        })?;

        let read = |key: &str| {
            values
                .get(key)
                .and_then(Value::as_str)
                .map(ToString::to_string)
        };

        Ok(Session::from_stored(read(TOKEN_KEY), read(USER_ID_KEY)))
    }

    fn save(&self, session: &Session) -> Result<(), AppError> {
        let mut values = Map::new();
        values.insert(
            TOKEN_KEY.to_string(),
            Value::String(session.token.expose_secret().to_string()),
        );
        if let Some(user_id) = &session.user_id {
            values.insert(USER_ID_KEY.to_string(), Value::String(user_id.to_string()));
        }
        let payload = serde_json::to_vec_pretty(&Value::Object(values))
            .map_err(|err| AppError::Serialization(format!("Failed to encode session: {err}")))?;

        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| {
                AppError::Storage(format!("Failed to create {}: {err}", parent.display()))
            })?;
        }

        write_private(&self.path, &payload).map_err(|err| {
            AppError::Storage(format!("Failed to write {}: {err}", self.path.display()))
        })?;

        debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "session removed");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(AppError::Storage(format!(
                "Failed to remove {}: {err}",
                self.path.display()
            ))),
        }
    }
}

#[cfg(unix)]
fn write_private(path: &Path, payload: &[u8]) -> std::io::Result<()> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // mode() only applies on create
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    file.write_all(payload)?;
    file.sync_all()
}

#[cfg(not(unix))]
fn write_private(path: &Path, payload: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(payload)?;
    file.sync_all()
}
