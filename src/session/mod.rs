//! Client-side session: the auth token and the id of the logged-in user.
//!
//! Stores persist the two values under the `token` and `userId` keys. A stored
//! token that is blank counts as no session. Tokens are wrapped in
//! `SecretString` and must never be logged.

#[cfg(not(target_arch = "wasm32"))]
pub mod file;

use crate::api::{AppError, UserId};
use secrecy::{ExposeSecret, SecretString};
use std::sync::{Mutex, PoisonError};

pub const TOKEN_KEY: &str = "token";
pub const USER_ID_KEY: &str = "userId";

#[derive(Debug)]
pub struct Session {
    pub token: SecretString,
    pub user_id: Option<UserId>,
}

impl Session {
    #[must_use]
    pub fn new(token: SecretString, user_id: Option<UserId>) -> Self {
        Self { token, user_id }
    }

    /// Builds a session from raw stored values, returning `None` for a blank token.
    #[must_use]
    pub fn from_stored(token: Option<String>, user_id: Option<String>) -> Option<Self> {
        let token = token.filter(|value| !value.trim().is_empty())?;
        let user_id = user_id.and_then(|value| UserId::parse(&value).ok());
        Some(Self::new(SecretString::from(token), user_id))
    }
}

impl Clone for Session {
    fn clone(&self) -> Self {
        Self {
            token: SecretString::from(self.token.expose_secret().to_owned()),
            user_id: self.user_id.clone(),
        }
    }
}

/// Persistent key-value home of the current session.
pub trait SessionStore {
    /// Reads the current session, if any.
    ///
    /// # Errors
    /// Returns `AppError::Storage` if the backing storage cannot be read.
    fn load(&self) -> Result<Option<Session>, AppError>;

    /// Replaces the current session.
    ///
    /// # Errors
    /// Returns `AppError::Storage` if the backing storage cannot be written.
    fn save(&self, session: &Session) -> Result<(), AppError>;

    /// Removes the current session. Clearing an empty store succeeds.
    ///
    /// # Errors
    /// Returns `AppError::Storage` if the backing storage cannot be written.
    fn clear(&self) -> Result<(), AppError>;
}

/// Process-local store, used by tests and short-lived sessions.
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<Session>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_session(session: Session) -> Self {
        Self {
            slot: Mutex::new(Some(session)),
        }
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<Session>, AppError> {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(slot
            .as_ref()
            .filter(|session| !session.token.expose_secret().trim().is_empty())
            .cloned())
    }

    fn save(&self, session: &Session) -> Result<(), AppError> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = None;
        Ok(())
    }
}
