//! Session persisted in `window.localStorage` under the `token` and `userId` keys.

use crate::{
    api::AppError,
    session::{Session, SessionStore, TOKEN_KEY, USER_ID_KEY},
};
use secrecy::ExposeSecret;
use web_sys::Storage;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

fn local_storage() -> Result<Storage, AppError> {
    web_sys::window()
        .ok_or_else(|| AppError::Storage("No window available.".to_string()))?
        .local_storage()
        .map_err(|_| AppError::Storage("Local storage is not accessible.".to_string()))?
        .ok_or_else(|| AppError::Storage("Local storage is not available.".to_string()))
}

fn storage_error(key: &str) -> AppError {
    AppError::Storage(format!("Unable to access `{key}` in local storage."))
}

impl SessionStore for LocalStorageStore {
    fn load(&self) -> Result<Option<Session>, AppError> {
        let storage = local_storage()?;
        let token = storage
            .get_item(TOKEN_KEY)
            .map_err(|_| storage_error(TOKEN_KEY))?;
        let user_id = storage
            .get_item(USER_ID_KEY)
            .map_err(|_| storage_error(USER_ID_KEY))?;

        Ok(Session::from_stored(token, user_id))
    }

    fn save(&self, session: &Session) -> Result<(), AppError> {
        let storage = local_storage()?;
        storage
            .set_item(TOKEN_KEY, session.token.expose_secret())
            .map_err(|_| storage_error(TOKEN_KEY))?;

        match &session.user_id {
            Some(user_id) => storage.set_item(USER_ID_KEY, user_id.as_str()),
            None => storage.remove_item(USER_ID_KEY),
        }
        .map_err(|_| storage_error(USER_ID_KEY))
    }

    fn clear(&self) -> Result<(), AppError> {
        let storage = local_storage()?;
        for key in [TOKEN_KEY, USER_ID_KEY] {
            storage.remove_item(key).map_err(|_| storage_error(key))?;
        }
        Ok(())
    }
}
