//! Forced logout, shared by every page. Used both when the server rejects the
//! session with a 401 and for the explicit logout action.

use super::Context;
use crate::{
    api::{Backend, UserId},
    navigation::{Route, Shell},
    session::SessionStore,
};
use tracing::{error, info, warn};

impl<B, S, H> Context<'_, B, S, H>
where
    B: Backend,
    S: SessionStore,
    H: Shell,
{
    /// Tells the server the user went offline (best effort), then clears the
    /// local session and navigates to the login screen.
    ///
    /// Safe to call repeatedly and without a session: the network call is only
    /// made when a user id is known, and its failure is ignored.
    pub async fn handle_unauthorized(&self, user_id: Option<&UserId>) {
        if let Some(user_id) = user_id {
            if let Err(err) = self.backend.logout(user_id).await {
                warn!(%user_id, error = %err, "logout notification failed");
            }
        }

        if let Err(err) = self.store.clear() {
            error!(error = %err, "failed to clear session");
        }
        self.backend.set_token(None);
        info!("session cleared");

        self.shell.navigate(&Route::Login);
    }

    /// Explicit logout for the currently stored user.
    pub async fn logout(&self) {
        let user_id = self.stored_user_id();
        self.handle_unauthorized(user_id.as_ref()).await;
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{RecordingShell, ScriptedBackend};
    use super::*;
    use crate::{
        api::AppError,
        session::{MemoryStore, Session},
    };
    use secrecy::SecretString;

    fn logged_in(user_id: &str) -> MemoryStore {
        MemoryStore::with_session(Session::new(
            SecretString::from("tok"),
            UserId::parse(user_id).ok(),
        ))
    }

    #[tokio::test]
    async fn logout_notifies_server_then_clears_and_redirects() {
        let backend = ScriptedBackend::default();
        *backend.token.borrow_mut() = Some("tok".to_string());
        let store = logged_in("4");
        let shell = RecordingShell::default();

        Context::new(&backend, &store, &shell).logout().await;

        assert_eq!(backend.calls(), vec!["POST /users/4/logout"]);
        assert!(backend.token.borrow().is_none());
        assert!(store.load().unwrap().is_none());
        assert_eq!(shell.routes(), vec![Route::Login]);
    }

    #[tokio::test]
    async fn failed_logout_call_still_clears_session() {
        let backend = ScriptedBackend::default();
        backend
            .logout
            .borrow_mut()
            .push_back(Err(AppError::Network("down".to_string())));
        let store = logged_in("4");
        let shell = RecordingShell::default();

        Context::new(&backend, &store, &shell).logout().await;

        assert!(store.load().unwrap().is_none());
        assert_eq!(shell.routes(), vec![Route::Login]);
        assert!(shell.alerts().is_empty());
    }

    #[tokio::test]
    async fn without_user_id_no_request_is_made() {
        let backend = ScriptedBackend::default();
        let store = MemoryStore::new();
        let shell = RecordingShell::default();
        let ctx = Context::new(&backend, &store, &shell);

        ctx.handle_unauthorized(None).await;
        ctx.handle_unauthorized(None).await;

        assert!(backend.calls().is_empty());
        assert_eq!(shell.routes(), vec![Route::Login, Route::Login]);
    }
}
