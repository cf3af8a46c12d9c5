//! Page controllers for the register, user list and profile screens.
//!
//! Each controller issues at most one request per user action and turns the
//! response into view state. Failures go through [`Context::report`]: a 401 runs
//! the forced-logout routine, anything else becomes a blocking alert. The
//! controllers are surface-agnostic; the browser and the CLI only supply the
//! [`Backend`], [`SessionStore`] and [`Shell`] they run against.

pub mod profile;
pub mod register;
mod unauthorized;
pub mod users;

use crate::{
    api::{AppError, Backend, UserId},
    navigation::Shell,
    session::SessionStore,
};
use tracing::warn;

/// Result of a user action that may be stopped before reaching the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Client-side validation blocked the request; the message belongs next to the form.
    Invalid(String),
    /// The request succeeded.
    Done(T),
    /// The failure was already surfaced through the shell (alert or forced logout).
    Reported,
}

/// Collaborators a page controller runs against.
pub struct Context<'a, B, S, H> {
    pub backend: &'a B,
    pub store: &'a S,
    pub shell: &'a H,
}

impl<B, S, H> Clone for Context<'_, B, S, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B, S, H> Copy for Context<'_, B, S, H> {}

impl<'a, B, S, H> Context<'a, B, S, H>
where
    B: Backend,
    S: SessionStore,
    H: Shell,
{
    #[must_use]
    pub fn new(backend: &'a B, store: &'a S, shell: &'a H) -> Self {
        Self {
            backend,
            store,
            shell,
        }
    }

    /// Id of the logged-in user, if a session with one is stored.
    #[must_use]
    pub fn stored_user_id(&self) -> Option<UserId> {
        match self.store.load() {
            Ok(session) => session.and_then(|session| session.user_id),
            Err(err) => {
                warn!(error = %err, "unable to read session");
                None
            }
        }
    }

    /// Routes a failed request: 401 forces a logout, anything else is alerted as
    /// `Something went wrong <action>:\n<message>`.
    pub async fn report(&self, action: &str, err: &AppError) {
        if err.is_unauthorized() {
            warn!(action, "session rejected by server");
            let user_id = self.stored_user_id();
            self.handle_unauthorized(user_id.as_ref()).await;
            return;
        }

        warn!(action, error = %err, "request failed");
        self.shell.alert(&format!(
            "Something went wrong {action}:\n{}",
            user_message(err)
        ));
    }
}

/// Maps internal errors to user-facing strings without leaking details.
#[must_use]
pub fn user_message(err: &AppError) -> String {
    match err {
        AppError::Config(message) => message.clone(),
        _ => err.to_string(),
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{RecordingShell, ScriptedBackend, unauthorized};
    use super::*;
    use crate::{
        navigation::Route,
        session::{MemoryStore, Session},
    };
    use secrecy::SecretString;

    #[tokio::test]
    async fn report_alerts_generic_failures() {
        let backend = ScriptedBackend::default();
        let store = MemoryStore::with_session(Session::new(
            SecretString::from("tok"),
            UserId::parse("1").ok(),
        ));
        let shell = RecordingShell::default();
        let ctx = Context::new(&backend, &store, &shell);

        let err = AppError::Http {
            status: 500,
            message: "boom".to_string(),
        };
        ctx.report("while fetching users", &err).await;

        assert_eq!(
            shell.alerts(),
            vec!["Something went wrong while fetching users:\nRequest failed (500): boom"]
        );
        assert!(shell.routes().is_empty());
        assert!(store.load().unwrap().is_some());
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn report_forces_logout_on_401() {
        let backend = ScriptedBackend::default();
        let store = MemoryStore::with_session(Session::new(
            SecretString::from("tok"),
            UserId::parse("1").ok(),
        ));
        let shell = RecordingShell::default();
        let ctx = Context::new(&backend, &store, &shell);

        ctx.report("while fetching users", &unauthorized()).await;

        assert!(shell.alerts().is_empty());
        assert_eq!(shell.routes(), vec![Route::Login]);
        assert!(store.load().unwrap().is_none());
        assert_eq!(backend.calls(), vec!["POST /users/1/logout"]);
    }

    #[test]
    fn user_message_strips_config_prefix() {
        assert_eq!(
            user_message(&AppError::Config("User id is required.".to_string())),
            "User id is required."
        );
        assert_eq!(
            user_message(&AppError::Timeout("slow".to_string())),
            "Timeout: slow"
        );
    }
}
