//! User list screen: one fetch on mount, one row per user, rows open profiles.

use super::Context;
use crate::{
    api::{Backend, User, UserId, UserStatus},
    format,
    navigation::{Route, Shell, paths},
    session::SessionStore,
};
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRow {
    pub id: UserId,
    pub username: String,
    pub status: UserStatus,
    pub status_color: &'static str,
    pub href: String,
}

impl UserRow {
    #[must_use]
    pub fn route(&self) -> Route {
        Route::UserProfile(self.id.clone())
    }
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            status: user.status,
            status_color: format::status_color(user.status),
            href: paths::user_detail(&user.id),
        }
    }
}

/// Fetches all users. Returns `None` when the failure was reported.
pub async fn load<B, S, H>(ctx: &Context<'_, B, S, H>) -> Option<Vec<UserRow>>
where
    B: Backend,
    S: SessionStore,
    H: Shell,
{
    match ctx.backend.list_users().await {
        Ok(users) => {
            debug!(count = users.len(), "fetched users");
            Some(users.iter().map(UserRow::from).collect())
        }
        Err(err) => {
            ctx.report("while fetching users", &err).await;
            None
        }
    }
}

/// Row click: open that user's profile.
pub fn open<B, S, H>(ctx: &Context<'_, B, S, H>, row: &UserRow)
where
    B: Backend,
    S: SessionStore,
    H: Shell,
{
    ctx.shell.navigate(&row.route());
}

#[cfg(test)]
mod tests {
    use super::super::testing::{RecordingShell, ScriptedBackend, unauthorized, user};
    use super::*;
    use crate::{
        api::AppError,
        session::{MemoryStore, Session},
    };
    use secrecy::SecretString;

    fn logged_in() -> MemoryStore {
        MemoryStore::with_session(Session::new(
            SecretString::from("tok"),
            UserId::parse("1").ok(),
        ))
    }

    #[tokio::test]
    async fn renders_one_navigable_row_per_user() {
        let backend = ScriptedBackend::default();
        backend.users.borrow_mut().push_back(Ok(vec![
            user("1", "ada", UserStatus::Online),
            user("2", "bob", UserStatus::Offline),
            user("3", "cy", UserStatus::Offline),
        ]));
        let store = logged_in();
        let shell = RecordingShell::default();
        let ctx = Context::new(&backend, &store, &shell);

        let rows = load(&ctx).await.unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].status_color, "green");
        assert_eq!(rows[1].status_color, "red");
        assert_eq!(
            rows.iter().map(|row| row.href.as_str()).collect::<Vec<_>>(),
            vec!["/users/1", "/users/2", "/users/3"]
        );

        open(&ctx, &rows[1]);
        assert_eq!(
            shell.routes(),
            vec![Route::UserProfile(UserId::parse("2").unwrap())]
        );
        assert_eq!(backend.calls(), vec!["GET /users"]);
    }

    #[tokio::test]
    async fn empty_list_renders_no_rows() {
        let backend = ScriptedBackend::default();
        backend.users.borrow_mut().push_back(Ok(Vec::new()));
        let store = logged_in();
        let shell = RecordingShell::default();

        let rows = load(&Context::new(&backend, &store, &shell)).await;

        assert_eq!(rows, Some(Vec::new()));
    }

    #[tokio::test]
    async fn unauthorized_forces_logout() {
        let backend = ScriptedBackend::default();
        backend.users.borrow_mut().push_back(Err(unauthorized()));
        let store = logged_in();
        let shell = RecordingShell::default();

        let rows = load(&Context::new(&backend, &store, &shell)).await;

        assert!(rows.is_none());
        assert!(store.load().unwrap().is_none());
        assert_eq!(shell.routes(), vec![Route::Login]);
        assert_eq!(backend.calls(), vec!["GET /users", "POST /users/1/logout"]);
        assert!(shell.alerts().is_empty());
    }

    #[tokio::test]
    async fn other_failures_are_alerted() {
        let backend = ScriptedBackend::default();
        backend
            .users
            .borrow_mut()
            .push_back(Err(AppError::Timeout("Request timed out.".to_string())));
        let store = logged_in();
        let shell = RecordingShell::default();

        let rows = load(&Context::new(&backend, &store, &shell)).await;

        assert!(rows.is_none());
        assert_eq!(
            shell.alerts(),
            vec!["Something went wrong while fetching users:\nTimeout: Request timed out."]
        );
        assert!(store.load().unwrap().is_some());
    }
}
