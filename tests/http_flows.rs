//! Page flows over real HTTP.
//!
//! Each test starts an in-process `axum` mock of the REST API on an ephemeral
//! port, then drives the page controllers with the `reqwest` client and a
//! session file in a temporary directory.

mod common;

use anyhow::Result;
use common::{Mock, TOKEN, serve};
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use std::{cell::RefCell, sync::Arc};
use tempfile::TempDir;
use userdesk::{
    api::{Backend, UserId, http::HttpClient},
    navigation::{Route, Shell},
    pages::{
        Context, Outcome,
        profile::{self, PASSWORD_CHANGED, PasswordForm, ProfileState},
        register::{self, RegisterForm},
        users,
    },
    session::{Session, SessionStore, file::FileStore},
};

#[derive(Default)]
struct RecordingShell {
    routes: RefCell<Vec<Route>>,
    alerts: RefCell<Vec<String>>,
}

impl Shell for RecordingShell {
    fn navigate(&self, route: &Route) {
        self.routes.borrow_mut().push(route.clone());
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

struct Fixture {
    _dir: TempDir,
    backend: HttpClient,
    store: FileStore,
    shell: RecordingShell,
    mock: Arc<Mock>,
}

impl Fixture {
    async fn new(session: Option<(&str, &str)>) -> Result<Self> {
        let (base_url, mock) = serve().await?;
        let dir = tempfile::tempdir()?;
        let store = FileStore::new(dir.path().join("session.json"));

        let mut token = None;
        if let Some((stored_token, user_id)) = session {
            store.save(&Session::new(
                SecretString::from(stored_token),
                Some(UserId::parse(user_id)?),
            ))?;
            token = Some(SecretString::from(stored_token));
        }

        Ok(Self {
            _dir: dir,
            backend: HttpClient::new(&base_url)?.with_token(token),
            store,
            shell: RecordingShell::default(),
            mock,
        })
    }

    fn context(&self) -> Context<'_, HttpClient, FileStore, RecordingShell> {
        Context::new(&self.backend, &self.store, &self.shell)
    }

    fn routes(&self) -> Vec<Route> {
        self.shell.routes.borrow().clone()
    }

    fn alerts(&self) -> Vec<String> {
        self.shell.alerts.borrow().clone()
    }
}

#[tokio::test]
async fn registration_stores_session_and_authorizes_the_list() -> Result<()> {
    let fixture = Fixture::new(None).await?;
    let ctx = fixture.context();

    let form = RegisterForm {
        name: "Ada".to_string(),
        username: "ada".to_string(),
        bio: String::new(),
        password: "secret".into(),
        confirm_password: "secret".into(),
    };
    let Outcome::Done(user) = register::submit(&ctx, &form).await else {
        panic!("registration should succeed");
    };
    assert_eq!(user.id.as_str(), "7");
    assert_eq!(fixture.routes(), vec![Route::Users]);

    let session = fixture.store.load()?.expect("session stored");
    assert_eq!(session.token.expose_secret(), TOKEN);
    assert_eq!(session.user_id.as_ref().map(UserId::as_str), Some("7"));

    assert_eq!(
        fixture.mock.bodies(),
        vec![json!({
            "name": "Ada",
            "username": "ada",
            "password": "secret",
            "confirmPassword": "secret",
        })]
    );

    let rows = users::load(&ctx).await.expect("users listed");
    let hrefs: Vec<_> = rows.iter().map(|row| row.href.as_str()).collect();
    assert_eq!(hrefs, vec!["/users/7", "/users/8"]);
    assert_eq!(rows[0].status_color, "green");
    assert_eq!(rows[1].status_color, "red");
    assert!(fixture.alerts().is_empty());
    Ok(())
}

#[tokio::test]
async fn rejected_token_clears_session_and_returns_to_login() -> Result<()> {
    let fixture = Fixture::new(Some(("expired", "7"))).await?;

    assert!(users::load(&fixture.context()).await.is_none());

    assert!(fixture.store.load()?.is_none());
    assert!(!fixture.store.path().exists());
    assert_eq!(fixture.routes(), vec![Route::Login]);
    assert_eq!(
        fixture.mock.calls(),
        vec!["GET /users".to_string(), "POST /users/7/logout".to_string()]
    );
    assert!(fixture.alerts().is_empty());
    Ok(())
}

#[tokio::test]
async fn own_profile_offers_password_change() -> Result<()> {
    let fixture = Fixture::new(Some((TOKEN, "7"))).await?;
    let ctx = fixture.context();

    let ProfileState::Loaded(own) = profile::load(&ctx, "7").await else {
        panic!("own profile should load");
    };
    assert!(own.can_change_password);
    assert_eq!(own.title, "ada's Profile");
    assert_eq!(own.creation_date, "Mar 5, 2025");
    assert_eq!(own.bio, "No bio provided");

    let ProfileState::Loaded(other) = profile::load(&ctx, "8").await else {
        panic!("other profile should load");
    };
    assert!(!other.can_change_password);

    assert_eq!(profile::load(&ctx, "99").await, ProfileState::NotFound);
    assert_eq!(
        fixture.alerts(),
        vec!["Something went wrong while fetching the user:\nRequest failed (404): User not found"]
    );
    Ok(())
}

#[tokio::test]
async fn password_change_logs_out() -> Result<()> {
    let fixture = Fixture::new(Some((TOKEN, "7"))).await?;
    let id = UserId::parse("7")?;

    let form = PasswordForm {
        current_password: "old-secret".into(),
        new_password: "new-secret".into(),
        confirm_password: "new-secret".into(),
    };
    let outcome = profile::change_password(&fixture.context(), &id, &form).await;

    assert_eq!(outcome, Outcome::Done(()));
    assert_eq!(fixture.alerts(), vec![PASSWORD_CHANGED.to_string()]);
    assert_eq!(fixture.routes(), vec![Route::Login]);
    assert!(fixture.store.load()?.is_none());
    assert_eq!(
        fixture.mock.bodies(),
        vec![json!({ "oldPassword": "old-secret", "newPassword": "new-secret" })]
    );
    assert_eq!(
        fixture.mock.calls(),
        vec!["POST /users/7".to_string(), "POST /users/7/logout".to_string()]
    );
    Ok(())
}

#[tokio::test]
async fn rejected_password_change_keeps_session() -> Result<()> {
    let fixture = Fixture::new(Some((TOKEN, "7"))).await?;
    let id = UserId::parse("7")?;

    let form = PasswordForm {
        current_password: "wrong".into(),
        new_password: "new-secret".into(),
        confirm_password: "new-secret".into(),
    };
    let outcome = profile::change_password(&fixture.context(), &id, &form).await;

    assert_eq!(outcome, Outcome::Reported);
    assert_eq!(
        fixture.alerts(),
        vec!["Something went wrong while changing password:\nRequest failed (400): Wrong password"]
    );
    assert!(fixture.routes().is_empty());
    assert!(fixture.store.load()?.is_some());
    Ok(())
}

#[tokio::test]
async fn logout_clears_token_from_client() -> Result<()> {
    let fixture = Fixture::new(Some((TOKEN, "7"))).await?;

    fixture.context().logout().await;
    assert_eq!(fixture.routes(), vec![Route::Login]);

    // The client no longer sends the old token.
    assert!(users::load(&fixture.context()).await.is_none());
    assert_eq!(
        fixture.mock.calls(),
        vec!["POST /users/7/logout".to_string(), "GET /users".to_string()]
    );
    Ok(())
}

#[tokio::test]
async fn unreachable_server_is_alerted() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = FileStore::new(dir.path().join("session.json"));
    let shell = RecordingShell::default();
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let address = listener.local_addr()?;
    drop(listener);

    let backend = HttpClient::new(&format!("http://{address}"))?;
    backend.set_token(Some(SecretString::from(TOKEN)));
    let ctx = Context::new(&backend, &store, &shell);

    assert!(users::load(&ctx).await.is_none());
    let alerts = shell.alerts.borrow();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].starts_with("Something went wrong while fetching users:\n"));
    assert!(shell.routes.borrow().is_empty());
    Ok(())
}
