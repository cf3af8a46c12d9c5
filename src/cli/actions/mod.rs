//! CLI actions. Each one runs a single page flow against the configured API
//! and the session file, then prints the resulting page.

pub mod profile;
pub mod register;
pub mod session;
pub mod users;

use crate::{
    api::http::HttpClient,
    cli::terminal::TerminalShell,
    navigation::Route,
    pages::Context,
    session::{SessionStore, file::FileStore},
};
use anyhow::{Result, bail};
use std::path::PathBuf;
use tracing::warn;

pub(crate) type CliContext<'a> = Context<'a, HttpClient, FileStore, TerminalShell>;

/// Options shared by every action.
#[derive(Clone, Debug)]
pub struct Globals {
    pub api_url: String,
    pub session_file: PathBuf,
}

impl Globals {
    /// Builds the API client, installing the stored token if there is one.
    ///
    /// An unreadable session file counts as no session, so logout and
    /// registration can still replace or remove it.
    ///
    /// # Errors
    /// Returns an error if the API URL is invalid.
    pub fn connect(&self) -> Result<(HttpClient, FileStore)> {
        let store = FileStore::new(&self.session_file);
        let token = match store.load() {
            Ok(session) => session.map(|session| session.token),
            Err(err) => {
                warn!(error = %err, "ignoring unreadable session");
                None
            }
        };
        let backend = HttpClient::new(&self.api_url)?.with_token(token);
        Ok((backend, store))
    }
}

#[derive(Debug)]
pub enum Action {
    Register(register::Args),
    Users(Globals),
    User(profile::Args),
    Password(profile::PasswordArgs),
    Logout(Globals),
    Session(Globals),
}

impl Action {
    /// Runs the action to completion.
    ///
    /// # Errors
    /// Returns an error when the flow did not complete; the user has already
    /// been told why on stderr.
    pub async fn execute(self) -> Result<()> {
        match self {
            Self::Register(args) => register::handle(args).await,
            Self::Users(globals) => users::handle(&globals).await,
            Self::User(args) => profile::handle(&args).await,
            Self::Password(args) => profile::handle_password(args).await,
            Self::Logout(globals) => session::handle_logout(&globals).await,
            Self::Session(globals) => session::handle_show(&globals),
        }
    }
}

/// Turns a navigation to the login screen into a failed command.
fn ensure_not_logged_out(shell: &TerminalShell) -> Result<()> {
    if shell.location() == Some(Route::Login) {
        bail!("session ended, please log in again");
    }
    Ok(())
}
