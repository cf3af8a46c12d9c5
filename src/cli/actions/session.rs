use super::{CliContext, Globals};
use crate::{cli::terminal::TerminalShell, pages::Context, session::SessionStore};
use anyhow::Result;

/// Marks the user offline and forgets the stored session.
///
/// # Errors
/// Returns an error if the API client cannot be built from the configuration.
pub async fn handle_logout(globals: &Globals) -> Result<()> {
    let (backend, store) = globals.connect()?;
    let shell = TerminalShell::new();
    let ctx: CliContext<'_> = Context::new(&backend, &store, &shell);

    ctx.logout().await;
    println!("Logged out.");
    Ok(())
}

/// Prints the logged-in user id. The token itself is never printed.
///
/// # Errors
/// Returns an error if the session file cannot be read.
pub fn handle_show(globals: &Globals) -> Result<()> {
    let (_, store) = globals.connect()?;

    match store.load()? {
        Some(session) => match session.user_id {
            Some(user_id) => println!("Logged in as user {user_id}."),
            None => println!("Logged in."),
        },
        None => println!("Not logged in."),
    }
    Ok(())
}
